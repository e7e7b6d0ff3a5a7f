mod cli;
mod command;
mod command_result;
mod commands;
mod graphql_files;
mod output_utils;

use clap::Parser;
pub(crate) use cli::Cli;
pub(crate) use command::RunnableCommand;
pub(crate) use command_result::CommandResult;

const DEFAULT_LOG_LEVEL: tracing::Level = tracing::Level::INFO;

#[tokio::main(flavor = "multi_thread", worker_threads = 4)]
async fn main() -> std::process::ExitCode {
    let mut cli = Cli::parse();
    setup_logger(&cli);

    if let Some(command) = cli.cmd.take() {
        let result = command.run(cli).await;
        if let Some(stdout) = result.stdout {
            println!("{stdout}");
        }
        if let Some(stderr) = result.stderr {
            eprintln!("{stderr}")
        }
        result.exit_code
    } else {
        match cli.run_default().await {
            Ok(()) => std::process::ExitCode::SUCCESS,
            Err(err) => {
                eprintln!("{err:#}");
                std::process::ExitCode::FAILURE
            },
        }
    }
}

fn setup_logger(cli: &Cli) {
    let (log_level, warning) =
        if cli.verbose {
            (tracing::Level::DEBUG, None)
        } else {
            match std::env::var("LOG_LEVEL") {
                Ok(env_val) => match parse_log_level(&env_val) {
                    Some(level) => (level, None),
                    None => (DEFAULT_LOG_LEVEL, Some(env_val)),
                },
                Err(_) => (DEFAULT_LOG_LEVEL, None),
            }
        };

    // Logs go to stderr so `exec` output stays pipeable JSON.
    tracing_subscriber::fmt()
        .with_max_level(log_level)
        .with_writer(std::io::stderr)
        .init();
    log::trace!("Logging level set to `{log_level}`.");

    if let Some(invalid) = warning {
        log::warn!(
            "Ignoring invalid `LOG_LEVEL` environment variable value: `{}`",
            invalid.trim(),
        );
    }
}

/// `verbose` is accepted as an alias of `debug`.
fn parse_log_level(env_val: &str) -> Option<tracing::Level> {
    match env_val.trim().to_ascii_lowercase().as_str() {
        "trace" => Some(tracing::Level::TRACE),
        "debug" | "verbose" => Some(tracing::Level::DEBUG),
        "info" => Some(tracing::Level::INFO),
        "warn" => Some(tracing::Level::WARN),
        "error" => Some(tracing::Level::ERROR),
        _ => None,
    }
}
