mod exec;
mod validate;

use crate::Cli;
use crate::CommandResult;
use exec::ExecCmd;
use libgqlexec::Schema;
use libgqlexec::SchemaBuilder;
use std::path::PathBuf;
use validate::ValidateCmd;

#[derive(Debug, clap::Parser)]
#[command(name = "gqlexec")]
pub(crate) enum CommandEnum {
    /// Validate a schema and, optionally, executable documents against it.
    Validate(Box<ValidateCmd>),

    /// Execute one operation against a JSON root value.
    Exec(Box<ExecCmd>),
}
impl CommandEnum {
    pub(crate) async fn run(self, cli: Cli) -> CommandResult {
        match self {
            Self::Validate(cmd) => cmd.run(cli).await,
            Self::Exec(cmd) => cmd.run(cli).await,
        }
    }
}

/// Builds a schema from files, rendering every failure as a single message.
fn build_schema(file_paths: &[PathBuf]) -> Result<Schema, String> {
    let builder = SchemaBuilder::new()
        .load_files(file_paths.to_vec())
        .map_err(|err| err.to_string())?;
    builder.build().map_err(|errors| {
        crate::output_utils::bullet_list(errors.iter())
    })
}
