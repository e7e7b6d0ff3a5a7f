use crate::Cli;
use crate::CommandResult;
use crate::RunnableCommand;
use crate::output_utils;
use anyhow::Context;
use indexmap::IndexMap;
use libgqlexec::Engine;
use libgqlexec::Value;
use libgqlexec::execution::ResolverRegistry;
use libgqlexec::file_reader;
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Debug, clap::Args)]
pub(crate) struct ExecCmd {
    #[arg(
        help="Name of the operation to execute when the query file defines \
             more than one.",
        long,
    )]
    operation_name: Option<String>,

    #[arg(
        help="Path to the executable GraphQL document to run.",
        long,
        short='q',
    )]
    query: PathBuf,

    #[arg(
        help="Path to a JSON file used as the root value. Every field \
             without a dedicated resolver reads the same-named property of \
             its parent.",
        long,
    )]
    root_value: Option<PathBuf>,

    #[arg(
        help="Paths to the GraphQL schema files to execute against.",
        long,
        required=true,
        short='s',
    )]
    schema: Vec<PathBuf>,

    #[arg(
        help="Variable values as a JSON object.",
        long,
    )]
    variables: Option<String>,
}

#[inherent::inherent]
impl RunnableCommand for ExecCmd {
    pub async fn run(self, _cli: Cli) -> CommandResult {
        let schema = match super::build_schema(&self.schema) {
            Ok(schema) => schema,
            Err(errors) => return CommandResult::stderr(format_args!(
                "{} Errors validating schema:\n{errors}",
                output_utils::RED_X,
            )),
        };

        let inputs = self.load_inputs();
        let (query, root_value, variables) = match inputs {
            Ok(inputs) => inputs,
            Err(err) => return CommandResult::stderr(format_args!(
                "{} {err:#}",
                output_utils::RED_X,
            )),
        };

        let resolvers = ResolverRegistry::builder(&schema)
            .add_property_resolvers()
            .build();
        let engine = Engine::new(schema, resolvers).with_root_value(root_value);
        log::debug!(
            "Executing {:#?} (operation: {:?}).",
            self.query,
            self.operation_name,
        );
        let response = engine.execute_str(
            &query,
            self.operation_name.as_deref(),
            &variables,
        ).await;

        let exit_code =
            if response.is_ok() { ExitCode::SUCCESS } else { ExitCode::FAILURE };
        match serde_json::to_string_pretty(&response) {
            Ok(json) => CommandResult::stdout(format_args!("{json}"))
                .with_exit_code(exit_code),
            Err(err) => CommandResult::stderr(format_args!(
                "{} Failed to serialize the response: {err}",
                output_utils::RED_X,
            )),
        }
    }
}

impl ExecCmd {
    fn load_inputs(&self) -> anyhow::Result<(String, Value, IndexMap<String, Value>)> {
        let query = file_reader::read_content(&self.query)?;

        let root_value = match &self.root_value {
            Some(path) => {
                let content = file_reader::read_content(path)?;
                let json: serde_json::Value = serde_json::from_str(&content)
                    .with_context(|| format!("Failed to parse {path:#?} as JSON"))?;
                Value::from(json)
            },
            None => Value::Object(IndexMap::new()),
        };

        let variables = match &self.variables {
            Some(variables) => parse_variables(variables)?,
            None => IndexMap::new(),
        };

        Ok((query, root_value, variables))
    }
}

fn parse_variables(json: &str) -> anyhow::Result<IndexMap<String, Value>> {
    let parsed: serde_json::Value = serde_json::from_str(json)
        .context("Failed to parse --variables as JSON")?;
    match parsed {
        serde_json::Value::Object(entries) => Ok(
            entries.into_iter()
                .map(|(name, value)| (name, Value::from(value)))
                .collect()
        ),
        serde_json::Value::Null => Ok(IndexMap::new()),
        other => anyhow::bail!("Expected --variables to be a JSON object, got `{other}`"),
    }
}
