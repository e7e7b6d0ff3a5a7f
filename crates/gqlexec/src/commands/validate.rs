use crate::Cli;
use crate::CommandResult;
use crate::RunnableCommand;
use crate::graphql_files;
use crate::output_utils;
use libgqlexec::Schema;
use libgqlexec::file_reader;
use libgqlexec::validation::DocumentValidator;
use std::path::Path;
use std::path::PathBuf;

#[derive(Debug, clap::Args)]
pub(crate) struct ValidateCmd {
    #[arg(
        help="Paths to executable GraphQL documents (or directories of them) \
             to validate against the schema.",
        long="document",
        short='d',
    )]
    document_paths: Vec<PathBuf>,

    #[arg(
        default_values_t=[
            "graphql".to_string(),
            "graphqls".to_string(),
        ],
        help="Set of file extensions to filter to when searching for files \
             within a directory.",
        long,
        value_delimiter = ',',
    )]
    graphql_file_exts: Vec<String>,

    #[arg(
        help="Paths to one or more GraphQL schema files or directories \
             containing GraphQL schema files.",
        name="SCHEMA_PATHS",
        required=true,
    )]
    schema_paths: Vec<PathBuf>,
}

#[inherent::inherent]
impl RunnableCommand for ValidateCmd {
    pub async fn run(self, _cli: Cli) -> CommandResult {
        let exts = graphql_files::normalize_exts(&self.graphql_file_exts);
        let schema_files = match graphql_files::discover(&self.schema_paths, &exts) {
            Ok(found) => found,
            Err(err) => return CommandResult::stderr(format_args!(
                "{} {err:#}",
                output_utils::RED_X,
            )),
        };

        let schema = match super::build_schema(&schema_files.file_paths) {
            Ok(schema) => schema,
            Err(errors) => return CommandResult::stderr(format_args!(
                "{} Errors validating schema:\n{errors}",
                output_utils::RED_X,
            )),
        };

        let document_files =
            if self.document_paths.is_empty() {
                graphql_files::GraphQLFiles::default()
            } else {
                match graphql_files::discover(&self.document_paths, &exts) {
                    Ok(found) => found,
                    Err(err) => return CommandResult::stderr(format_args!(
                        "{} {err:#}",
                        output_utils::RED_X,
                    )),
                }
            };

        let mut failures = vec![];
        let mut num_operations = 0;
        for file_path in &document_files.file_paths {
            match validate_document(&schema, file_path) {
                Ok(operations) => num_operations += operations,
                Err(errors) => failures.push(format!(
                    "{}:\n{errors}",
                    file_path.display(),
                )),
            }
        }

        if !failures.is_empty() {
            return CommandResult::stderr(format_args!(
                "{} Errors validating {} of {} documents:\n{}",
                output_utils::RED_X,
                failures.len(),
                document_files.file_paths.len(),
                failures.join("\n"),
            ));
        }

        CommandResult::stdout(format_args!(
            concat!(
                "{} All GraphQL validated successfully:\n",
                "  * Analyzed {} schema files.\n",
                "  * Skipped {} non-graphql files.\n",
                "  * Validated {} type definitions.\n",
                "  * Validated {} directive definitions.\n",
                "  * Validated {} operations in {} documents.",
            ),
            output_utils::GREEN_CHECK,
            schema_files.file_paths.len(),
            schema_files.num_skipped_files + document_files.num_skipped_files,
            schema.defined_types().count(),
            schema.directives().len(),
            num_operations,
            document_files.file_paths.len(),
        ))
    }
}

/// Validates one document file, returning the number of operations it
/// defines.
fn validate_document(schema: &Schema, file_path: &Path) -> Result<usize, String> {
    log::debug!("Validating document {file_path:#?}.");
    let content = file_reader::read_content(file_path)
        .map_err(|err| format!("  * {err}"))?;
    let validator = DocumentValidator::from_str(schema, content)
        .map_err(|err| format!("  * Failed to parse: {err}"))?;
    let document = validator.validate()
        .map_err(|errors| output_utils::bullet_list(errors.iter()))?;
    Ok(document.operations().len())
}
