mod default_value_validator;
mod directive_annotation_validator;
mod directive_cycle_validator;
mod introspection_schema;
#[allow(clippy::module_inception)]
mod schema;
mod schema_build_error;
mod schema_builder;
mod type_validation_error;

use default_value_validator::DefaultValueValidator;
use directive_annotation_validator::DirectiveAnnotationValidator;
use directive_cycle_validator::DirectiveCycleValidator;
pub use schema::Schema;
pub use schema_build_error::NamedTypeDefLocation;
pub use schema_build_error::SchemaBuildError;
pub use schema_builder::SchemaBuilder;
pub use type_validation_error::TypeValidationError;

#[cfg(test)]
mod tests;
