mod argument_validator;
mod directive_validator;
mod document_validator;
mod field_selection_validator;
mod fragment_validator;
mod leaf_selection_validator;
mod operation_name_validator;
mod overlapping_fields_validator;
mod subscription_root_validator;
mod validated_document;
mod validation_context;
mod validation_error;
mod variable_validator;

use argument_validator::ArgumentValidator;
use directive_validator::DirectiveValidator;
pub use document_validator::DocumentValidator;
use field_selection_validator::FieldSelectionValidator;
use fragment_validator::FragmentValidator;
use leaf_selection_validator::LeafSelectionValidator;
use operation_name_validator::OperationNameValidator;
use overlapping_fields_validator::OverlappingFieldsValidator;
use subscription_root_validator::SubscriptionRootValidator;
pub use validated_document::ValidatedDocument;
pub use validation_error::ValidationError;
use variable_validator::VariableValidator;

#[cfg(test)]
mod tests;
