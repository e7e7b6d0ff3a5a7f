use crate::ast;
use crate::schema::Schema;
use crate::validation::ArgumentValidator;
use crate::validation::DirectiveValidator;
use crate::validation::FieldSelectionValidator;
use crate::validation::FragmentValidator;
use crate::validation::LeafSelectionValidator;
use crate::validation::OperationNameValidator;
use crate::validation::OverlappingFieldsValidator;
use crate::validation::SubscriptionRootValidator;
use crate::validation::ValidatedDocument;
use crate::validation::ValidationError;
use crate::validation::VariableValidator;
use crate::validation::validation_context::ValidationContext;

type Result<T> = std::result::Result<T, Vec<ValidationError>>;

/// Validates an executable document against a [`Schema`], producing a
/// [`ValidatedDocument`] only when every rule passes.
///
/// Rules run as a fixed sequence of passes over the whole document; every
/// pass runs and errors are reported in pass order.
///
/// https://spec.graphql.org/October2021/#sec-Validation
pub struct DocumentValidator<'schema> {
    document: ast::query::Document,
    schema: &'schema Schema,
}
impl<'schema> DocumentValidator<'schema> {
    pub fn new(schema: &'schema Schema, document: ast::query::Document) -> Self {
        Self {
            document,
            schema,
        }
    }

    /// Parses `content` and validates it. Parse errors are returned as-is.
    pub fn from_str(
        schema: &'schema Schema,
        content: impl AsRef<str>,
    ) -> std::result::Result<Self, ast::query::ParseError> {
        Ok(Self::new(schema, ast::query::parse(content.as_ref())?))
    }

    pub fn validate(self) -> Result<ValidatedDocument> {
        let errors = {
            let ctx = ValidationContext::new(self.schema, &self.document);
            let mut errors = vec![];
            errors.append(&mut OperationNameValidator::new(&ctx).validate());
            errors.append(&mut SubscriptionRootValidator::new(&ctx).validate());
            errors.append(&mut FieldSelectionValidator::new(&ctx).validate());

            let mut fragment_errors = FragmentValidator::new(&ctx).validate();
            let has_fragment_cycle = fragment_errors.iter()
                .any(|err| matches!(err, ValidationError::FragmentCycle { .. }));
            errors.append(&mut fragment_errors);

            // Merging fields through a cyclic spread would never terminate.
            if !has_fragment_cycle {
                errors.append(&mut OverlappingFieldsValidator::new(&ctx).validate());
            }

            errors.append(&mut LeafSelectionValidator::new(&ctx).validate());
            errors.append(&mut ArgumentValidator::new(&ctx).validate());
            errors.append(&mut DirectiveValidator::new(&ctx).validate());
            errors.append(&mut VariableValidator::new(&ctx).validate());
            errors
        };

        if !errors.is_empty() {
            tracing::debug!("document failed validation with {} error(s)", errors.len());
            return Err(errors);
        }
        Ok(ValidatedDocument::new(self.document))
    }
}
