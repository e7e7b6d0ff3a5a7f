use crate::validation::ValidationError;
use crate::validation::validation_context::ValidationContext;
use graphql_parser::query::Selection;

/// Checks that every selected field is defined on the type it is selected
/// from, and that each operation's root type exists.
///
/// https://spec.graphql.org/October2021/#sec-Fields-on-Correct-Type
pub(super) struct FieldSelectionValidator<'a, 'ctx> {
    ctx: &'ctx ValidationContext<'a>,
    errors: Vec<ValidationError>,
}
impl<'a, 'ctx> FieldSelectionValidator<'a, 'ctx> {
    pub fn new(ctx: &'ctx ValidationContext<'a>) -> Self {
        Self {
            ctx,
            errors: vec![],
        }
    }

    pub fn validate(mut self) -> Vec<ValidationError> {
        for op in &self.ctx.operations {
            if self.ctx.root_type(op).is_none() {
                self.errors.push(ValidationError::UndefinedRootOperationType {
                    locations: vec![op.position.into()],
                    operation_kind: op.kind,
                });
            }
        }

        let ctx = self.ctx;
        let errors = &mut self.errors;
        ctx.visit_selection_sets(&mut |parent_type, selection_set| {
            for selection in &selection_set.items {
                let Selection::Field(field) = selection else {
                    continue;
                };
                if ctx.field_definition(parent_type, &field.name).is_none() {
                    errors.push(ValidationError::UndefinedField {
                        field_name: field.name.to_string(),
                        locations: vec![field.position.into()],
                        type_name: parent_type.name().to_string(),
                    });
                }
            }
        });

        self.errors
    }
}
