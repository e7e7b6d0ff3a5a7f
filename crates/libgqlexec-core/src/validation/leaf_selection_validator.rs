use crate::validation::ValidationError;
use crate::validation::validation_context::ValidationContext;
use graphql_parser::query::Selection;

/// https://spec.graphql.org/October2021/#sec-Leaf-Field-Selections
pub(super) struct LeafSelectionValidator<'a, 'ctx> {
    ctx: &'ctx ValidationContext<'a>,
}
impl<'a, 'ctx> LeafSelectionValidator<'a, 'ctx> {
    pub fn new(ctx: &'ctx ValidationContext<'a>) -> Self {
        Self { ctx }
    }

    pub fn validate(self) -> Vec<ValidationError> {
        let ctx = self.ctx;
        let mut errors = vec![];
        ctx.visit_selection_sets(&mut |parent_type, selection_set| {
            for selection in &selection_set.items {
                let Selection::Field(field) = selection else {
                    continue;
                };
                let Some(field_def) = ctx.field_definition(parent_type, &field.name) else {
                    continue;
                };
                let Some(field_type) = ctx.schema.type_definition(
                    field_def.type_ref().innermost_name(),
                ) else {
                    continue;
                };

                let has_subselection = !field.selection_set.items.is_empty();
                if field_type.is_leaf() && has_subselection {
                    errors.push(ValidationError::UnexpectedSubselection {
                        field_name: field.name.to_string(),
                        locations: vec![field.position.into()],
                        type_ref: field_def.type_ref().to_owned(),
                    });
                } else if field_type.is_composite() && !has_subselection {
                    errors.push(ValidationError::MissingSubselection {
                        field_name: field.name.to_string(),
                        locations: vec![field.position.into()],
                        type_ref: field_def.type_ref().to_owned(),
                    });
                }
            }
        });
        errors
    }
}
