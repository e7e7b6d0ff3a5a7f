use crate::loc::DocumentPosition;
use crate::validation::ValidationError;
use crate::validation::validation_context::ValidationContext;
use indexmap::IndexMap;

/// Checks that operation names are unique and that an anonymous operation
/// only appears alone.
pub(super) struct OperationNameValidator<'a, 'ctx> {
    ctx: &'ctx ValidationContext<'a>,
    errors: Vec<ValidationError>,
}
impl<'a, 'ctx> OperationNameValidator<'a, 'ctx> {
    pub fn new(ctx: &'ctx ValidationContext<'a>) -> Self {
        Self {
            ctx,
            errors: vec![],
        }
    }

    pub fn validate(mut self) -> Vec<ValidationError> {
        let mut positions_by_name = IndexMap::<&str, Vec<DocumentPosition>>::new();
        for op in &self.ctx.operations {
            match op.name {
                Some(name) => positions_by_name.entry(name)
                    .or_default()
                    .push(op.position.into()),

                None if self.ctx.operations.len() > 1 =>
                    self.errors.push(ValidationError::AnonymousOperationNotAlone {
                        locations: vec![op.position.into()],
                    }),

                None => (),
            }
        }

        for (name, positions) in positions_by_name {
            if positions.len() > 1 {
                self.errors.push(ValidationError::DuplicateOperationName {
                    locations: positions,
                    operation_name: name.to_string(),
                });
            }
        }

        self.errors
    }
}
