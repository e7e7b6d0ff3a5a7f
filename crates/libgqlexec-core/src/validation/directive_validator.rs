use crate::validation::ValidationError;
use crate::validation::validation_context::ValidationContext;
use std::collections::HashSet;

/// Checks that directives written in a document are defined, legal where
/// they are written, and not repeated unless repeatable.
///
/// https://spec.graphql.org/October2021/#sec-Validation.Directives
pub(super) struct DirectiveValidator<'a, 'ctx> {
    ctx: &'ctx ValidationContext<'a>,
}
impl<'a, 'ctx> DirectiveValidator<'a, 'ctx> {
    pub fn new(ctx: &'ctx ValidationContext<'a>) -> Self {
        Self { ctx }
    }

    pub fn validate(self) -> Vec<ValidationError> {
        let schema = self.ctx.schema;
        let mut errors = vec![];
        self.ctx.visit_directives(&mut |directives, location| {
            let mut seen = HashSet::new();
            for directive in directives {
                let Some(directive_def) = schema.directive(&directive.name) else {
                    errors.push(ValidationError::UndefinedDirective {
                        directive_name: directive.name.to_string(),
                        locations: vec![directive.position.into()],
                    });
                    continue;
                };

                if !directive_def.locations().contains(&location) {
                    errors.push(ValidationError::DirectiveNotAllowedAtLocation {
                        directive_name: directive.name.to_string(),
                        location,
                        locations: vec![directive.position.into()],
                    });
                }

                if !seen.insert(directive.name.as_str()) && !directive_def.is_repeatable() {
                    errors.push(ValidationError::DuplicateNonRepeatableDirective {
                        directive_name: directive.name.to_string(),
                        locations: vec![directive.position.into()],
                    });
                }
            }
        });
        errors
    }
}
