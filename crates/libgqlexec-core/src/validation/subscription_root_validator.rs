use crate::ast;
use crate::loc::DocumentPosition;
use crate::operation::OperationKind;
use crate::validation::ValidationError;
use crate::validation::validation_context::ValidationContext;
use graphql_parser::query::Selection;
use indexmap::IndexMap;
use std::collections::HashSet;

/// https://spec.graphql.org/October2021/#sec-Single-root-field
pub(super) struct SubscriptionRootValidator<'a, 'ctx> {
    ctx: &'ctx ValidationContext<'a>,
    errors: Vec<ValidationError>,
}
impl<'a, 'ctx> SubscriptionRootValidator<'a, 'ctx> {
    pub fn new(ctx: &'ctx ValidationContext<'a>) -> Self {
        Self {
            ctx,
            errors: vec![],
        }
    }

    pub fn validate(mut self) -> Vec<ValidationError> {
        let subscriptions = self.ctx.operations.iter()
            .filter(|op| op.kind == OperationKind::Subscription);

        for op in subscriptions {
            let mut root_fields = IndexMap::new();
            self.collect_root_fields(op.selection_set, &mut HashSet::new(), &mut root_fields);

            let operation_name = op.name.map(str::to_string);
            if root_fields.len() != 1 {
                self.errors.push(ValidationError::SubscriptionMultipleRootFields {
                    locations: vec![op.position.into()],
                    operation_name,
                });
                continue;
            }

            if let Some((field_name, position)) = root_fields.values().next()
                && field_name.starts_with("__") {
                self.errors.push(ValidationError::SubscriptionIntrospectionRootField {
                    field_name: field_name.to_string(),
                    locations: vec![*position],
                    operation_name,
                });
            }
        }

        self.errors
    }

    /// Groups root fields by response key, following fragments. Directives
    /// are not evaluated here: a root field is counted even when it might
    /// be skipped at execution time.
    fn collect_root_fields(
        &self,
        selection_set: &'a ast::query::SelectionSet,
        visited_fragments: &mut HashSet<&'a str>,
        root_fields: &mut IndexMap<&'a str, (&'a str, DocumentPosition)>,
    ) {
        for selection in &selection_set.items {
            match selection {
                Selection::Field(field) => {
                    let response_key = field.alias.as_deref().unwrap_or(&field.name);
                    root_fields.entry(response_key)
                        .or_insert((field.name.as_str(), field.position.into()));
                },
                Selection::InlineFragment(inline_frag) => self.collect_root_fields(
                    &inline_frag.selection_set,
                    visited_fragments,
                    root_fields,
                ),
                Selection::FragmentSpread(spread) => {
                    let Some(&frag_def) = self.ctx.fragments.get(spread.fragment_name.as_str()) else {
                        continue;
                    };
                    if visited_fragments.insert(frag_def.name.as_str()) {
                        self.collect_root_fields(
                            &frag_def.selection_set,
                            visited_fragments,
                            root_fields,
                        );
                    }
                },
            }
        }
    }
}
