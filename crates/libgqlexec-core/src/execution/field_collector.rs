use crate::ast;
use crate::execution::ExecutionError;
use crate::execution::execution_context::ExecutionContext;
use crate::operation;
use crate::types::ObjectType;
use crate::Value;
use graphql_parser::query::Selection;
use indexmap::IndexMap;
use std::collections::HashSet;

/// Field nodes grouped by response key, in the order the keys were first
/// encountered.
pub(crate) type GroupedFields<'a> = IndexMap<&'a str, Vec<&'a ast::query::Field>>;

/// https://spec.graphql.org/October2021/#CollectFields()
pub(crate) fn collect_fields<'a>(
    ctx: &ExecutionContext<'a>,
    object_type: &ObjectType,
    selection_set: &'a ast::query::SelectionSet,
    visited_fragments: &HashSet<&'a str>,
    grouped: &mut GroupedFields<'a>,
) {
    for selection in &selection_set.items {
        match selection {
            Selection::Field(field) => {
                if !should_include(ctx, &field.directives) {
                    continue;
                }
                let response_key = field.alias.as_deref().unwrap_or(&field.name);
                grouped.entry(response_key).or_default().push(field);
            },

            Selection::FragmentSpread(spread) => {
                let frag_name = spread.fragment_name.as_str();
                if visited_fragments.contains(frag_name)
                    || !should_include(ctx, &spread.directives) {
                    continue;
                }
                let Some(frag_def) = ctx.document.fragment(frag_name) else {
                    continue;
                };
                let type_name = operation::type_condition_name(&frag_def.type_condition);
                if !does_fragment_type_apply(ctx, object_type, type_name) {
                    continue;
                }
                let mut branch_visited = visited_fragments.clone();
                branch_visited.insert(frag_name);
                collect_fields(ctx, object_type, &frag_def.selection_set, &branch_visited, grouped);
            },

            Selection::InlineFragment(inline_frag) => {
                if !should_include(ctx, &inline_frag.directives) {
                    continue;
                }
                if let Some(type_cond) = &inline_frag.type_condition {
                    let type_name = operation::type_condition_name(type_cond);
                    if !does_fragment_type_apply(ctx, object_type, type_name) {
                        continue;
                    }
                }
                collect_fields(
                    ctx,
                    object_type,
                    &inline_frag.selection_set,
                    visited_fragments,
                    grouped,
                );
            },
        }
    }
}

/// https://spec.graphql.org/October2021/#DoesFragmentTypeApply()
fn does_fragment_type_apply(
    ctx: &ExecutionContext<'_>,
    object_type: &ObjectType,
    type_condition_name: &str,
) -> bool {
    type_condition_name == object_type.name()
        || ctx.schema.is_possible_type(type_condition_name, object_type.name())
}

/// Evaluates `@skip` and `@include`. A condition that does not resolve to a
/// Boolean is recorded as an error and the selection is kept.
fn should_include(ctx: &ExecutionContext<'_>, directives: &[ast::query::Directive]) -> bool {
    for directive in directives {
        let skip_when = match directive.name.as_str() {
            "skip" => true,
            "include" => false,
            _ => continue,
        };
        let condition = directive.arguments.iter()
            .find(|(arg_name, _)| arg_name == "if")
            .and_then(|(_, arg_value)| condition_value(ctx, arg_value));
        match condition {
            Some(condition) if condition == skip_when => return false,
            Some(_) => (),
            None => ctx.record_error(
                ExecutionError::NonBooleanCondition {
                    directive_name: directive.name.to_string(),
                    locations: vec![directive.position.into()],
                },
                None,
            ),
        }
    }
    true
}

fn condition_value(ctx: &ExecutionContext<'_>, value: &ast::query::Value) -> Option<bool> {
    use graphql_parser::query::Value as AstValue;
    match value {
        AstValue::Boolean(b) => Some(*b),
        AstValue::Variable(var_name) => ctx.variable_values.get(var_name)
            .and_then(Value::as_bool),
        _ => None,
    }
}
