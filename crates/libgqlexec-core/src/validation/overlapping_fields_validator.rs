use crate::ast;
use crate::loc::DocumentPosition;
use crate::types::Field;
use crate::types::GraphQLType;
use crate::types::TypeRef;
use crate::validation::ValidationError;
use crate::validation::validation_context::ValidationContext;
use graphql_parser::query::Selection;
use indexmap::IndexMap;
use std::collections::HashSet;

/// A field selection along with the type it was selected from.
struct FieldAndDef<'a> {
    def: Option<&'a Field>,
    field: &'a ast::query::Field,
    parent_type: &'a GraphQLType,
}

/// Selections grouped by response key (alias, or field name when
/// unaliased).
type FieldsByResponseKey<'a> = IndexMap<&'a str, Vec<FieldAndDef<'a>>>;

/// Checks that fields which share a response key can be merged into one
/// response entry.
///
/// Expects a document whose fragment spreads are acyclic.
///
/// https://spec.graphql.org/October2021/#sec-Field-Selection-Merging
pub(super) struct OverlappingFieldsValidator<'a, 'ctx> {
    ctx: &'ctx ValidationContext<'a>,
    errors: Vec<ValidationError>,
    reported: HashSet<(String, Vec<DocumentPosition>)>,
}
impl<'a, 'ctx> OverlappingFieldsValidator<'a, 'ctx> {
    pub fn new(ctx: &'ctx ValidationContext<'a>) -> Self {
        Self {
            ctx,
            errors: vec![],
            reported: HashSet::new(),
        }
    }

    pub fn validate(mut self) -> Vec<ValidationError> {
        let mut selection_sets = vec![];
        self.ctx.visit_selection_sets(&mut |parent_type, selection_set| {
            selection_sets.push((parent_type, selection_set));
        });
        for (parent_type, selection_set) in selection_sets {
            let mut fields = FieldsByResponseKey::new();
            self.collect_fields(&mut fields, parent_type, selection_set, &mut HashSet::new());
            self.check_fields_can_merge(&fields);
        }
        self.errors
    }

    /// https://spec.graphql.org/October2021/#FieldsInSetCanMerge()
    fn check_fields_can_merge(&mut self, fields: &FieldsByResponseKey<'a>) {
        for (response_key, group) in fields {
            for (idx, field_a) in group.iter().enumerate() {
                for field_b in &group[idx + 1..] {
                    self.check_pair(response_key, field_a, field_b);
                }
            }
        }
    }

    fn check_pair(&mut self, response_key: &str, a: &FieldAndDef<'a>, b: &FieldAndDef<'a>) {
        if let Some(reason) = self.shape_conflict(a, b) {
            self.report(response_key, reason, a, b);
            return;
        }

        // Fields on two different object types can never both be present in
        // one response object, so only their shape has to agree.
        let parents_are_exclusive = a.parent_type.name() != b.parent_type.name()
            && matches!(a.parent_type, GraphQLType::Object(_))
            && matches!(b.parent_type, GraphQLType::Object(_));
        if parents_are_exclusive {
            return;
        }

        if a.field.name != b.field.name {
            let reason = format!(
                "`{}` and `{}` are different fields",
                a.field.name,
                b.field.name,
            );
            self.report(response_key, reason, a, b);
            return;
        }

        if !same_arguments(a.field, b.field) {
            self.report(response_key, "they have differing arguments".to_string(), a, b);
            return;
        }

        let merged_type = a.def.and_then(|def| self.ctx.field_selection_type(def));
        if let Some(merged_type) = merged_type {
            let mut merged = FieldsByResponseKey::new();
            let mut visited = HashSet::new();
            self.collect_fields(&mut merged, merged_type, &a.field.selection_set, &mut visited);
            self.collect_fields(&mut merged, merged_type, &b.field.selection_set, &mut visited);
            self.check_fields_can_merge(&merged);
        }
    }

    /// https://spec.graphql.org/October2021/#SameResponseShape()
    fn shape_conflict(&self, a: &FieldAndDef<'a>, b: &FieldAndDef<'a>) -> Option<String> {
        let (Some(a_def), Some(b_def)) = (a.def, b.def) else {
            return None;
        };
        if !self.same_type_shape(a_def.type_ref(), b_def.type_ref()) {
            return Some(format!(
                "they return conflicting types `{}` and `{}`",
                a_def.type_ref(),
                b_def.type_ref(),
            ));
        }

        let a_type = self.ctx.field_selection_type(a_def)?;
        let b_type = self.ctx.field_selection_type(b_def)?;
        let mut merged = FieldsByResponseKey::new();
        self.collect_fields(&mut merged, a_type, &a.field.selection_set, &mut HashSet::new());
        self.collect_fields(&mut merged, b_type, &b.field.selection_set, &mut HashSet::new());
        for (response_key, group) in &merged {
            for (idx, sub_a) in group.iter().enumerate() {
                for sub_b in &group[idx + 1..] {
                    if let Some(reason) = self.shape_conflict(sub_a, sub_b) {
                        return Some(format!(
                            "subfields `{response_key}` conflict because {reason}",
                        ));
                    }
                }
            }
        }
        None
    }

    fn same_type_shape(&self, a: &TypeRef, b: &TypeRef) -> bool {
        match (a, b) {
            (TypeRef::NonNull(a_inner), TypeRef::NonNull(b_inner))
                | (TypeRef::List(a_inner), TypeRef::List(b_inner)) =>
                self.same_type_shape(a_inner, b_inner),
            (TypeRef::Named(a_name), TypeRef::Named(b_name)) => {
                let is_leaf = |name: &str| self.ctx.schema.type_definition(name)
                    .is_some_and(GraphQLType::is_leaf);
                if is_leaf(a_name.as_str()) || is_leaf(b_name.as_str()) {
                    a_name == b_name
                } else {
                    true
                }
            },
            _ => false,
        }
    }

    fn collect_fields(
        &self,
        fields: &mut FieldsByResponseKey<'a>,
        parent_type: &'a GraphQLType,
        selection_set: &'a ast::query::SelectionSet,
        visited_fragments: &mut HashSet<&'a str>,
    ) {
        for selection in &selection_set.items {
            match selection {
                Selection::Field(field) => {
                    let response_key = field.alias.as_deref().unwrap_or(&field.name);
                    fields.entry(response_key).or_default().push(FieldAndDef {
                        def: self.ctx.field_definition(parent_type, &field.name),
                        field,
                        parent_type,
                    });
                },
                Selection::InlineFragment(inline_frag) => {
                    let frag_type = match &inline_frag.type_condition {
                        Some(type_cond) => self.ctx.composite_type(
                            crate::operation::type_condition_name(type_cond),
                        ),
                        None => Some(parent_type),
                    };
                    if let Some(frag_type) = frag_type {
                        self.collect_fields(
                            fields,
                            frag_type,
                            &inline_frag.selection_set,
                            visited_fragments,
                        );
                    }
                },
                Selection::FragmentSpread(spread) => {
                    let Some(&frag_def) = self.ctx.fragments.get(spread.fragment_name.as_str()) else {
                        continue;
                    };
                    if !visited_fragments.insert(frag_def.name.as_str()) {
                        continue;
                    }
                    if let Some(frag_type) = self.ctx.fragment_type(frag_def) {
                        self.collect_fields(
                            fields,
                            frag_type,
                            &frag_def.selection_set,
                            visited_fragments,
                        );
                    }
                },
            }
        }
    }

    fn report(
        &mut self,
        response_key: &str,
        reason: String,
        a: &FieldAndDef<'a>,
        b: &FieldAndDef<'a>,
    ) {
        let mut locations: Vec<DocumentPosition> = vec![
            a.field.position.into(),
            b.field.position.into(),
        ];
        locations.sort_by_key(|pos| (pos.line, pos.column));
        if self.reported.insert((response_key.to_string(), locations.clone())) {
            self.errors.push(ValidationError::FieldsConflict {
                locations,
                reason,
                response_key: response_key.to_string(),
            });
        }
    }
}

fn same_arguments(a: &ast::query::Field, b: &ast::query::Field) -> bool {
    a.arguments.len() == b.arguments.len()
        && a.arguments.iter().all(|(a_name, a_value)| {
            b.arguments.iter().any(|(b_name, b_value)| a_name == b_name && a_value == b_value)
        })
}
