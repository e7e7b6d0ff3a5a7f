use crate::ast;
use crate::loc::DocumentPosition;
use crate::operation;
use crate::types::GraphQLType;
use crate::validation::ValidationError;
use crate::validation::validation_context::ValidationContext;
use graphql_parser::query::Selection;
use indexmap::IndexMap;
use std::collections::HashSet;

/// Checks fragment definitions and every place they are spread.
///
/// https://spec.graphql.org/October2021/#sec-Validation.Fragments
pub(super) struct FragmentValidator<'a, 'ctx> {
    ctx: &'ctx ValidationContext<'a>,
    errors: Vec<ValidationError>,
}
impl<'a, 'ctx> FragmentValidator<'a, 'ctx> {
    pub fn new(ctx: &'ctx ValidationContext<'a>) -> Self {
        Self {
            ctx,
            errors: vec![],
        }
    }

    pub fn validate(mut self) -> Vec<ValidationError> {
        self.validate_unique_names();
        self.validate_type_conditions();
        self.validate_spread_targets();
        self.validate_possible_spreads();
        self.validate_no_cycles();
        self.validate_all_used();
        self.errors
    }

    fn validate_unique_names(&mut self) {
        let mut positions_by_name = IndexMap::<&str, Vec<DocumentPosition>>::new();
        for frag_def in operation::fragment_definitions(self.ctx.document) {
            positions_by_name.entry(frag_def.name.as_str())
                .or_default()
                .push(frag_def.position.into());
        }
        for (fragment_name, positions) in positions_by_name {
            if positions.len() > 1 {
                self.errors.push(ValidationError::DuplicateFragmentName {
                    fragment_name: fragment_name.to_string(),
                    locations: positions,
                });
            }
        }
    }

    fn validate_type_condition(&mut self, type_name: &str, position: ast::Pos) {
        match self.ctx.schema.type_definition(type_name) {
            Some(type_) if type_.is_composite() => (),
            Some(_) => self.errors.push(ValidationError::NonCompositeTypeCondition {
                locations: vec![position.into()],
                type_name: type_name.to_string(),
            }),
            None => self.errors.push(ValidationError::UnknownTypeCondition {
                locations: vec![position.into()],
                type_name: type_name.to_string(),
            }),
        }
    }

    fn validate_type_conditions(&mut self) {
        for frag_def in operation::fragment_definitions(self.ctx.document) {
            let type_name = operation::type_condition_name(&frag_def.type_condition);
            self.validate_type_condition(type_name, frag_def.position);
            self.validate_inline_type_conditions(&frag_def.selection_set);
        }
        let ctx = self.ctx;
        for op in &ctx.operations {
            self.validate_inline_type_conditions(op.selection_set);
        }
    }

    fn validate_inline_type_conditions(&mut self, selection_set: &ast::query::SelectionSet) {
        for selection in &selection_set.items {
            match selection {
                Selection::Field(field) =>
                    self.validate_inline_type_conditions(&field.selection_set),
                Selection::InlineFragment(inline_frag) => {
                    if let Some(type_cond) = &inline_frag.type_condition {
                        let type_name = operation::type_condition_name(type_cond);
                        self.validate_type_condition(type_name, inline_frag.position);
                    }
                    self.validate_inline_type_conditions(&inline_frag.selection_set);
                },
                Selection::FragmentSpread(_) => (),
            }
        }
    }

    fn validate_spread_targets(&mut self) {
        let ctx = self.ctx;
        for op in &ctx.operations {
            self.validate_spread_targets_in(op.selection_set);
        }
        for frag_def in operation::fragment_definitions(ctx.document) {
            self.validate_spread_targets_in(&frag_def.selection_set);
        }
    }

    fn validate_spread_targets_in(&mut self, selection_set: &ast::query::SelectionSet) {
        for selection in &selection_set.items {
            match selection {
                Selection::Field(field) =>
                    self.validate_spread_targets_in(&field.selection_set),
                Selection::InlineFragment(inline_frag) =>
                    self.validate_spread_targets_in(&inline_frag.selection_set),
                Selection::FragmentSpread(spread) => {
                    if !self.ctx.fragments.contains_key(spread.fragment_name.as_str()) {
                        self.errors.push(ValidationError::UndefinedFragment {
                            fragment_name: spread.fragment_name.to_string(),
                            locations: vec![spread.position.into()],
                        });
                    }
                },
            }
        }
    }

    // https://spec.graphql.org/October2021/#sec-Fragment-spread-is-possible
    fn validate_possible_spreads(&mut self) {
        let ctx = self.ctx;
        let errors = &mut self.errors;
        ctx.visit_selection_sets(&mut |parent_type, selection_set| {
            for selection in &selection_set.items {
                let (frag_type, position) = match selection {
                    Selection::Field(_) => continue,
                    Selection::InlineFragment(inline_frag) => {
                        let Some(type_cond) = &inline_frag.type_condition else {
                            continue;
                        };
                        let frag_type =
                            ctx.composite_type(operation::type_condition_name(type_cond));
                        (frag_type, inline_frag.position)
                    },
                    Selection::FragmentSpread(spread) => {
                        let frag_type = ctx.fragments.get(spread.fragment_name.as_str())
                            .and_then(|frag_def| ctx.fragment_type(frag_def));
                        (frag_type, spread.position)
                    },
                };
                let Some(frag_type) = frag_type else {
                    continue;
                };
                if !types_intersect(ctx, parent_type, frag_type) {
                    errors.push(ValidationError::ImpossibleFragmentSpread {
                        fragment_type: frag_type.name().to_string(),
                        locations: vec![position.into()],
                        parent_type: parent_type.name().to_string(),
                    });
                }
            }
        });
    }

    /// Uses a DFS over fragment spreads, carrying the path of fragments on
    /// the current branch. Rotations of the same cycle are reported once.
    fn validate_no_cycles(&mut self) {
        let mut seen_normalized_cycles = HashSet::new();
        let ctx = self.ctx;
        for &frag_name in ctx.fragments.keys() {
            let mut path = vec![];
            self.check_fragment_cycles(frag_name, &mut path, &mut seen_normalized_cycles);
        }
    }

    fn check_fragment_cycles(
        &mut self,
        frag_name: &'a str,
        path: &mut Vec<&'a str>,
        seen_normalized: &mut HashSet<Vec<String>>,
    ) {
        if let Some(cycle_start) = path.iter().position(|name| *name == frag_name) {
            let mut cycle_path: Vec<String> = path[cycle_start..].iter()
                .map(|name| name.to_string())
                .collect();
            cycle_path.push(frag_name.to_string());

            let normalized = normalize_cycle(&cycle_path);
            if seen_normalized.insert(normalized) {
                let locations = self.ctx.fragments.get(frag_name)
                    .map(|frag_def| vec![frag_def.position.into()])
                    .unwrap_or_default();
                self.errors.push(ValidationError::FragmentCycle {
                    cycle_path,
                    locations,
                });
            }
            return;
        }

        // Undefined fragments are reported by `validate_spread_targets()`.
        let Some(&frag_def) = self.ctx.fragments.get(frag_name) else {
            return;
        };

        path.push(frag_name);
        let mut spreads = vec![];
        collect_spreads(&frag_def.selection_set, &mut spreads);
        for spread_name in spreads {
            self.check_fragment_cycles(spread_name, path, seen_normalized);
        }
        path.pop();
    }

    fn validate_all_used(&mut self) {
        let mut used = HashSet::new();
        for op in &self.ctx.operations {
            used.extend(self.ctx.reachable_fragments(op.selection_set));
        }
        for frag_def in operation::fragment_definitions(self.ctx.document) {
            if !used.contains(frag_def.name.as_str()) {
                self.errors.push(ValidationError::UnusedFragment {
                    fragment_name: frag_def.name.to_string(),
                    locations: vec![frag_def.position.into()],
                });
            }
        }
    }
}

/// Lists the fragment names spread directly (not transitively) within a
/// selection set, in document order.
fn collect_spreads<'a>(selection_set: &'a ast::query::SelectionSet, spreads: &mut Vec<&'a str>) {
    for selection in &selection_set.items {
        match selection {
            Selection::Field(field) => collect_spreads(&field.selection_set, spreads),
            Selection::InlineFragment(inline_frag) =>
                collect_spreads(&inline_frag.selection_set, spreads),
            Selection::FragmentSpread(spread) => spreads.push(spread.fragment_name.as_str()),
        }
    }
}

/// Rotates a cycle (e.g. `[B, C, A, B]`) to begin at its lexicographically
/// smallest member (`[A, B, C, A]`) so that rotations compare equal.
fn normalize_cycle(cycle: &[String]) -> Vec<String> {
    let Some((_, cycle_without_repeat)) = cycle.split_last() else {
        return vec![];
    };
    let min_idx = cycle_without_repeat.iter()
        .enumerate()
        .min_by(|(_, a), (_, b)| a.cmp(b))
        .map(|(idx, _)| idx)
        .unwrap_or(0);

    let mut normalized = Vec::with_capacity(cycle.len());
    normalized.extend_from_slice(&cycle_without_repeat[min_idx..]);
    normalized.extend_from_slice(&cycle_without_repeat[..min_idx]);
    if let Some(first) = normalized.first().cloned() {
        normalized.push(first);
    }
    normalized
}

fn types_intersect(
    ctx: &ValidationContext<'_>,
    parent_type: &GraphQLType,
    frag_type: &GraphQLType,
) -> bool {
    let parent_possible: HashSet<&str> = ctx.schema.possible_types(parent_type.name())
        .into_iter()
        .map(|obj_type| obj_type.name())
        .collect();
    ctx.schema.possible_types(frag_type.name())
        .into_iter()
        .any(|obj_type| parent_possible.contains(obj_type.name()))
}
