use crate::ast;
use crate::operation;
use crate::operation::OperationInfo;
use crate::schema::Schema;
use crate::types::DirectiveLocation;
use crate::types::Field;
use crate::types::GraphQLType;
use graphql_parser::query::Selection;
use indexmap::IndexMap;
use std::collections::HashSet;

/// Indexes over one executable document that every validation pass shares.
pub(super) struct ValidationContext<'a> {
    pub document: &'a ast::query::Document,
    /// Fragment definitions by name. When a name is defined more than once,
    /// the first definition wins (duplicates are reported separately).
    pub fragments: IndexMap<&'a str, &'a ast::query::FragmentDefinition>,
    pub operations: Vec<OperationInfo<'a>>,
    pub schema: &'a Schema,
}
impl<'a> ValidationContext<'a> {
    pub fn new(schema: &'a Schema, document: &'a ast::query::Document) -> Self {
        let mut fragments = IndexMap::new();
        for frag_def in operation::fragment_definitions(document) {
            fragments.entry(frag_def.name.as_str()).or_insert(frag_def);
        }
        Self {
            document,
            fragments,
            operations: OperationInfo::all_in(document),
            schema,
        }
    }

    /// Looks up a type that a selection set can be written against.
    pub fn composite_type(&self, type_name: &str) -> Option<&'a GraphQLType> {
        self.schema.type_definition(type_name)
            .filter(|type_| type_.is_composite())
    }

    pub fn field_definition(
        &self,
        parent_type: &GraphQLType,
        field_name: &str,
    ) -> Option<&'a Field> {
        self.schema.field_definition(parent_type.name(), field_name)
    }

    /// The composite type a field's sub-selection selects from, if any.
    pub fn field_selection_type(&self, field_def: &Field) -> Option<&'a GraphQLType> {
        self.composite_type(field_def.type_ref().innermost_name())
    }

    pub fn fragment_type(
        &self,
        frag_def: &ast::query::FragmentDefinition,
    ) -> Option<&'a GraphQLType> {
        self.composite_type(operation::type_condition_name(&frag_def.type_condition))
    }

    /// The root type an operation selects from.
    pub fn root_type(&self, op: &OperationInfo<'_>) -> Option<&'a GraphQLType> {
        let root_type_name = self.schema.root_operation_type(op.kind)?.name();
        self.schema.type_definition(root_type_name)
    }

    /// Names every fragment reachable from `selection_set` through spreads
    /// (transitively), in discovery order.
    pub fn reachable_fragments(
        &self,
        selection_set: &'a ast::query::SelectionSet,
    ) -> Vec<&'a str> {
        let mut visited = HashSet::new();
        let mut found = vec![];
        self.collect_reachable_fragments(selection_set, &mut visited, &mut found);
        found
    }

    fn collect_reachable_fragments(
        &self,
        selection_set: &'a ast::query::SelectionSet,
        visited: &mut HashSet<&'a str>,
        found: &mut Vec<&'a str>,
    ) {
        for selection in &selection_set.items {
            match selection {
                Selection::Field(field) =>
                    self.collect_reachable_fragments(&field.selection_set, visited, found),
                Selection::InlineFragment(inline_frag) =>
                    self.collect_reachable_fragments(&inline_frag.selection_set, visited, found),
                Selection::FragmentSpread(spread) => {
                    let Some((&frag_name, &frag_def)) =
                        self.fragments.get_key_value(spread.fragment_name.as_str()) else {
                        continue;
                    };
                    if visited.insert(frag_name) {
                        found.push(frag_name);
                        self.collect_reachable_fragments(&frag_def.selection_set, visited, found);
                    }
                },
            }
        }
    }

    /// Visits every selection set in the document (operations, fragment
    /// definitions and everything nested within them) together with the
    /// composite type it selects from. Fragment spreads are not followed.
    ///
    /// Selection sets whose parent type can not be determined (an unknown
    /// field or type condition, a missing root type) are skipped; other
    /// passes report those problems.
    pub fn visit_selection_sets(
        &self,
        visit: &mut dyn FnMut(&'a GraphQLType, &'a ast::query::SelectionSet),
    ) {
        for op in &self.operations {
            if let Some(root_type) = self.root_type(op) {
                self.visit_selection_set(root_type, op.selection_set, visit);
            }
        }
        for frag_def in operation::fragment_definitions(self.document) {
            if let Some(frag_type) = self.fragment_type(frag_def) {
                self.visit_selection_set(frag_type, &frag_def.selection_set, visit);
            }
        }
    }

    fn visit_selection_set(
        &self,
        parent_type: &'a GraphQLType,
        selection_set: &'a ast::query::SelectionSet,
        visit: &mut dyn FnMut(&'a GraphQLType, &'a ast::query::SelectionSet),
    ) {
        visit(parent_type, selection_set);
        for selection in &selection_set.items {
            match selection {
                Selection::Field(field) => {
                    let field_type = self.field_definition(parent_type, &field.name)
                        .and_then(|field_def| self.field_selection_type(field_def));
                    if let Some(field_type) = field_type
                        && !field.selection_set.items.is_empty() {
                        self.visit_selection_set(field_type, &field.selection_set, visit);
                    }
                },
                Selection::InlineFragment(inline_frag) => {
                    let frag_type = match &inline_frag.type_condition {
                        Some(type_cond) =>
                            self.composite_type(operation::type_condition_name(type_cond)),
                        None => Some(parent_type),
                    };
                    if let Some(frag_type) = frag_type {
                        self.visit_selection_set(frag_type, &inline_frag.selection_set, visit);
                    }
                },
                Selection::FragmentSpread(_) => (),
            }
        }
    }

    /// Visits every list of directives in the document along with the
    /// location it is written at.
    pub fn visit_directives(
        &self,
        visit: &mut dyn FnMut(&'a [ast::query::Directive], DirectiveLocation),
    ) {
        for op in &self.operations {
            let location = match op.kind {
                operation::OperationKind::Mutation => DirectiveLocation::Mutation,
                operation::OperationKind::Query => DirectiveLocation::Query,
                operation::OperationKind::Subscription => DirectiveLocation::Subscription,
            };
            visit(op.directives, location);
            Self::visit_selection_set_directives(op.selection_set, visit);
        }
        for frag_def in operation::fragment_definitions(self.document) {
            visit(frag_def.directives.as_slice(), DirectiveLocation::FragmentDefinition);
            Self::visit_selection_set_directives(&frag_def.selection_set, visit);
        }
    }

    fn visit_selection_set_directives(
        selection_set: &'a ast::query::SelectionSet,
        visit: &mut dyn FnMut(&'a [ast::query::Directive], DirectiveLocation),
    ) {
        for selection in &selection_set.items {
            match selection {
                Selection::Field(field) => {
                    visit(field.directives.as_slice(), DirectiveLocation::Field);
                    Self::visit_selection_set_directives(&field.selection_set, visit);
                },
                Selection::FragmentSpread(spread) =>
                    visit(spread.directives.as_slice(), DirectiveLocation::FragmentSpread),
                Selection::InlineFragment(inline_frag) => {
                    visit(inline_frag.directives.as_slice(), DirectiveLocation::InlineFragment);
                    Self::visit_selection_set_directives(&inline_frag.selection_set, visit);
                },
            }
        }
    }
}
