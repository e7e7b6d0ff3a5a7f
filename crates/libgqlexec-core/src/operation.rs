use crate::ast;

/// https://spec.graphql.org/October2021/#OperationType
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum OperationKind {
    Mutation,
    Query,
    Subscription,
}
impl std::fmt::Display for OperationKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Self::Mutation => "mutation",
            Self::Query => "query",
            Self::Subscription => "subscription",
        })
    }
}

/// A uniform, borrowed view over the four syntactic forms of
/// [`OperationDefinition`](ast::query::OperationDefinition) (the anonymous
/// `{ ... }` shorthand plus the three keyword forms).
#[derive(Clone, Copy, Debug)]
pub struct OperationInfo<'a> {
    pub directives: &'a [ast::query::Directive],
    pub kind: OperationKind,
    pub name: Option<&'a str>,
    pub position: ast::Pos,
    pub selection_set: &'a ast::query::SelectionSet,
    pub variable_definitions: &'a [ast::query::VariableDefinition],
}
impl<'a> OperationInfo<'a> {
    pub fn from_ast(def: &'a ast::query::OperationDefinition) -> Self {
        use graphql_parser::query::OperationDefinition;
        match def {
            OperationDefinition::SelectionSet(selection_set) => Self {
                directives: &[],
                kind: OperationKind::Query,
                name: None,
                position: selection_set.span.0,
                selection_set,
                variable_definitions: &[],
            },
            OperationDefinition::Query(query) => Self {
                directives: &query.directives,
                kind: OperationKind::Query,
                name: query.name.as_deref(),
                position: query.position,
                selection_set: &query.selection_set,
                variable_definitions: &query.variable_definitions,
            },
            OperationDefinition::Mutation(mutation) => Self {
                directives: &mutation.directives,
                kind: OperationKind::Mutation,
                name: mutation.name.as_deref(),
                position: mutation.position,
                selection_set: &mutation.selection_set,
                variable_definitions: &mutation.variable_definitions,
            },
            OperationDefinition::Subscription(subscription) => Self {
                directives: &subscription.directives,
                kind: OperationKind::Subscription,
                name: subscription.name.as_deref(),
                position: subscription.position,
                selection_set: &subscription.selection_set,
                variable_definitions: &subscription.variable_definitions,
            },
        }
    }

    /// Lists every operation in `document`, in document order.
    pub fn all_in(document: &'a ast::query::Document) -> Vec<Self> {
        use graphql_parser::query::Definition;
        document.definitions.iter().filter_map(|def| match def {
            Definition::Operation(op) => Some(Self::from_ast(op)),
            Definition::Fragment(_) => None,
        }).collect()
    }
}

/// Lists every fragment definition in `document`, in document order.
pub fn fragment_definitions(
    document: &ast::query::Document,
) -> Vec<&ast::query::FragmentDefinition> {
    use graphql_parser::query::Definition;
    document.definitions.iter().filter_map(|def| match def {
        Definition::Fragment(frag) => Some(frag),
        Definition::Operation(_) => None,
    }).collect()
}

/// The type name in a fragment's `on Type` condition.
pub fn type_condition_name(type_condition: &ast::query::TypeCondition) -> &str {
    let graphql_parser::query::TypeCondition::On(type_name) = type_condition;
    type_name.as_str()
}
