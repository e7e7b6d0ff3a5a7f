use crate::coercion::CoercionError;
use crate::loc::DocumentPosition;
use crate::operation::OperationKind;
use thiserror::Error;

fn operation_label(operation_name: &Option<String>) -> String {
    match operation_name {
        Some(name) => format!("`{name}`"),
        None => "(anonymous)".to_string(),
    }
}

fn unknown_operation_message(operation_name: &Option<String>) -> String {
    match operation_name {
        Some(name) => format!("Unknown operation named `{name}`"),
        None => "An operation name is required when a document contains several operations"
            .to_string(),
    }
}

/// A failure raised while executing an operation.
///
/// Field-level failures null only the offending field; the remaining
/// variants fail the whole request before any field is resolved.
#[derive(Clone, Debug, Error, PartialEq)]
pub enum ExecutionError {
    #[error("Subscription {} selects no root field", operation_label(.operation_name))]
    EmptySubscription {
        operation_name: Option<String>,
    },

    #[error(
        "The `{concrete_type}` type returned for `{abstract_type}` is not one of its \
        possible types"
    )]
    ImpossibleConcreteType {
        abstract_type: String,
        concrete_type: String,
        locations: Vec<DocumentPosition>,
    },

    #[error("Invalid argument for field `{type_name}.{field_name}`: {error}")]
    InvalidArgument {
        error: CoercionError,
        field_name: String,
        locations: Vec<DocumentPosition>,
        type_name: String,
    },

    #[error(transparent)]
    InvalidVariable(#[from] CoercionError),

    // https://spec.graphql.org/October2021/#sec-Value-Completion
    #[error("Field `{type_name}.{field_name}` returned an invalid value: {error}")]
    InvalidLeafValue {
        error: CoercionError,
        field_name: String,
        locations: Vec<DocumentPosition>,
        type_name: String,
    },

    #[error(
        "Expected a list for field `{type_name}.{field_name}`, but the resolver \
        returned {found}"
    )]
    ListExpected {
        field_name: String,
        found: String,
        locations: Vec<DocumentPosition>,
        type_name: String,
    },

    #[error("No resolver is registered for field `{type_name}.{field_name}`")]
    MissingResolver {
        field_name: String,
        locations: Vec<DocumentPosition>,
        type_name: String,
    },

    #[error("The schema defines no root type for {operation_kind} operations")]
    MissingRootType {
        operation_kind: OperationKind,
    },

    #[error("No stream resolver is registered for subscription field `{field_name}`")]
    MissingStreamResolver {
        field_name: String,
        locations: Vec<DocumentPosition>,
    },

    #[error("The `if` argument of `@{directive_name}` did not resolve to a Boolean")]
    NonBooleanCondition {
        directive_name: String,
        locations: Vec<DocumentPosition>,
    },

    // https://spec.graphql.org/October2021/#sec-Handling-Field-Errors
    #[error("Cannot return null for non-nullable field `{type_name}.{field_name}`")]
    NullForNonNullField {
        field_name: String,
        locations: Vec<DocumentPosition>,
        type_name: String,
    },

    #[error("The document could not be parsed: {message}")]
    ParseFailed {
        message: String,
    },

    #[error("{message}")]
    ResolverFailed {
        locations: Vec<DocumentPosition>,
        message: String,
    },

    #[error(
        "Operation {} is a {operation_kind}, not a subscription",
        operation_label(.operation_name),
    )]
    NotASubscription {
        operation_kind: OperationKind,
        operation_name: Option<String>,
    },

    #[error("Could not resolve the concrete object type for abstract type `{abstract_type}`")]
    UnresolvedAbstractType {
        abstract_type: String,
        locations: Vec<DocumentPosition>,
    },

    // https://spec.graphql.org/October2021/#GetOperation()
    #[error("{}", unknown_operation_message(.operation_name))]
    UnknownOperation {
        operation_name: Option<String>,
    },
}
impl ExecutionError {
    pub fn locations(&self) -> &[DocumentPosition] {
        match self {
            Self::ImpossibleConcreteType { locations, .. }
                | Self::InvalidArgument { locations, .. }
                | Self::InvalidLeafValue { locations, .. }
                | Self::ListExpected { locations, .. }
                | Self::MissingResolver { locations, .. }
                | Self::MissingStreamResolver { locations, .. }
                | Self::NonBooleanCondition { locations, .. }
                | Self::NullForNonNullField { locations, .. }
                | Self::ResolverFailed { locations, .. }
                | Self::UnresolvedAbstractType { locations, .. } => locations,
            Self::EmptySubscription { .. }
                | Self::InvalidVariable(_)
                | Self::MissingRootType { .. }
                | Self::NotASubscription { .. }
                | Self::ParseFailed { .. }
                | Self::UnknownOperation { .. } => &[],
        }
    }
}
