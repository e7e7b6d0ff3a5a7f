use crate::coercion::CoercionError;
use crate::loc::DocumentPosition;
use crate::operation::OperationKind;
use crate::types::DirectiveLocation;
use crate::types::TypeRef;
use thiserror::Error;

fn join_errors(errors: &[CoercionError]) -> String {
    errors.iter()
        .map(|err| err.to_string())
        .collect::<Vec<_>>()
        .join("; ")
}

fn operation_label(operation_name: &Option<String>) -> String {
    match operation_name {
        Some(name) => format!("operation `{name}`"),
        None => "the anonymous operation".to_string(),
    }
}

fn subscription_label(operation_name: &Option<String>) -> String {
    match operation_name {
        Some(name) => format!("Subscription `{name}`"),
        None => "The anonymous subscription".to_string(),
    }
}

/// A rule violation found while validating an executable document against a
/// [`Schema`](crate::schema::Schema).
#[derive(Clone, Debug, Error, PartialEq)]
pub enum ValidationError {
    // https://spec.graphql.org/October2021/#sec-Lone-Anonymous-Operation
    #[error(
        "An anonymous operation must be the only operation defined in its \
        document"
    )]
    AnonymousOperationNotAlone {
        locations: Vec<DocumentPosition>,
    },

    // https://spec.graphql.org/October2021/#sec-Fields-on-Correct-Type
    #[error("Cannot query field `{field_name}` on type `{type_name}`")]
    UndefinedField {
        field_name: String,
        locations: Vec<DocumentPosition>,
        type_name: String,
    },

    #[error("The schema does not define a {operation_kind} root operation type")]
    UndefinedRootOperationType {
        locations: Vec<DocumentPosition>,
        operation_kind: OperationKind,
    },

    // https://spec.graphql.org/October2021/#sec-Argument-Names
    #[error("Unknown argument `{argument_name}` on {owner}")]
    UnknownArgument {
        argument_name: String,
        locations: Vec<DocumentPosition>,
        owner: String,
    },

    // https://spec.graphql.org/October2021/#sec-Argument-Uniqueness
    #[error("The argument `{argument_name}` is provided more than once")]
    DuplicateArgument {
        argument_name: String,
        locations: Vec<DocumentPosition>,
    },

    // https://spec.graphql.org/October2021/#sec-Directives-Are-Unique-Per-Location
    #[error(
        "The `@{directive_name}` directive is not repeatable but is used more \
        than once at this location"
    )]
    DuplicateNonRepeatableDirective {
        directive_name: String,
        locations: Vec<DocumentPosition>,
    },

    // https://spec.graphql.org/October2021/#sec-Fragment-Name-Uniqueness
    #[error("There can be only one fragment named `{fragment_name}`")]
    DuplicateFragmentName {
        fragment_name: String,
        locations: Vec<DocumentPosition>,
    },

    // https://spec.graphql.org/October2021/#sec-Operation-Name-Uniqueness
    #[error("There can be only one operation named `{operation_name}`")]
    DuplicateOperationName {
        locations: Vec<DocumentPosition>,
        operation_name: String,
    },

    // https://spec.graphql.org/October2021/#sec-Variable-Uniqueness
    #[error("There can be only one variable named `${variable_name}`")]
    DuplicateVariable {
        locations: Vec<DocumentPosition>,
        variable_name: String,
    },

    // https://spec.graphql.org/October2021/#sec-Directives-Are-In-Valid-Locations
    #[error("The `@{directive_name}` directive may not be used on {location}")]
    DirectiveNotAllowedAtLocation {
        directive_name: String,
        location: DirectiveLocation,
        locations: Vec<DocumentPosition>,
    },

    // https://spec.graphql.org/October2021/#sec-Field-Selection-Merging
    #[error("Fields `{response_key}` conflict because {reason}")]
    FieldsConflict {
        locations: Vec<DocumentPosition>,
        reason: String,
        response_key: String,
    },

    // https://spec.graphql.org/October2021/#sec-Fragment-spreads-must-not-form-cycles
    #[error("Fragment spreads form a cycle: {}", cycle_path.join(" -> "))]
    FragmentCycle {
        cycle_path: Vec<String>,
        locations: Vec<DocumentPosition>,
    },

    // https://spec.graphql.org/October2021/#sec-Fragment-spread-is-possible
    #[error(
        "A fragment on `{fragment_type}` can never be spread within a \
        selection on `{parent_type}`"
    )]
    ImpossibleFragmentSpread {
        fragment_type: String,
        locations: Vec<DocumentPosition>,
        parent_type: String,
    },

    // https://spec.graphql.org/October2021/#sec-Values-of-Correct-Type
    #[error(
        "Invalid value for argument `{argument_name}` on {owner}: {}",
        join_errors(.errors),
    )]
    InvalidArgumentValue {
        argument_name: String,
        errors: Vec<CoercionError>,
        locations: Vec<DocumentPosition>,
        owner: String,
    },

    #[error(
        "Invalid default value for variable `${variable_name}`: {}",
        join_errors(.errors),
    )]
    InvalidVariableDefault {
        errors: Vec<CoercionError>,
        locations: Vec<DocumentPosition>,
        variable_name: String,
    },

    // https://spec.graphql.org/October2021/#sec-Required-Arguments
    #[error("The required argument `{argument_name}` on {owner} was not provided")]
    MissingRequiredArgument {
        argument_name: String,
        locations: Vec<DocumentPosition>,
        owner: String,
    },

    // https://spec.graphql.org/October2021/#sec-Leaf-Field-Selections
    #[error(
        "The field `{field_name}` of type `{type_ref}` must have a selection \
        of subfields"
    )]
    MissingSubselection {
        field_name: String,
        locations: Vec<DocumentPosition>,
        type_ref: TypeRef,
    },

    // https://spec.graphql.org/October2021/#sec-Fragments-On-Composite-Types
    #[error(
        "Fragments may only be conditioned on object, interface or union \
        types, but `{type_name}` is not one"
    )]
    NonCompositeTypeCondition {
        locations: Vec<DocumentPosition>,
        type_name: String,
    },

    // https://spec.graphql.org/October2021/#sec-Variables-Are-Input-Types
    #[error("Variable `${variable_name}` cannot be of non-input type `{type_ref}`")]
    NonInputVariableType {
        locations: Vec<DocumentPosition>,
        type_ref: TypeRef,
        variable_name: String,
    },

    // https://spec.graphql.org/October2021/#sec-Single-root-field
    #[error(
        "{} must select exactly one root field",
        subscription_label(.operation_name),
    )]
    SubscriptionMultipleRootFields {
        locations: Vec<DocumentPosition>,
        operation_name: Option<String>,
    },

    #[error(
        "{} may not select the introspection field `{field_name}` as its \
        root field",
        subscription_label(.operation_name),
    )]
    SubscriptionIntrospectionRootField {
        field_name: String,
        locations: Vec<DocumentPosition>,
        operation_name: Option<String>,
    },

    // https://spec.graphql.org/October2021/#sec-Directives-Are-Defined
    #[error("Unknown directive `@{directive_name}`")]
    UndefinedDirective {
        directive_name: String,
        locations: Vec<DocumentPosition>,
    },

    // https://spec.graphql.org/October2021/#sec-Fragment-spread-target-defined
    #[error("Unknown fragment `{fragment_name}`")]
    UndefinedFragment {
        fragment_name: String,
        locations: Vec<DocumentPosition>,
    },

    // https://spec.graphql.org/October2021/#sec-All-Variable-Uses-Defined
    #[error(
        "Variable `${variable_name}` is not defined by {}",
        operation_label(.operation_name),
    )]
    UndefinedVariable {
        locations: Vec<DocumentPosition>,
        operation_name: Option<String>,
        variable_name: String,
    },

    #[error("Unknown type `{type_name}` in the declaration of variable `${variable_name}`")]
    UndefinedVariableType {
        locations: Vec<DocumentPosition>,
        type_name: String,
        variable_name: String,
    },

    // https://spec.graphql.org/October2021/#sec-Leaf-Field-Selections
    #[error(
        "The field `{field_name}` must not have a selection since type \
        `{type_ref}` has no subfields"
    )]
    UnexpectedSubselection {
        field_name: String,
        locations: Vec<DocumentPosition>,
        type_ref: TypeRef,
    },

    // https://spec.graphql.org/October2021/#sec-Fragment-Spread-Type-Existence
    #[error("Unknown type `{type_name}` in a fragment type condition")]
    UnknownTypeCondition {
        locations: Vec<DocumentPosition>,
        type_name: String,
    },

    // https://spec.graphql.org/October2021/#sec-Fragments-Must-Be-Used
    #[error("The fragment `{fragment_name}` is never used")]
    UnusedFragment {
        fragment_name: String,
        locations: Vec<DocumentPosition>,
    },

    // https://spec.graphql.org/October2021/#sec-All-Variables-Used
    #[error(
        "Variable `${variable_name}` is never used in {}",
        operation_label(.operation_name),
    )]
    UnusedVariable {
        locations: Vec<DocumentPosition>,
        operation_name: Option<String>,
        variable_name: String,
    },

    // https://spec.graphql.org/October2021/#sec-All-Variable-Usages-are-Allowed
    #[error(
        "Variable `${variable_name}` of type `{variable_type}` is used in a \
        position expecting `{expected_type}`"
    )]
    VariableTypeMismatch {
        expected_type: TypeRef,
        locations: Vec<DocumentPosition>,
        variable_name: String,
        variable_type: TypeRef,
    },
}
impl ValidationError {
    /// Positions within the document that this error concerns.
    pub fn locations(&self) -> &[DocumentPosition] {
        match self {
            Self::AnonymousOperationNotAlone { locations }
                | Self::DirectiveNotAllowedAtLocation { locations, .. }
                | Self::DuplicateArgument { locations, .. }
                | Self::DuplicateFragmentName { locations, .. }
                | Self::DuplicateNonRepeatableDirective { locations, .. }
                | Self::DuplicateOperationName { locations, .. }
                | Self::DuplicateVariable { locations, .. }
                | Self::FieldsConflict { locations, .. }
                | Self::FragmentCycle { locations, .. }
                | Self::ImpossibleFragmentSpread { locations, .. }
                | Self::InvalidArgumentValue { locations, .. }
                | Self::InvalidVariableDefault { locations, .. }
                | Self::MissingRequiredArgument { locations, .. }
                | Self::MissingSubselection { locations, .. }
                | Self::NonCompositeTypeCondition { locations, .. }
                | Self::NonInputVariableType { locations, .. }
                | Self::SubscriptionIntrospectionRootField { locations, .. }
                | Self::SubscriptionMultipleRootFields { locations, .. }
                | Self::UndefinedDirective { locations, .. }
                | Self::UndefinedField { locations, .. }
                | Self::UndefinedFragment { locations, .. }
                | Self::UndefinedRootOperationType { locations, .. }
                | Self::UndefinedVariable { locations, .. }
                | Self::UndefinedVariableType { locations, .. }
                | Self::UnexpectedSubselection { locations, .. }
                | Self::UnknownArgument { locations, .. }
                | Self::UnknownTypeCondition { locations, .. }
                | Self::UnusedFragment { locations, .. }
                | Self::UnusedVariable { locations, .. }
                | Self::VariableTypeMismatch { locations, .. } => locations,
        }
    }
}
