use crate::loc;
use crate::types::DirectiveLocation;
use crate::types::GraphQLTypeKind;
use crate::types::TypeRef;
use thiserror::Error;

/// A problem found while validating type-system definitions against each
/// other, once every definition is known.
#[derive(Clone, Debug, Error, PartialEq)]
pub enum TypeValidationError {
    #[error(
        "Input object fields may declare their types as a reference to an \
        input object type only if it does not create a circular chain of types \
        that cannot be broken with at least one nullable field. Unbroken \
        input-object cycle found: {}",
        circular_field_path.join(" -> "),
    )]
    CircularInputFieldChain {
        circular_field_path: Vec<String>,
    },

    #[error(
        "The `@{directive_name}` directive references itself through the \
        directives applied to its parameters: {}",
        directive_path.join(" -> "),
    )]
    CircularDirectiveReference {
        directive_name: String,
        directive_path: Vec<String>,
        location: loc::SourceLocation,
    },

    #[error(
        "The `@{directive_name}` directive is not repeatable but is applied \
        more than once at {location}"
    )]
    DuplicateNonRepeatableDirective {
        directive_name: String,
        location: loc::SourceLocation,
    },

    #[error(
        "The `@{directive_name}` directive can not be applied at {location} \
        ({directive_location} is not one of its declared locations)"
    )]
    DirectiveNotAllowedAtLocation {
        directive_location: DirectiveLocation,
        directive_name: String,
        location: loc::SourceLocation,
    },

    #[error("Attempted to implement `{non_interface_type_name}`, which is not an interface, on `{type_name}`")]
    ImplementsNonInterfaceType {
        type_name: String,
        non_interface_type_name: String,
        loc: loc::SourceLocation,
    },

    #[error("Attempted to implement `{undefined_interface_name}` on `{type_name}`, but no such interface is defined")]
    ImplementsUndefinedInterface {
        type_name: String,
        undefined_interface_name: String,
        loc: loc::SourceLocation,
    },

    #[error(
        "Invalid default value for `{owner_name}` at {location}: {reason}"
    )]
    InvalidDefaultValue {
        location: loc::SourceLocation,
        owner_name: String,
        reason: String,
    },

    #[error(
        "Invalid argument value for `{argument_name}` on `@{directive_name}` \
        at {location}: {reason}"
    )]
    InvalidDirectiveArgumentValue {
        argument_name: String,
        directive_name: String,
        location: loc::SourceLocation,
        reason: String,
    },

    #[error(
        "Input fields can not be declared with a non-input object type: The \
        `{parent_type_name}.{field_name}` field is an input field, but the \
        `{invalid_type_name}` type is a non-input type."
    )]
    InvalidInputFieldWithOutputType {
        def_location: loc::SourceLocation,
        field_name: String,
        invalid_type_name: String,
        parent_type_name: String,
    },

    #[error(
        "Invalid parameter type: The `{type_name}.{field_name}` field \
        defines the `{parameter_name}` parameter with a type of \
        `{invalid_parameter_type}`, but `{interface_name}.{field_name}` \
        defines this parameter with type `{expected_parameter_type}`"
    )]
    InvalidInterfaceSpecifiedFieldParameterType {
        def_location: loc::SourceLocation,
        expected_parameter_type: TypeRef,
        field_name: String,
        interface_name: String,
        invalid_parameter_type: TypeRef,
        parameter_name: String,
        type_name: String,
    },

    #[error(
        "Invalid field type: The `{type_name}.{field_name}` field is declared \
        as `{invalid_field_type}`, which is not a valid subtype of \
        `{expected_field_type}` as declared on `{interface_name}.{field_name}`"
    )]
    InvalidInterfaceSpecifiedFieldType {
        location: loc::SourceLocation,
        expected_field_type: TypeRef,
        field_name: String,
        interface_name: String,
        invalid_field_type: TypeRef,
        type_name: String,
    },

    #[error(
        "Output fields can not be declared with an input type: The \
        `{parent_type_name}.{field_name}` field is an output field, but the \
        `{input_type_name}` type is an input-type"
    )]
    InvalidOutputFieldWithInputType {
        def_location: loc::SourceLocation,
        field_name: String,
        input_type_name: String,
        parent_type_name: String,
    },

    #[error(
        "Parameters can only be declared with input-compatible types: The \
        `{parameter_name}` parameter was declared with the \
        `{outputonly_type_name}` type, which is not an input-compatible type."
    )]
    InvalidParameterWithOutputOnlyType {
        def_location: loc::SourceLocation,
        parameter_name: String,
        outputonly_type_name: String,
    },

    #[error(
        "The `{type_name}.{field_name}` field declares a required parameter \
        `{parameter_name}` that is not declared on \
        `{interface_name}.{field_name}`. Additional parameters on an \
        interface implementation must be optional."
    )]
    InvalidRequiredAdditionalParameterOnInterfaceSpecifiedField {
        location: loc::SourceLocation,
        field_name: String,
        interface_name: String,
        parameter_name: String,
        type_name: String,
    },

    #[error(
        "Union members must be object types, but `{union_type_name}` lists \
        `{invalid_member_type_name}`, which is a(n) {invalid_member_type_kind} type"
    )]
    InvalidUnionMemberTypeKind {
        location: loc::SourceLocation,
        union_type_name: String,
        invalid_member_type_kind: GraphQLTypeKind,
        invalid_member_type_name: String,
    },

    #[error(
        "`{type_name}` implements `{interface_name}` but does not define its \
        `{field_name}` field"
    )]
    MissingInterfaceSpecifiedField {
        def_location: loc::SourceLocation,
        field_name: String,
        interface_name: String,
        type_name: String,
    },

    #[error(
        "`{type_name}.{field_name}` is missing the `{missing_parameter_name}` \
        parameter declared on `{interface_name}.{field_name}`"
    )]
    MissingInterfaceSpecifiedFieldParameter {
        def_location: loc::SourceLocation,
        field_name: String,
        interface_name: String,
        missing_parameter_name: String,
        type_name: String,
    },

    #[error(
        "`{type_name}` must also declare that it implements \
        `{missing_recursive_interface_name}`, which is implemented by an \
        interface it implements"
    )]
    MissingRecursiveInterfaceImplementation {
        def_location: loc::SourceLocation,
        inheritance_path: Vec<String>,
        missing_recursive_interface_name: String,
        type_name: String,
    },

    #[error(
        "The `{argument_name}` argument is required by `@{directive_name}` \
        but was not provided at {location}"
    )]
    MissingRequiredDirectiveArgument {
        argument_name: String,
        directive_name: String,
        location: loc::SourceLocation,
    },

    #[error("The `{type_name}` interface can not implement itself")]
    SelfImplementingInterface {
        loc: loc::SourceLocation,
        type_name: String,
    },

    #[error("Reference to an undefined directive `@{directive_name}` at {location}")]
    UndefinedDirective {
        directive_name: String,
        location: loc::SourceLocation,
    },

    #[error("Reference to an undefined type `{undefined_type_name}` at {ref_location}")]
    UndefinedTypeName {
        ref_location: loc::SourceLocation,
        undefined_type_name: String,
    },

    #[error(
        "The `@{directive_name}` directive has no `{argument_name}` parameter \
        (at {location})"
    )]
    UnknownDirectiveArgument {
        argument_name: String,
        directive_name: String,
        location: loc::SourceLocation,
    },
}
