use crate::file_reader;
use crate::loc;
use crate::operation::OperationKind;
use crate::schema::TypeValidationError;
use crate::types::GraphQLTypeKind;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct NamedTypeDefLocation {
    pub def_location: loc::SourceLocation,
    pub type_name: String,
}

#[derive(Debug, Error)]
pub enum SchemaBuildError {
    #[error("Multiple directives were defined with the same name `@{directive_name}`")]
    DuplicateDirectiveDefinition {
        directive_name: String,
        location1: loc::SourceLocation,
        location2: loc::SourceLocation,
    },

    #[error("The `{enum_name}` enum defines the `{enum_value}` value more than once")]
    DuplicateEnumValueDefinition {
        enum_name: String,
        enum_value: String,
        value_def1: loc::SourceLocation,
        value_def2: loc::SourceLocation,
    },

    #[error("The `{type_name}` type has multiple fields named `{field_name}`")]
    DuplicateFieldNameDefinition {
        type_name: String,
        field_name: String,
        field_def1: loc::SourceLocation,
        field_def2: loc::SourceLocation,
    },

    #[error("`{owner_name}` defines `{input_value_name}` more than once")]
    DuplicateInputValueDefinition {
        owner_name: String,
        input_value_name: String,
        def1: loc::SourceLocation,
        def2: loc::SourceLocation,
    },

    #[error("The `{type_name}` type declares it implements `{duplicated_interface_name}` more than once")]
    DuplicateInterfaceImplementsDeclaration {
        def_location: loc::SourceLocation,
        duplicated_interface_name: String,
        type_name: String,
    },

    #[error("Multiple {operation} root operation types were declared")]
    DuplicateOperationDefinition {
        operation: OperationKind,
        location1: NamedTypeDefLocation,
        location2: NamedTypeDefLocation,
    },

    #[error("Multiple GraphQL types with the same name were defined: `{type_name}`")]
    DuplicateTypeDefinition {
        type_name: String,
        def1: loc::SourceLocation,
        def2: loc::SourceLocation,
    },

    #[error("The `{type_name}` union lists `{member_name}` as a member more than once")]
    DuplicateUnionMember {
        location: loc::SourceLocation,
        member_name: String,
        type_name: String,
    },

    #[error("Attempted to extend `{type_name}`, but no type with that name is defined")]
    ExtensionOfUndefinedType {
        type_name: String,
        extension_location: loc::SourceLocation,
    },

    #[error(
        "`{value_name}` can not be used as a value of the `{enum_name}` enum; \
        `true`, `false` and `null` are reserved"
    )]
    InvalidEnumValueName {
        enum_name: String,
        location: loc::SourceLocation,
        value_name: String,
    },

    #[error(
        "Attempted to extend `{type_name}` as a(n) {expected_kind} type, but \
        it is defined as a(n) {actual_kind} type"
    )]
    InvalidExtensionType {
        actual_kind: GraphQLTypeKind,
        expected_kind: GraphQLTypeKind,
        extension_location: loc::SourceLocation,
        type_name: String,
    },

    #[error("Directive names may not begin with `__`: `@{directive_name}`")]
    InvalidDunderPrefixedDirectiveName {
        def_location: loc::SourceLocation,
        directive_name: String,
    },

    #[error("Field names may not begin with `__`: `{type_name}.{field_name}`")]
    InvalidDunderPrefixedFieldName {
        location: loc::SourceLocation,
        field_name: String,
        type_name: String,
    },

    #[error("Parameter and input field names may not begin with `__`: `{owner_name}({input_value_name})`")]
    InvalidDunderPrefixedInputValueName {
        location: loc::SourceLocation,
        input_value_name: String,
        owner_name: String,
    },

    #[error("Type names may not begin with `__`: `{type_name}`")]
    InvalidDunderPrefixedTypeName {
        def_location: loc::SourceLocation,
        type_name: String,
    },

    #[error(
        "The {operation} root operation type must be an object type, but \
        `{type_name}` is not"
    )]
    InvalidOperationType {
        location: loc::SourceLocation,
        operation: OperationKind,
        type_name: String,
    },

    #[error("No query type was defined in the schema, but one is required")]
    NoQueryOperationTypeDefined,

    #[error(
        "The {operation1} and {operation2} root operation types must be \
        different types, but both use `{reused_type_name}`"
    )]
    NonUniqueOperationTypes {
        reused_type_name: String,
        operation1: OperationKind,
        operation1_loc: loc::SourceLocation,
        operation2: OperationKind,
        operation2_loc: loc::SourceLocation,
    },

    #[error("Error parsing schema from {file:?}: {err}")]
    ParseError {
        file: PathBuf,
        err: String,
    },

    #[error("The built-in `@{directive_name}` directive can not be redefined")]
    RedefinitionOfBuiltinDirective {
        directive_name: String,
        location: loc::SourceLocation,
    },

    #[error("Failure while trying to read a schema file from disk: {0}")]
    SchemaFileReadError(Box<file_reader::ReadContentError>),

    #[error(transparent)]
    TypeValidation(#[from] TypeValidationError),

    #[error(
        "The {operation} root operation type was declared as \
        `{type_name}`, but no such type is defined"
    )]
    UndefinedOperationType {
        location: loc::SourceLocation,
        operation: OperationKind,
        type_name: String,
    },
}
