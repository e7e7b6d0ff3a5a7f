use thiserror::Error;

/// A resolver or coercer that could not be registered against a schema.
#[derive(Clone, Debug, Error, PartialEq)]
pub enum RegistrationError {
    #[error("A scalar coercer is already registered for `{scalar_name}`")]
    DuplicateScalarCoercer {
        scalar_name: String,
    },

    #[error("A resolver is already registered for field `{type_name}.{field_name}`")]
    DuplicateFieldResolver {
        field_name: String,
        type_name: String,
    },

    #[error("A stream resolver is already registered for subscription field `{field_name}`")]
    DuplicateStreamResolver {
        field_name: String,
    },

    #[error("Field `{type_name}.{field_name}` is answered by the engine and can not be resolved")]
    IntrospectionField {
        field_name: String,
        type_name: String,
    },

    #[error("`{scalar_name}` is not a custom scalar type")]
    NotACustomScalar {
        scalar_name: String,
    },

    #[error("`{type_name}` is not an object type")]
    NotAnObjectType {
        type_name: String,
    },

    #[error("The schema defines no subscription root type")]
    NoSubscriptionType,

    #[error("The `{type_name}` type has no field named `{field_name}`")]
    UndefinedField {
        field_name: String,
        type_name: String,
    },

    #[error("Reference to an undefined type `{type_name}`")]
    UndefinedType {
        type_name: String,
    },
}
