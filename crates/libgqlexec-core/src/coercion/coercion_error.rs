use crate::types::TypeRef;
use thiserror::Error;

/// Renders an input path (e.g. `$input.items[2].name`) for error messages.
fn at_path(path: &str) -> String {
    if path.is_empty() {
        String::new()
    } else {
        format!(" at `{path}`")
    }
}

/// A failure to coerce a literal or runtime value to an input type.
#[derive(Clone, Debug, Error, PartialEq)]
pub enum CoercionError {
    #[error(
        "The `{scalar_name}` scalar rejected the value {value}{}",
        at_path(.path),
    )]
    CustomScalarRejected {
        path: String,
        scalar_name: String,
        value: String,
    },

    #[error(
        "Int cannot represent the non 32-bit signed integer value {value}{}",
        at_path(.path),
    )]
    IntOutOfRange {
        path: String,
        value: String,
    },

    #[error(
        "Expected a value of type `{expected_type}`{}, but found {found}",
        at_path(.path),
    )]
    InvalidValue {
        expected_type: String,
        found: String,
        path: String,
    },

    #[error(
        "The `{field_name}` field of `{type_name}` is required but was not \
        provided{}",
        at_path(.path),
    )]
    MissingRequiredInputField {
        field_name: String,
        path: String,
        type_name: String,
    },

    #[error(
        "Variable `${variable_name}` of required type `{variable_type}` was \
        not provided"
    )]
    MissingRequiredVariable {
        variable_name: String,
        variable_type: TypeRef,
    },

    #[error("`{type_name}` is not an input type")]
    NotAnInputType {
        type_name: String,
    },

    #[error(
        "Expected a non-null value of type `{expected_type}`{}, but found null",
        at_path(.path),
    )]
    NullForNonNullType {
        expected_type: String,
        path: String,
    },

    #[error("Reference to an undefined type `{type_name}`")]
    UndefinedType {
        type_name: String,
    },

    #[error("Variable `${variable_name}` is not defined")]
    UndefinedVariable {
        variable_name: String,
    },

    #[error(
        "Value `{value}` does not exist in the `{enum_name}` enum{}",
        at_path(.path),
    )]
    UnknownEnumValue {
        enum_name: String,
        path: String,
        value: String,
    },

    #[error(
        "The `{type_name}` input type has no field named `{field_name}`{}",
        at_path(.path),
    )]
    UnknownInputField {
        field_name: String,
        path: String,
        type_name: String,
    },

    #[error(
        "Variable `${variable_name}` of type `{variable_type}` can not be used \
        in a position expecting `{expected_type}`"
    )]
    VariableTypeMismatch {
        expected_type: TypeRef,
        variable_name: String,
        variable_type: TypeRef,
    },
}

/// Tracks the position within a nested input value while it is coerced.
#[derive(Clone, Debug, Default)]
pub(crate) struct InputPath(Vec<String>);
impl InputPath {
    pub fn root(name: impl Into<String>) -> Self {
        Self(vec![name.into()])
    }

    pub fn push_field(&mut self, field_name: &str) {
        if self.0.is_empty() {
            self.0.push(field_name.to_string());
        } else {
            self.0.push(format!(".{field_name}"));
        }
    }

    pub fn push_index(&mut self, index: usize) {
        self.0.push(format!("[{index}]"));
    }

    pub fn pop(&mut self) {
        self.0.pop();
    }

    pub fn render(&self) -> String {
        self.0.concat()
    }
}
