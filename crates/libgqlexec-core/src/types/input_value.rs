use crate::ast;
use crate::loc;
use crate::types::DeprecationState;
use crate::types::DirectiveAnnotation;
use crate::types::TypeRef;

/// The definition of a field parameter, directive parameter, or input-object
/// field.
#[derive(Clone, Debug, PartialEq)]
pub struct InputValue {
    pub(crate) def_location: loc::SourceLocation,
    pub(crate) default_value: Option<ast::query::Value>,
    pub(crate) description: Option<String>,
    pub(crate) directives: Vec<DirectiveAnnotation>,
    pub(crate) name: String,
    pub(crate) type_ref: TypeRef,
}
impl InputValue {
    pub fn def_location(&self) -> &loc::SourceLocation {
        &self.def_location
    }

    /// The default value literal, as written in the schema document.
    pub fn default_value(&self) -> Option<&ast::query::Value> {
        self.default_value.as_ref()
    }

    pub fn deprecation_state(&self) -> DeprecationState<'_> {
        DeprecationState::from(self.directives.as_slice())
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn directives(&self) -> &[DirectiveAnnotation] {
        &self.directives
    }

    /// True when a value must be supplied: the type is non-null and there
    /// is no default to fall back on.
    pub fn is_required(&self) -> bool {
        self.type_ref.is_non_null() && self.default_value.is_none()
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    pub fn type_ref(&self) -> &TypeRef {
        &self.type_ref
    }
}
