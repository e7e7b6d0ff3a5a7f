use crate::loc;
use crate::types::DeprecationState;
use crate::types::DirectiveAnnotation;
use crate::types::InputValue;
use crate::types::TypeRef;
use indexmap::IndexMap;

/// A field defined on an object or interface type.
#[derive(Clone, Debug, PartialEq)]
pub struct Field {
    pub(crate) def_location: loc::SourceLocation,
    pub(crate) description: Option<String>,
    pub(crate) directives: Vec<DirectiveAnnotation>,
    pub(crate) name: String,
    pub(crate) parameters: IndexMap<String, InputValue>,
    pub(crate) parent_type_name: String,
    pub(crate) type_ref: TypeRef,
}
impl Field {
    pub(crate) fn typename(parent_type_name: &str) -> Self {
        Self {
            def_location: loc::SourceLocation::GraphQLBuiltIn,
            description: None,
            directives: vec![],
            name: "__typename".to_string(),
            parameters: IndexMap::new(),
            parent_type_name: parent_type_name.to_string(),
            type_ref: TypeRef::non_null(TypeRef::named("String")),
        }
    }

    pub fn def_location(&self) -> &loc::SourceLocation {
        &self.def_location
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

    /// Fields whose names begin with `__` are answered by the engine itself.
    pub fn is_introspection_field(&self) -> bool {
        self.name.starts_with("__")
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    pub fn parameters(&self) -> &IndexMap<String, InputValue> {
        &self.parameters
    }

    pub fn parent_type_name(&self) -> &str {
        self.parent_type_name.as_str()
    }

    pub fn type_ref(&self) -> &TypeRef {
        &self.type_ref
    }
}
