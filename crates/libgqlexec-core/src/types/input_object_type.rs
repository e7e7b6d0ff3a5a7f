use crate::loc;
use crate::types::DirectiveAnnotation;
use crate::types::InputValue;
use indexmap::IndexMap;

#[derive(Clone, Debug, PartialEq)]
pub struct InputObjectType {
    pub(crate) def_location: loc::SourceLocation,
    pub(crate) description: Option<String>,
    pub(crate) directives: Vec<DirectiveAnnotation>,
    pub(crate) fields: IndexMap<String, InputValue>,
    pub(crate) name: String,
}
impl InputObjectType {
    pub fn def_location(&self) -> &loc::SourceLocation {
        &self.def_location
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn directives(&self) -> &[DirectiveAnnotation] {
        &self.directives
    }

    pub fn fields(&self) -> &IndexMap<String, InputValue> {
        &self.fields
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }
}
