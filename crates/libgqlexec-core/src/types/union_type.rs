use crate::loc;
use crate::types::DirectiveAnnotation;
use indexmap::IndexMap;

#[derive(Clone, Debug, PartialEq)]
pub struct UnionType {
    pub(crate) def_location: loc::SourceLocation,
    pub(crate) description: Option<String>,
    pub(crate) directives: Vec<DirectiveAnnotation>,
    /// Member type name -> where the member was listed.
    pub(crate) members: IndexMap<String, loc::SourceLocation>,
    pub(crate) name: String,
}
impl UnionType {
    pub fn def_location(&self) -> &loc::SourceLocation {
        &self.def_location
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn directives(&self) -> &[DirectiveAnnotation] {
        &self.directives
    }

    pub fn has_member(&self, type_name: &str) -> bool {
        self.members.contains_key(type_name)
    }

    pub fn member_names(&self) -> Vec<&str> {
        self.members.keys().map(String::as_str).collect()
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }
}
