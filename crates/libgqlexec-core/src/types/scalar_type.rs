use crate::loc;
use crate::types::DirectiveAnnotation;

/// A custom scalar declared with `scalar Name` in a schema document.
#[derive(Clone, Debug, PartialEq)]
pub struct ScalarType {
    pub(crate) def_location: loc::SourceLocation,
    pub(crate) description: Option<String>,
    pub(crate) directives: Vec<DirectiveAnnotation>,
    pub(crate) name: String,
}
impl ScalarType {
    pub fn def_location(&self) -> &loc::SourceLocation {
        &self.def_location
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn directives(&self) -> &[DirectiveAnnotation] {
        &self.directives
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    /// The `url` passed to an `@specifiedBy` annotation on this scalar.
    pub fn specified_by_url(&self) -> Option<&str> {
        self.directives.iter()
            .find(|annot| annot.name() == "specifiedBy")
            .and_then(|annot| match annot.arguments().get("url") {
                Some(graphql_parser::query::Value::String(url)) => Some(url.as_str()),
                _ => None,
            })
    }
}
