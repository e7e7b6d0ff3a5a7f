use crate::ast;
use crate::loc;
use indexmap::IndexMap;

/// A directive applied to some type-system element, e.g. the
/// `@deprecated(reason: "...")` on a field definition.
///
/// Argument values are kept as the literals written in the schema document.
#[derive(Clone, Debug, PartialEq)]
pub struct DirectiveAnnotation {
    pub(crate) arguments: IndexMap<String, ast::query::Value>,
    pub(crate) name: String,
    pub(crate) ref_location: loc::SourceLocation,
}
impl DirectiveAnnotation {
    pub(crate) fn from_ast(
        parent_location: &loc::SourceLocation,
        directives: &[ast::schema::Directive],
    ) -> Vec<Self> {
        directives.iter().map(|directive| Self {
            arguments: directive.arguments.iter()
                .map(|(name, val)| (name.to_string(), val.to_owned()))
                .collect(),
            name: directive.name.to_string(),
            ref_location: parent_location.with_ast_position(&directive.position),
        }).collect()
    }

    pub fn arguments(&self) -> &IndexMap<String, ast::query::Value> {
        &self.arguments
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    pub fn ref_location(&self) -> &loc::SourceLocation {
        &self.ref_location
    }
}
