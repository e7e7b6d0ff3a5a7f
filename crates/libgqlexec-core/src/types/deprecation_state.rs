use crate::types::DirectiveAnnotation;

const DEFAULT_DEPRECATION_REASON: &str = "No longer supported";

#[derive(Clone, Debug, PartialEq)]
pub enum DeprecationState<'a> {
    Deprecated(&'a str),
    NotDeprecated,
}
impl<'a> DeprecationState<'a> {
    pub fn is_deprecated(&self) -> bool {
        matches!(self, Self::Deprecated(_))
    }

    pub fn reason(&self) -> Option<&'a str> {
        match self {
            Self::Deprecated(reason) => Some(reason),
            Self::NotDeprecated => None,
        }
    }
}

impl<'a> std::convert::From<&'a [DirectiveAnnotation]> for DeprecationState<'a> {
    fn from(annots: &'a [DirectiveAnnotation]) -> DeprecationState<'a> {
        let annot = annots.iter().find(|annot| annot.name() == "deprecated");
        match annot {
            Some(annot) => {
                let reason = match annot.arguments().get("reason") {
                    Some(graphql_parser::query::Value::String(reason)) => reason.as_str(),
                    _ => DEFAULT_DEPRECATION_REASON,
                };
                DeprecationState::Deprecated(reason)
            },
            None => DeprecationState::NotDeprecated,
        }
    }
}
