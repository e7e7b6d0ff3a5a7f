use crate::ast;
use crate::operation;
use crate::operation::OperationInfo;
use std::collections::HashMap;
use std::sync::Arc;

/// An executable document that has passed validation against a particular
/// [`Schema`](crate::schema::Schema).
///
/// Only a [`ValidatedDocument`] can be executed. It is immutable and cheap
/// to clone, so it can be retained by long-lived subscriptions.
#[derive(Clone, Debug)]
pub struct ValidatedDocument {
    pub(crate) document: Arc<ast::query::Document>,
    /// Fragment name -> index into `document.definitions`.
    pub(crate) fragment_indexes: Arc<HashMap<String, usize>>,
}
impl ValidatedDocument {
    pub(super) fn new(document: ast::query::Document) -> Self {
        use graphql_parser::query::Definition;
        let fragment_indexes = document.definitions.iter()
            .enumerate()
            .filter_map(|(idx, def)| match def {
                Definition::Fragment(frag_def) => Some((frag_def.name.to_string(), idx)),
                Definition::Operation(_) => None,
            })
            .collect();
        Self {
            document: Arc::new(document),
            fragment_indexes: Arc::new(fragment_indexes),
        }
    }

    pub fn document(&self) -> &ast::query::Document {
        &self.document
    }

    pub fn fragment(&self, name: &str) -> Option<&ast::query::FragmentDefinition> {
        use graphql_parser::query::Definition;
        let idx = *self.fragment_indexes.get(name)?;
        match self.document.definitions.get(idx)? {
            Definition::Fragment(frag_def) => Some(frag_def),
            Definition::Operation(_) => None,
        }
    }

    /// Selects the operation to execute.
    ///
    /// With a name, the operation of that name; without one, the document's
    /// only operation (`None` if it has several).
    ///
    /// https://spec.graphql.org/October2021/#GetOperation()
    pub fn operation(&self, operation_name: Option<&str>) -> Option<OperationInfo<'_>> {
        let operations = self.operations();
        match operation_name {
            Some(name) => operations.into_iter().find(|op| op.name == Some(name)),
            None if operations.len() == 1 => operations.into_iter().next(),
            None => None,
        }
    }

    pub fn operations(&self) -> Vec<OperationInfo<'_>> {
        OperationInfo::all_in(&self.document)
    }

    pub fn fragments(&self) -> Vec<&ast::query::FragmentDefinition> {
        operation::fragment_definitions(&self.document)
    }
}
