use crate::Value;
use crate::subscription::ResponseConsumer;
use crate::validation::ValidatedDocument;
use indexmap::IndexMap;

/// One client subscription: everything needed to re-execute its operation
/// whenever the source it is bound to fires.
pub struct ResponseStream {
    pub(crate) consumer: Box<dyn ResponseConsumer>,
    pub(crate) document: ValidatedDocument,
    pub(crate) operation_name: Option<String>,
    pub(crate) variable_values: IndexMap<String, Value>,
}
impl ResponseStream {
    pub fn document(&self) -> &ValidatedDocument {
        &self.document
    }

    pub fn operation_name(&self) -> Option<&str> {
        self.operation_name.as_deref()
    }

    /// The operation's variables, coerced once at subscribe time.
    pub fn variable_values(&self) -> &IndexMap<String, Value> {
        &self.variable_values
    }
}
impl std::fmt::Debug for ResponseStream {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ResponseStream")
            .field("operation_name", &self.operation_name)
            .field("variable_values", &self.variable_values)
            .finish_non_exhaustive()
    }
}
