use crate::Value;
use crate::execution::ExecutionError;
use crate::execution::PathSegment;
use crate::execution::ResolverRegistry;
use crate::execution::ResponseError;
use crate::operation::OperationKind;
use crate::schema::Schema;
use crate::validation::ValidatedDocument;
use indexmap::IndexMap;
use std::sync::Mutex;
use std::sync::PoisonError;

/// State shared by every field of one execution.
///
/// Sibling fields run concurrently and share only the error list.
pub(crate) struct ExecutionContext<'a> {
    pub document: &'a ValidatedDocument,
    errors: Mutex<Vec<ResponseError>>,
    pub operation_kind: OperationKind,
    pub resolvers: &'a ResolverRegistry,
    pub schema: &'a Schema,
    pub variable_values: &'a IndexMap<String, Value>,
}
impl<'a> ExecutionContext<'a> {
    pub fn new(
        schema: &'a Schema,
        resolvers: &'a ResolverRegistry,
        document: &'a ValidatedDocument,
        operation_kind: OperationKind,
        variable_values: &'a IndexMap<String, Value>,
    ) -> Self {
        Self {
            document,
            errors: Mutex::new(vec![]),
            operation_kind,
            resolvers,
            schema,
            variable_values,
        }
    }

    pub fn record_error(&self, err: ExecutionError, path: Option<&[PathSegment]>) {
        let mut response_err = ResponseError::from(err);
        if let Some(path) = path {
            response_err = response_err.with_path(path.to_vec());
        }
        tracing::trace!(error = %response_err, "recorded execution error");
        self.errors.lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(response_err);
    }

    pub fn into_errors(self) -> Vec<ResponseError> {
        self.errors.into_inner().unwrap_or_else(PoisonError::into_inner)
    }
}
