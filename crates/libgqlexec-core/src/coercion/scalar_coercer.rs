use crate::Value;
use std::collections::HashMap;
use std::sync::Arc;

/// Coerces values of one custom scalar type, both when they arrive as input
/// (literals and variables) and when resolvers produce them as results.
///
/// Returning `None` rejects the value.
pub trait ScalarCoercer: Send + Sync {
    fn coerce(&self, value: &Value) -> Option<Value>;
}
impl<F> ScalarCoercer for F
where
    F: Fn(&Value) -> Option<Value> + Send + Sync,
{
    fn coerce(&self, value: &Value) -> Option<Value> {
        self(value)
    }
}

/// Registered coercers by scalar type name.
pub type ScalarCoercers = HashMap<String, Arc<dyn ScalarCoercer>>;
