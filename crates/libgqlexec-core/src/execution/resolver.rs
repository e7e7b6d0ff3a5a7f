use crate::Value;
use crate::coercion::CoercionError;
use crate::subscription::SourceStream;
use futures::future::BoxFuture;
use indexmap::IndexMap;
use std::future::Future;
use thiserror::Error;

/// Coerced argument values of a field, by argument name.
pub type Arguments = IndexMap<String, Value>;

/// The future a [`FieldResolver`] returns.
pub type ResolverFuture = BoxFuture<'static, Result<Value, FieldError>>;

/// A failure reported by a resolver. It nulls the field it was raised for
/// and appears in the response's `errors` list.
#[derive(Clone, Debug, Error, PartialEq)]
pub enum FieldError {
    #[error(transparent)]
    Coercion(#[from] CoercionError),

    #[error("{0}")]
    Message(String),
}
impl FieldError {
    pub fn new(message: impl Into<String>) -> Self {
        Self::Message(message.into())
    }
}
impl std::convert::From<String> for FieldError {
    fn from(message: String) -> Self {
        Self::Message(message)
    }
}
impl std::convert::From<&str> for FieldError {
    fn from(message: &str) -> Self {
        Self::Message(message.to_string())
    }
}

/// Produces the value of one field of one object type.
///
/// `parent` is the value of the object the field is selected on (the root
/// value for root fields, the triggering event for subscription root fields).
pub trait FieldResolver: Send + Sync {
    fn resolve(&self, parent: &Value, arguments: &Arguments) -> ResolverFuture;
}

/// Adapts a synchronous closure into a [`FieldResolver`].
pub(crate) struct SyncFieldResolver<F>(pub F);
impl<F> FieldResolver for SyncFieldResolver<F>
where
    F: Fn(&Value, &Arguments) -> Result<Value, FieldError> + Send + Sync,
{
    fn resolve(&self, parent: &Value, arguments: &Arguments) -> ResolverFuture {
        Box::pin(futures::future::ready((self.0)(parent, arguments)))
    }
}

/// Adapts a closure returning a future into a [`FieldResolver`]. The future
/// owns clones of the parent value and arguments.
pub(crate) struct AsyncFieldResolver<F>(pub F);
impl<F, Fut> FieldResolver for AsyncFieldResolver<F>
where
    F: Fn(Value, Arguments) -> Fut + Send + Sync,
    Fut: Future<Output = Result<Value, FieldError>> + Send + 'static,
{
    fn resolve(&self, parent: &Value, arguments: &Arguments) -> ResolverFuture {
        Box::pin((self.0)(parent.to_owned(), arguments.to_owned()))
    }
}

/// Reads the parent object's entry named like the field. Host values and
/// missing entries resolve to `null`.
pub(crate) struct PropertyResolver {
    pub property: String,
}
impl FieldResolver for PropertyResolver {
    fn resolve(&self, parent: &Value, _arguments: &Arguments) -> ResolverFuture {
        let value = parent.get(&self.property).cloned().unwrap_or_default();
        Box::pin(futures::future::ready(Ok(value)))
    }
}

/// Binds a subscription root field to the [`SourceStream`] whose events
/// drive it.
pub trait StreamResolver: Send + Sync {
    fn resolve_stream(
        &self,
        root_value: &Value,
        arguments: &Arguments,
    ) -> Result<SourceStream, FieldError>;
}
impl<F> StreamResolver for F
where
    F: Fn(&Value, &Arguments) -> Result<SourceStream, FieldError> + Send + Sync,
{
    fn resolve_stream(
        &self,
        root_value: &Value,
        arguments: &Arguments,
    ) -> Result<SourceStream, FieldError> {
        self(root_value, arguments)
    }
}

/// Picks the concrete object type of a value completed in an interface or
/// union position. Returning `None` leaves the type unresolved.
///
/// https://spec.graphql.org/October2021/#ResolveAbstractType()
pub trait AbstractTypeResolver: Send + Sync {
    fn resolve_type(&self, value: &Value, abstract_type_name: &str) -> Option<String>;
}
impl<F> AbstractTypeResolver for F
where
    F: Fn(&Value, &str) -> Option<String> + Send + Sync,
{
    fn resolve_type(&self, value: &Value, abstract_type_name: &str) -> Option<String> {
        self(value, abstract_type_name)
    }
}
