mod engine;
mod execution_context;
mod execution_error;
mod executor;
mod field_collector;
mod introspection;
mod registration_error;
mod resolver;
mod resolver_registry;
mod response;

pub use engine::Engine;
pub use execution_error::ExecutionError;
pub use registration_error::RegistrationError;
pub use resolver::AbstractTypeResolver;
pub use resolver::Arguments;
pub use resolver::FieldError;
pub use resolver::FieldResolver;
pub use resolver::ResolverFuture;
pub use resolver::StreamResolver;
pub use resolver_registry::ResolverRegistry;
pub use resolver_registry::ResolverRegistryBuilder;
pub use response::PathSegment;
pub use response::Response;
pub use response::ResponseError;

#[cfg(test)]
mod tests;
