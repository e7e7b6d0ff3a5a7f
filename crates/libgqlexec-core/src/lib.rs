pub mod ast;
pub mod coercion;
pub mod execution;
pub mod file_reader;
pub mod loc;
pub mod operation;
pub mod schema;
pub mod subscription;
pub mod types;
pub mod validation;
mod value;

pub use execution::Engine;
pub use execution::Response;
pub use schema::Schema;
pub use schema::SchemaBuilder;
pub use validation::ValidatedDocument;
pub use value::AnyValue;
pub use value::Value;
