mod abstract_type_tests;
mod engine_tests;
mod introspection_tests;
mod resolver_registry_tests;

use crate::Value;
use crate::execution::Engine;
use crate::execution::ResolverRegistry;
use crate::execution::ResolverRegistryBuilder;
use crate::execution::Response;
use crate::schema::Schema;
use crate::schema::SchemaBuilder;
use indexmap::IndexMap;

fn build_schema(sdl: &str) -> Schema {
    SchemaBuilder::new()
        .load_str(None, sdl)
        .expect("parse")
        .build()
        .expect("valid schema")
}

/// Builds an engine whose resolvers are the ones `register` adds followed
/// by property resolvers over `root_value`.
fn fixture_engine(
    sdl: &str,
    root_value: serde_json::Value,
    register: impl FnOnce(ResolverRegistryBuilder<'_>) -> ResolverRegistryBuilder<'_>,
) -> Engine {
    let schema = build_schema(sdl);
    let resolvers = register(ResolverRegistry::builder(&schema))
        .add_property_resolvers()
        .build();
    Engine::new(schema, resolvers).with_root_value(root_value)
}

async fn execute(engine: &Engine, document: &str) -> Response {
    engine.execute_str(document, None, &IndexMap::new()).await
}

async fn execute_with_variables(
    engine: &Engine,
    document: &str,
    variables: serde_json::Value,
) -> Response {
    let variables = match Value::from(variables) {
        Value::Object(variables) => variables,
        other => panic!("variables must be an object, found {other}"),
    };
    engine.execute_str(document, None, &variables).await
}

fn error_messages(response: &Response) -> Vec<&str> {
    response.errors.iter().map(|err| err.message.as_str()).collect()
}
