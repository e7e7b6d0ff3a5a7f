
use crate::Value;
use crate::execution::Engine;
use crate::execution::FieldError;
use crate::execution::ResolverRegistry;
use crate::schema::SchemaBuilder;
use crate::subscription::SourceStream;
use crate::validation::DocumentValidator;
use crate::validation::ValidatedDocument;
use std::sync::Arc;
use std::sync::atomic::AtomicUsize;
use std::sync::atomic::Ordering;

const SDL: &str = "
    type Query { ok: Boolean }
    type Tick { n: Int channel: String }
    type Subscription {
        ticked(channel: String!): Tick
        unbound: Int
    }
";

/// An engine whose `ticked` field binds to the source `ticks:<channel>`.
/// Every release of a bound source bumps `releases`.
fn engine(releases: Arc<AtomicUsize>) -> Engine {
    let schema = SchemaBuilder::new()
        .load_str(None, SDL)
        .expect("parse")
        .build()
        .expect("valid schema");
    let resolvers = ResolverRegistry::builder(&schema)
        .add_stream_resolver("ticked", move |_, args| {
            let channel = args.get("channel")
                .and_then(Value::as_str)
                .ok_or_else(|| FieldError::new("channel is required"))?;
            if channel == "forbidden" {
                return Err(FieldError::new("channel `forbidden` can not be subscribed to"));
            }
            let releases = releases.clone();
            Ok(SourceStream::new(format!("ticks:{channel}")).on_release(move || {
                releases.fetch_add(1, Ordering::SeqCst);
            }))
        })
        .expect("register stream resolver")
        .add_property_resolvers()
        .build();
    Engine::new(schema, resolvers)
}

fn document(engine: &Engine, content: &str) -> ValidatedDocument {
    DocumentValidator::from_str(engine.schema(), content)
        .expect("parse error")
        .validate()
        .expect("valid document")
}
