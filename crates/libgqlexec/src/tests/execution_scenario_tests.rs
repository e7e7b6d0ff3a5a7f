use crate::Engine;
use crate::Value;
use crate::execution::ResolverRegistry;
use crate::tests::build_schema;
use indexmap::IndexMap;
use serde_json::json;
use std::sync::Arc;
use std::sync::atomic::AtomicI64;
use std::sync::atomic::AtomicUsize;
use std::sync::atomic::Ordering;

#[tokio::test]
async fn query_resolves_every_root_field() {
    let schema = build_schema("type Query { a: Int b: Int }");
    let invocations = Arc::new(AtomicUsize::new(0));
    let (a_invocations, b_invocations) = (invocations.clone(), invocations.clone());
    let resolvers = ResolverRegistry::builder(&schema)
        .add_field_resolver("Query", "a", move |_, _| {
            a_invocations.fetch_add(1, Ordering::SeqCst);
            Ok(Value::Int(1))
        })
        .expect("register a")
        .add_field_resolver("Query", "b", move |_, _| {
            b_invocations.fetch_add(1, Ordering::SeqCst);
            Ok(Value::Int(2))
        })
        .expect("register b")
        .build();
    let engine = Engine::new(schema, resolvers);

    let response = engine.execute_str("{ a b }", None, &IndexMap::new()).await;
    assert_eq!(
        serde_json::to_string(&response).expect("serialize"),
        r#"{"data":{"a":1,"b":2}}"#,
    );
    assert_eq!(invocations.load(Ordering::SeqCst), 2);
}

#[tokio::test]
async fn mutation_fields_run_serially() {
    let schema = build_schema("type Query { ok: Boolean } type Mutation { inc: Int }");
    let counter = Arc::new(AtomicI64::new(0));
    let resolvers = ResolverRegistry::builder(&schema)
        .add_field_resolver("Mutation", "inc", move |_, _| {
            Ok(Value::Int(counter.fetch_add(1, Ordering::SeqCst) + 1))
        })
        .expect("register inc")
        .build();
    let engine = Engine::new(schema, resolvers);

    let response = engine.execute_str("mutation { x: inc y: inc }", None, &IndexMap::new()).await;
    assert_eq!(response.to_json(), json!({ "data": { "x": 1, "y": 2 } }));
}

#[tokio::test]
async fn fixture_driven_execution_over_a_json_root_value() {
    let schema = build_schema("
        type Query { viewer: User }
        type User { login: String! repos(first: Int = 2): [Repo!]! }
        type Repo { name: String! stars: Int }
    ");
    let resolvers = ResolverRegistry::builder(&schema)
        .add_field_resolver("User", "repos", |parent, args| {
            let first = args.get("first").and_then(Value::as_i64).unwrap_or(0) as usize;
            let repos = parent.get("repos")
                .and_then(Value::as_list)
                .map(|repos| repos.iter().take(first).cloned().collect::<Vec<_>>())
                .unwrap_or_default();
            Ok(Value::List(repos))
        })
        .expect("register repos")
        .add_property_resolvers()
        .build();
    let engine = Engine::new(schema, resolvers).with_root_value(json!({
        "viewer": {
            "login": "octo",
            "repos": [
                { "name": "one", "stars": 3 },
                { "name": "two", "stars": null },
                { "name": "three", "stars": 1 },
            ],
        },
    }));

    let response = engine.execute_str(
        "query Viewer($n: Int) {
            viewer {
                login
                top: repos { name }
                some: repos(first: $n) { name stars }
            }
        }",
        Some("Viewer"),
        &IndexMap::from([("n".to_string(), Value::Int(3))]),
    ).await;
    assert_eq!(response.to_json(), json!({
        "data": {
            "viewer": {
                "login": "octo",
                "top": [{ "name": "one" }, { "name": "two" }],
                "some": [
                    { "name": "one", "stars": 3 },
                    { "name": "two", "stars": null },
                    { "name": "three", "stars": 1 },
                ],
            },
        },
    }));
}
