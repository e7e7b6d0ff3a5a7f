use crate::Value;
use crate::execution::Engine;
use crate::execution::FieldError;
use crate::execution::PathSegment;
use crate::execution::ResolverRegistry;
use crate::execution::tests::build_schema;
use crate::execution::tests::error_messages;
use crate::execution::tests::execute;
use crate::execution::tests::execute_with_variables;
use crate::execution::tests::fixture_engine;
use indexmap::IndexMap;
use serde_json::json;
use std::sync::Arc;
use std::sync::Mutex;
use std::sync::atomic::AtomicI64;
use std::sync::atomic::AtomicUsize;
use std::sync::atomic::Ordering;

mod queries {
    use super::*;

    #[tokio::test]
    async fn resolves_each_root_field_once() {
        let schema = build_schema("type Query { a: Int b: Int }");
        let calls = Arc::new(AtomicUsize::new(0));
        let (a_calls, b_calls) = (calls.clone(), calls.clone());
        let resolvers = ResolverRegistry::builder(&schema)
            .add_field_resolver("Query", "a", move |_, _| {
                a_calls.fetch_add(1, Ordering::SeqCst);
                Ok(Value::Int(1))
            })
            .expect("register a")
            .add_field_resolver("Query", "b", move |_, _| {
                b_calls.fetch_add(1, Ordering::SeqCst);
                Ok(Value::Int(2))
            })
            .expect("register b")
            .build();
        let engine = Engine::new(schema, resolvers);

        let response = execute(&engine, "{ a b }").await;
        assert_eq!(response.to_json(), json!({ "data": { "a": 1, "b": 2 } }));
        assert_eq!(calls.load(Ordering::SeqCst), 2);
    }

    #[tokio::test]
    async fn aliases_and_merged_selections() {
        let engine = fixture_engine(
            "type Query { user: User } type User { id: ID! name: String age: Int }",
            json!({ "user": { "id": 7, "name": "Ada", "age": 36 } }),
            |builder| builder,
        );
        let response = execute(&engine, "{
            user { id }
            user { name }
            who: user { ...Ages }
        }
        fragment Ages on User { age }").await;
        assert_eq!(response.to_json(), json!({
            "data": {
                "user": { "id": "7", "name": "Ada" },
                "who": { "age": 36 },
            },
        }));
    }

    #[tokio::test]
    async fn arguments_are_coerced_with_defaults_and_variables() {
        let schema = build_schema("type Query { scale(n: Int!, by: Int = 10): Int }");
        let resolvers = ResolverRegistry::builder(&schema)
            .add_field_resolver("Query", "scale", |_, args| {
                let n = args["n"].as_i64().ok_or("n is required")?;
                let by = args["by"].as_i64().ok_or("by is required")?;
                Ok(Value::Int(n * by))
            })
            .expect("register")
            .build();
        let engine = Engine::new(schema, resolvers);

        let response = execute_with_variables(
            &engine,
            "query Scale($n: Int!) { defaulted: scale(n: $n) explicit: scale(n: $n, by: 2) }",
            json!({ "n": 4 }),
        ).await;
        assert_eq!(response.to_json(), json!({
            "data": { "defaulted": 40, "explicit": 8 },
        }));
    }

    #[tokio::test]
    async fn async_resolvers_receive_owned_parent_and_arguments() {
        let schema = build_schema("type Query { echo(text: String!): String }");
        let resolvers = ResolverRegistry::builder(&schema)
            .add_async_field_resolver("Query", "echo", |_parent, args| async move {
                tokio::task::yield_now().await;
                Ok::<_, FieldError>(args.get("text").cloned().unwrap_or_default())
            })
            .expect("register")
            .build();
        let engine = Engine::new(schema, resolvers);

        let response = execute(&engine, r#"{ echo(text: "hello") }"#).await;
        assert_eq!(response.to_json(), json!({ "data": { "echo": "hello" } }));
    }

    #[tokio::test]
    async fn sibling_fields_run_concurrently() {
        let schema = build_schema("type Query { slow: Int fast: Int }");
        let log = Arc::new(Mutex::new(vec![]));
        let (slow_log, fast_log) = (log.clone(), log.clone());
        let resolvers = ResolverRegistry::builder(&schema)
            .add_async_field_resolver("Query", "slow", move |_, _| {
                let log = slow_log.clone();
                async move {
                    tokio::task::yield_now().await;
                    log.lock().unwrap().push("slow");
                    Ok::<_, FieldError>(Value::Int(1))
                }
            })
            .expect("register slow")
            .add_async_field_resolver("Query", "fast", move |_, _| {
                let log = fast_log.clone();
                async move {
                    log.lock().unwrap().push("fast");
                    Ok::<_, FieldError>(Value::Int(2))
                }
            })
            .expect("register fast")
            .build();
        let engine = Engine::new(schema, resolvers);

        let response = execute(&engine, "{ slow fast }").await;
        assert_eq!(response.to_json(), json!({ "data": { "slow": 1, "fast": 2 } }));
        assert_eq!(*log.lock().unwrap(), vec!["fast", "slow"]);
    }
}

mod mutations {
    use super::*;

    #[tokio::test]
    async fn root_fields_run_in_document_order() {
        let schema = build_schema("type Query { ok: Boolean } type Mutation { inc: Int }");
        let counter = Arc::new(AtomicI64::new(0));
        let resolvers = ResolverRegistry::builder(&schema)
            .add_field_resolver("Mutation", "inc", move |_, _| {
                Ok(Value::Int(counter.fetch_add(1, Ordering::SeqCst) + 1))
            })
            .expect("register")
            .build();
        let engine = Engine::new(schema, resolvers);

        let response = execute(&engine, "mutation { x: inc y: inc }").await;
        assert_eq!(response.to_json(), json!({ "data": { "x": 1, "y": 2 } }));
    }

    #[tokio::test]
    async fn each_root_field_completes_before_the_next_starts() {
        let schema = build_schema(
            "type Query { ok: Boolean } type Mutation { slow: Int fast: Int }",
        );
        let log = Arc::new(Mutex::new(vec![]));
        let (slow_log, fast_log) = (log.clone(), log.clone());
        let resolvers = ResolverRegistry::builder(&schema)
            .add_async_field_resolver("Mutation", "slow", move |_, _| {
                let log = slow_log.clone();
                async move {
                    tokio::task::yield_now().await;
                    log.lock().unwrap().push("slow");
                    Ok::<_, FieldError>(Value::Int(1))
                }
            })
            .expect("register slow")
            .add_async_field_resolver("Mutation", "fast", move |_, _| {
                let log = fast_log.clone();
                async move {
                    log.lock().unwrap().push("fast");
                    Ok::<_, FieldError>(Value::Int(2))
                }
            })
            .expect("register fast")
            .build();
        let engine = Engine::new(schema, resolvers);

        let response = execute(&engine, "mutation { slow fast }").await;
        assert_eq!(response.to_json(), json!({ "data": { "slow": 1, "fast": 2 } }));
        assert_eq!(*log.lock().unwrap(), vec!["slow", "fast"]);
    }

    #[tokio::test]
    async fn schema_without_mutation_root() {
        let engine = fixture_engine("type Query { ok: Boolean }", json!({}), |builder| builder);
        let response = execute(&engine, "mutation { ok }").await;
        // Validation rejects the selection before execution starts.
        assert_eq!(response.data, None);
        assert!(!response.errors.is_empty());
    }
}

mod directives {
    use super::*;

    const SDL: &str = "type Query { a: Int b: Int c: Int }";

    fn engine() -> Engine {
        fixture_engine(SDL, json!({ "a": 1, "b": 2, "c": 3 }), |builder| builder)
    }

    #[tokio::test]
    async fn literal_conditions() {
        let response = execute(&engine(), "{
            a @skip(if: true)
            b @include(if: false)
            c @skip(if: false) @include(if: true)
        }").await;
        assert_eq!(response.to_json(), json!({ "data": { "c": 3 } }));
    }

    #[tokio::test]
    async fn variable_conditions_on_fragments() {
        let response = execute_with_variables(
            &engine(),
            "query Q($withA: Boolean!, $skipB: Boolean!) {
                ... on Query @include(if: $withA) { a }
                ...B @skip(if: $skipB)
                c
            }
            fragment B on Query { b }",
            json!({ "withA": false, "skipB": false }),
        ).await;
        assert_eq!(response.to_json(), json!({ "data": { "b": 2, "c": 3 } }));
    }

    #[tokio::test]
    async fn null_condition_keeps_the_selection() {
        let response = execute_with_variables(
            &engine(),
            "query Q($skip: Boolean = true) { a @skip(if: $skip) }",
            json!({ "skip": null }),
        ).await;
        assert_eq!(response.data, Some(Value::from(json!({ "a": 1 }))));
        assert_eq!(
            error_messages(&response),
            vec!["The `if` argument of `@skip` did not resolve to a Boolean"],
        );
    }
}

mod request_errors {
    use super::*;

    fn engine() -> Engine {
        fixture_engine("type Query { a: Int }", json!({ "a": 1 }), |builder| builder)
    }

    #[tokio::test]
    async fn parse_failure() {
        let response = execute(&engine(), "{ a ").await;
        assert_eq!(response.data, None);
        assert_eq!(response.errors.len(), 1);
        assert!(response.errors[0].message.starts_with("The document could not be parsed"));
    }

    #[tokio::test]
    async fn validation_failure() {
        let response = execute(&engine(), "{ nope }").await;
        assert_eq!(response.data, None);
        assert_eq!(response.errors.len(), 1);
        assert!(!response.errors[0].locations.is_empty());
    }

    #[tokio::test]
    async fn unknown_operation_name() {
        let engine = engine();
        let document = engine.validate(
            crate::ast::query::parse("query A { a } query B { a }").expect("parse"),
        ).expect("valid document");

        let response = engine.execute(&document, Some("C"), &IndexMap::new()).await;
        assert_eq!(error_messages(&response), vec!["Unknown operation named `C`"]);
        assert_eq!(response.data, None);

        let response = engine.execute(&document, None, &IndexMap::new()).await;
        assert_eq!(response.data, None);
        assert_eq!(response.errors.len(), 1);

        let response = engine.execute(&document, Some("B"), &IndexMap::new()).await;
        assert_eq!(response.to_json(), json!({ "data": { "a": 1 } }));
    }

    #[tokio::test]
    async fn invalid_variable_inputs() {
        let schema = build_schema("type Query { double(n: Int!): Int }");
        let resolvers = ResolverRegistry::builder(&schema)
            .add_field_resolver("Query", "double", |_, args| {
                Ok(Value::Int(args["n"].as_i64().unwrap_or_default() * 2))
            })
            .expect("register")
            .build();
        let engine = Engine::new(schema, resolvers);
        let response = execute(&engine, "query Q($n: Int!) { double(n: $n) }").await;
        assert_eq!(response.data, None);
        assert_eq!(response.errors.len(), 1);

        let response = execute_with_variables(
            &engine,
            "query Q($n: Int!) { double(n: $n) }",
            json!({ "n": "four" }),
        ).await;
        assert_eq!(response.data, None);
        assert_eq!(response.errors.len(), 1);
    }

    #[tokio::test]
    async fn field_without_resolver() {
        let schema = build_schema("type Query { a: Int b: Int }");
        let resolvers = ResolverRegistry::builder(&schema)
            .add_field_resolver("Query", "a", |_, _| Ok(Value::Int(1)))
            .expect("register")
            .build();
        let engine = Engine::new(schema, resolvers);

        let response = execute(&engine, "{ a b }").await;
        assert_eq!(response.data, Some(Value::from(json!({ "a": 1, "b": null }))));
        assert_eq!(
            error_messages(&response),
            vec!["No resolver is registered for field `Query.b`"],
        );
        assert_eq!(response.errors[0].path, Some(vec![PathSegment::from("b")]));
    }
}

mod lists {
    use super::*;

    const SDL: &str = "
        type Query {
            nums: [Int!]
            strictNums: [Int!]!
            maybeNums: [Int]
            notAList: [Int]
            users: [User!]!
        }
        type User { name: String }
    ";

    fn engine() -> Engine {
        fixture_engine(
            SDL,
            json!({
                "nums": [1, null, 3],
                "strictNums": [1, 2],
                "maybeNums": [1, null, 3],
                "notAList": 5,
                "users": [{ "name": "a" }, { "name": "b" }],
            }),
            |builder| builder,
        )
    }

    #[tokio::test]
    async fn items_complete_in_order() {
        let response = execute(&engine(), "{ strictNums maybeNums users { name } }").await;
        assert_eq!(response.to_json(), json!({
            "data": {
                "strictNums": [1, 2],
                "maybeNums": [1, null, 3],
                "users": [{ "name": "a" }, { "name": "b" }],
            },
        }));
    }

    #[tokio::test]
    async fn null_item_in_non_null_position_nulls_the_list() {
        let response = execute(&engine(), "{ nums }").await;
        assert_eq!(response.data, Some(Value::from(json!({ "nums": null }))));
        assert_eq!(response.errors.len(), 1);
        assert_eq!(
            response.errors[0].path,
            Some(vec![PathSegment::from("nums"), PathSegment::from(1)]),
        );
    }

    #[tokio::test]
    async fn non_list_value() {
        let response = execute(&engine(), "{ notAList }").await;
        assert_eq!(response.data, Some(Value::from(json!({ "notAList": null }))));
        assert_eq!(
            error_messages(&response),
            vec!["Expected a list for field `Query.notAList`, but the resolver returned Int"],
        );
    }
}

mod leaf_values {
    use super::*;

    #[tokio::test]
    async fn invalid_leaf_results_become_null() {
        let engine = fixture_engine(
            "enum Color { RED } type Query { color: Color big: Int ok: String }",
            json!({ "color": "BLUE", "big": 5_000_000_000_i64, "ok": "fine" }),
            |builder| builder,
        );
        let response = execute(&engine, "{ color big ok }").await;
        assert_eq!(
            response.data,
            Some(Value::from(json!({ "color": null, "big": null, "ok": "fine" }))),
        );
        assert_eq!(response.errors.len(), 2);
        assert_eq!(response.errors[0].path, Some(vec![PathSegment::from("color")]));
        assert_eq!(response.errors[1].path, Some(vec![PathSegment::from("big")]));
    }

    #[tokio::test]
    async fn custom_scalars_use_registered_coercers() {
        let schema = build_schema("scalar Shout type Query { shout(text: Shout!): Shout }");
        let resolvers = ResolverRegistry::builder(&schema)
            .add_scalar_coercer("Shout", |value: &Value| {
                value.as_str().map(|s| Value::String(s.to_uppercase()))
            })
            .expect("register coercer")
            .add_field_resolver("Query", "shout", |_, args| Ok(args["text"].to_owned()))
            .expect("register resolver")
            .build();
        let engine = Engine::new(schema, resolvers);

        let response = execute(&engine, r#"{ shout(text: "hey") }"#).await;
        assert_eq!(response.to_json(), json!({ "data": { "shout": "HEY" } }));

        let response = execute(&engine, "{ shout(text: 4) }").await;
        assert_eq!(response.data, Some(Value::from(json!({ "shout": null }))));
        assert_eq!(response.errors.len(), 1);
    }
}
