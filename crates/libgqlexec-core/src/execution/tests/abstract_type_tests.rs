use crate::Value;
use crate::execution::PathSegment;
use crate::execution::tests::error_messages;
use crate::execution::tests::execute;
use crate::execution::tests::fixture_engine;
use serde_json::json;

const SDL: &str = "
    interface Pet { name: String! }
    type Dog implements Pet { name: String! barks: Boolean }
    type Cat implements Pet { name: String! lives: Int }
    type Human { name: String! }
    union Named = Dog | Cat | Human
    type Query {
        pets: [Pet]
        named: [Named!]!
    }
";

const PETS_QUERY: &str = "{
    pets {
        __typename
        name
        ... on Dog { barks }
        ... on Cat { lives }
    }
}";

#[tokio::test]
async fn typename_entries_pick_the_concrete_type() {
    let engine = fixture_engine(
        SDL,
        json!({
            "pets": [
                { "__typename": "Dog", "name": "Rex", "barks": true },
                { "__typename": "Cat", "name": "Tom", "lives": 9 },
            ],
        }),
        |builder| builder,
    );
    let response = execute(&engine, PETS_QUERY).await;
    assert_eq!(response.to_json(), json!({
        "data": {
            "pets": [
                { "__typename": "Dog", "name": "Rex", "barks": true },
                { "__typename": "Cat", "name": "Tom", "lives": 9 },
            ],
        },
    }));
}

#[tokio::test]
async fn registered_resolver_takes_precedence() {
    let engine = fixture_engine(
        SDL,
        json!({
            "pets": [
                { "name": "Rex", "barks": true },
                { "__typename": "Dog", "name": "Tom", "lives": 9 },
            ],
        }),
        |builder| builder.set_abstract_type_resolver(|value: &Value, _abstract_type: &str| {
            let type_name = if value.get("lives").is_some() { "Cat" } else { "Dog" };
            Some(type_name.to_string())
        }),
    );
    let response = execute(&engine, PETS_QUERY).await;
    assert_eq!(response.to_json(), json!({
        "data": {
            "pets": [
                { "__typename": "Dog", "name": "Rex", "barks": true },
                { "__typename": "Cat", "name": "Tom", "lives": 9 },
            ],
        },
    }));
}

#[tokio::test]
async fn unresolved_type_nulls_only_that_item() {
    let engine = fixture_engine(
        SDL,
        json!({
            "pets": [
                { "name": "Mystery" },
                { "__typename": "Cat", "name": "Tom", "lives": 9 },
            ],
        }),
        |builder| builder,
    );
    let response = execute(&engine, "{ pets { name } }").await;
    assert_eq!(response.data, Some(Value::from(json!({
        "pets": [null, { "name": "Tom" }],
    }))));
    assert_eq!(
        error_messages(&response),
        vec!["Could not resolve the concrete object type for abstract type `Pet`"],
    );
    assert_eq!(
        response.errors[0].path,
        Some(vec![PathSegment::from("pets"), PathSegment::from(0)]),
    );
}

#[tokio::test]
async fn impossible_type_is_an_error() {
    let engine = fixture_engine(
        SDL,
        json!({ "pets": [{ "__typename": "Human", "name": "Ada" }] }),
        |builder| builder,
    );
    let response = execute(&engine, "{ pets { name } }").await;
    assert_eq!(response.data, Some(Value::from(json!({ "pets": [null] }))));
    assert_eq!(
        error_messages(&response),
        vec!["The `Human` type returned for `Pet` is not one of its possible types"],
    );
}

#[tokio::test]
async fn union_members_in_non_null_list() {
    let engine = fixture_engine(
        SDL,
        json!({
            "named": [
                { "__typename": "Human", "name": "Ada" },
                { "__typename": "Dog", "name": "Rex", "barks": false },
            ],
        }),
        |builder| builder,
    );
    let response = execute(&engine, "{
        named {
            ... on Human { human: name }
            ... on Pet { name }
        }
    }").await;
    assert_eq!(response.to_json(), json!({
        "data": {
            "named": [{ "human": "Ada" }, { "name": "Rex" }],
        },
    }));
}
