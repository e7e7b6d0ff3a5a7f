use crate::execution::Engine;
use crate::execution::tests::execute;
use crate::execution::tests::fixture_engine;
use serde_json::json;

const SDL: &str = r#"
    directive @tag(name: String!) repeatable on FIELD_DEFINITION | OBJECT

    scalar Url @specifiedBy(url: "https://example.com/url")

    interface Pet { name: String! }

    """A good dog"""
    type Dog implements Pet {
        name: String!
        tags: [String!]
        old: Int @deprecated(reason: "gone")
    }

    type Cat implements Pet { name: String! }

    enum Mood { HAPPY SAD @deprecated(reason: "cheer up") }

    type Query {
        dog: Dog
        search(limit: Int = 10, mood: Mood = HAPPY): [Pet]
        homepage: Url
    }
"#;

fn engine() -> Engine {
    fixture_engine(SDL, json!({}), |builder| builder)
}

async fn data(document: &str) -> serde_json::Value {
    let response = execute(&engine(), document).await;
    assert!(response.errors.is_empty(), "unexpected errors: {:#?}", response.errors);
    response.to_json()["data"].to_owned()
}

mod types {
    use super::*;

    #[tokio::test]
    async fn typename_of_the_query_root() {
        assert_eq!(data("{ __typename }").await, json!({ "__typename": "Query" }));
    }

    #[tokio::test]
    async fn object_type_with_wrapped_field_types() {
        let data = data(r#"{
            __type(name: "Dog") {
                kind
                name
                description
                interfaces { name }
                fields {
                    name
                    type { kind name ofType { kind name } }
                }
            }
        }"#).await;
        assert_eq!(data, json!({
            "__type": {
                "kind": "OBJECT",
                "name": "Dog",
                "description": "A good dog",
                "interfaces": [{ "name": "Pet" }],
                "fields": [
                    {
                        "name": "name",
                        "type": {
                            "kind": "NON_NULL",
                            "name": null,
                            "ofType": { "kind": "SCALAR", "name": "String" },
                        },
                    },
                    {
                        "name": "tags",
                        "type": {
                            "kind": "LIST",
                            "name": null,
                            "ofType": { "kind": "NON_NULL", "name": null },
                        },
                    },
                ],
            },
        }));
    }

    #[tokio::test]
    async fn unknown_type_is_null() {
        assert_eq!(data(r#"{ __type(name: "Nope") { name } }"#).await, json!({ "__type": null }));
    }

    #[tokio::test]
    async fn possible_types_of_an_interface() {
        let data = data(r#"{ __type(name: "Pet") { kind possibleTypes { name } } }"#).await;
        assert_eq!(data["__type"]["kind"], json!("INTERFACE"));
        let mut names: Vec<&str> = data["__type"]["possibleTypes"].as_array()
            .expect("possibleTypes list")
            .iter()
            .filter_map(|type_| type_["name"].as_str())
            .collect();
        names.sort();
        assert_eq!(names, vec!["Cat", "Dog"]);
    }

    #[tokio::test]
    async fn specified_by_url_of_a_custom_scalar() {
        let data = data(r#"{
            url: __type(name: "Url") { kind specifiedByURL }
            int: __type(name: "Int") { kind specifiedByURL }
        }"#).await;
        assert_eq!(data, json!({
            "url": { "kind": "SCALAR", "specifiedByURL": "https://example.com/url" },
            "int": { "kind": "SCALAR", "specifiedByURL": null },
        }));
    }
}

mod deprecation {
    use super::*;

    #[tokio::test]
    async fn deprecated_fields_are_hidden_by_default() {
        let data = data(r#"{
            __type(name: "Dog") {
                visible: fields { name }
                all: fields(includeDeprecated: true) { name isDeprecated deprecationReason }
            }
        }"#).await;
        assert_eq!(data["__type"]["visible"], json!([{ "name": "name" }, { "name": "tags" }]));
        assert_eq!(data["__type"]["all"], json!([
            { "name": "name", "isDeprecated": false, "deprecationReason": null },
            { "name": "tags", "isDeprecated": false, "deprecationReason": null },
            { "name": "old", "isDeprecated": true, "deprecationReason": "gone" },
        ]));
    }

    #[tokio::test]
    async fn deprecated_enum_values_are_hidden_by_default() {
        let data = data(r#"{
            __type(name: "Mood") {
                visible: enumValues { name }
                all: enumValues(includeDeprecated: true) { name deprecationReason }
            }
        }"#).await;
        assert_eq!(data["__type"]["visible"], json!([{ "name": "HAPPY" }]));
        assert_eq!(data["__type"]["all"], json!([
            { "name": "HAPPY", "deprecationReason": null },
            { "name": "SAD", "deprecationReason": "cheer up" },
        ]));
    }
}

mod schema {
    use super::*;

    #[tokio::test]
    async fn root_operation_types() {
        let data = data("{
            __schema {
                queryType { name }
                mutationType { name }
                subscriptionType { name }
            }
        }").await;
        assert_eq!(data, json!({
            "__schema": {
                "queryType": { "name": "Query" },
                "mutationType": null,
                "subscriptionType": null,
            },
        }));
    }

    #[tokio::test]
    async fn types_include_builtin_and_introspection_types() {
        let data = data("{ __schema { types { name } } }").await;
        let names: Vec<&str> = data["__schema"]["types"].as_array()
            .expect("types list")
            .iter()
            .filter_map(|type_| type_["name"].as_str())
            .collect();
        for expected in ["Dog", "Mood", "Query", "String", "Url", "__Schema", "__Type"] {
            assert!(names.contains(&expected), "missing `{expected}` in {names:?}");
        }
    }

    #[tokio::test]
    async fn argument_default_values_print_as_literals() {
        let data = data(r#"{
            __type(name: "Query") {
                fields { name args { name defaultValue type { name } } }
            }
        }"#).await;
        let search = data["__type"]["fields"].as_array()
            .expect("fields list")
            .iter()
            .find(|field| field["name"] == json!("search"))
            .expect("search field")
            .to_owned();
        assert_eq!(search["args"], json!([
            { "name": "limit", "defaultValue": "10", "type": { "name": "Int" } },
            { "name": "mood", "defaultValue": "HAPPY", "type": { "name": "Mood" } },
        ]));
    }

    #[tokio::test]
    async fn directives() {
        let data = data("{ __schema { directives { name isRepeatable locations } } }").await;
        let directives = data["__schema"]["directives"].as_array().expect("directives list");
        let find = |name: &str| directives.iter()
            .find(|directive| directive["name"] == json!(name))
            .unwrap_or_else(|| panic!("missing directive `@{name}`"))
            .to_owned();

        assert_eq!(find("tag"), json!({
            "name": "tag",
            "isRepeatable": true,
            "locations": ["FIELD_DEFINITION", "OBJECT"],
        }));
        assert_eq!(find("skip")["isRepeatable"], json!(false));
    }
}
