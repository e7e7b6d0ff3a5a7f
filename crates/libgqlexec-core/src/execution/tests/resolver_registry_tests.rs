use crate::Value;
use crate::execution::Engine;
use crate::execution::RegistrationError;
use crate::execution::ResolverRegistry;
use crate::execution::tests::build_schema;
use crate::execution::tests::execute;
use crate::subscription::SourceStream;
use serde_json::json;

const SDL: &str = "
    scalar Date
    interface Node { id: ID! }
    type Item implements Node { id: ID! label: String }
    type Query { item: Item node: Node today: Date }
    type Subscription { itemAdded: Item }
";

mod field_resolvers {
    use super::*;

    #[test]
    fn undefined_type() {
        let schema = build_schema(SDL);
        let err = ResolverRegistry::builder(&schema)
            .add_field_resolver("Nope", "id", |_, _| Ok(Value::Null))
            .err();
        assert_eq!(err, Some(RegistrationError::UndefinedType {
            type_name: "Nope".to_string(),
        }));
    }

    #[test]
    fn non_object_type() {
        let schema = build_schema(SDL);
        let err = ResolverRegistry::builder(&schema)
            .add_field_resolver("Node", "id", |_, _| Ok(Value::Null))
            .err();
        assert_eq!(err, Some(RegistrationError::NotAnObjectType {
            type_name: "Node".to_string(),
        }));
    }

    #[test]
    fn undefined_field() {
        let schema = build_schema(SDL);
        let err = ResolverRegistry::builder(&schema)
            .add_field_resolver("Item", "price", |_, _| Ok(Value::Null))
            .err();
        assert_eq!(err, Some(RegistrationError::UndefinedField {
            field_name: "price".to_string(),
            type_name: "Item".to_string(),
        }));
    }

    #[test]
    fn duplicate_registration() {
        let schema = build_schema(SDL);
        let err = ResolverRegistry::builder(&schema)
            .add_field_resolver("Item", "label", |_, _| Ok(Value::Null))
            .expect("first registration")
            .add_field_resolver("Item", "label", |_, _| Ok(Value::Null))
            .err();
        assert_eq!(err, Some(RegistrationError::DuplicateFieldResolver {
            field_name: "label".to_string(),
            type_name: "Item".to_string(),
        }));
    }

    #[test]
    fn introspection_fields_are_reserved() {
        let schema = build_schema(SDL);
        let err = ResolverRegistry::builder(&schema)
            .add_field_resolver("Query", "__schema", |_, _| Ok(Value::Null))
            .err();
        assert_eq!(err, Some(RegistrationError::IntrospectionField {
            field_name: "__schema".to_string(),
            type_name: "Query".to_string(),
        }));
    }

    #[tokio::test]
    async fn property_resolvers_fill_in_unregistered_fields() {
        let schema = build_schema(SDL);
        let resolvers = ResolverRegistry::builder(&schema)
            .add_field_resolver("Item", "label", |parent, _| {
                let id = parent.get("id").and_then(Value::as_str).unwrap_or("?");
                Ok(Value::String(format!("item #{id}")))
            })
            .expect("register label")
            .add_property_resolvers()
            .build();
        assert!(resolvers.field_resolver("Item", "id").is_some());
        assert!(resolvers.field_resolver("Query", "__typename").is_none());
        assert!(resolvers.field_resolver("Subscription", "itemAdded").is_none());

        let engine = Engine::new(schema, resolvers)
            .with_root_value(json!({ "item": { "id": "4", "label": "ignored" } }));
        let response = execute(&engine, "{ item { id label } }").await;
        assert_eq!(response.to_json(), json!({
            "data": { "item": { "id": "4", "label": "item #4" } },
        }));
    }
}

mod stream_resolvers {
    use super::*;

    #[test]
    fn requires_a_subscription_type() {
        let schema = build_schema("type Query { a: Int }");
        let err = ResolverRegistry::builder(&schema)
            .add_stream_resolver("a", |_, _| Ok(SourceStream::new("a")))
            .err();
        assert_eq!(err, Some(RegistrationError::NoSubscriptionType));
    }

    #[test]
    fn undefined_and_duplicate_fields() {
        let schema = build_schema(SDL);
        let err = ResolverRegistry::builder(&schema)
            .add_stream_resolver("itemRemoved", |_, _| Ok(SourceStream::new("items")))
            .err();
        assert_eq!(err, Some(RegistrationError::UndefinedField {
            field_name: "itemRemoved".to_string(),
            type_name: "Subscription".to_string(),
        }));

        let err = ResolverRegistry::builder(&schema)
            .add_stream_resolver("itemAdded", |_, _| Ok(SourceStream::new("items")))
            .expect("first registration")
            .add_stream_resolver("itemAdded", |_, _| Ok(SourceStream::new("items")))
            .err();
        assert_eq!(err, Some(RegistrationError::DuplicateStreamResolver {
            field_name: "itemAdded".to_string(),
        }));
    }
}

mod scalar_coercers {
    use super::*;

    #[test]
    fn only_custom_scalars_accept_coercers() {
        let schema = build_schema(SDL);
        let err = ResolverRegistry::builder(&schema)
            .add_scalar_coercer("Int", |value: &Value| Some(value.to_owned()))
            .err();
        assert_eq!(err, Some(RegistrationError::NotACustomScalar {
            scalar_name: "Int".to_string(),
        }));

        let err = ResolverRegistry::builder(&schema)
            .add_scalar_coercer("Date", |value: &Value| Some(value.to_owned()))
            .expect("first registration")
            .add_scalar_coercer("Date", |value: &Value| Some(value.to_owned()))
            .err();
        assert_eq!(err, Some(RegistrationError::DuplicateScalarCoercer {
            scalar_name: "Date".to_string(),
        }));
    }

    #[tokio::test]
    async fn rejected_result_nulls_the_field() {
        let schema = build_schema(SDL);
        let resolvers = ResolverRegistry::builder(&schema)
            .add_scalar_coercer("Date", |value: &Value| {
                value.as_str().filter(|s| s.len() == 10).map(Value::from)
            })
            .expect("register coercer")
            .add_property_resolvers()
            .build();
        let engine = Engine::new(schema, resolvers)
            .with_root_value(json!({ "today": "yesterday" }));

        let response = execute(&engine, "{ today }").await;
        assert_eq!(response.data, Some(Value::from(json!({ "today": null }))));
        assert_eq!(response.errors.len(), 1);
    }
}
