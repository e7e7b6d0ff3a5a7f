use crate::Value;
use crate::coercion::CoercionError;
use crate::coercion::InputValueCoercer;
use crate::coercion::ScalarCoercers;
use crate::coercion::coerce_value;
use crate::coercion::tests::parse_literal;
use crate::coercion::tests::test_schema;
use crate::schema::Schema;
use crate::schema::SchemaBuilder;
use crate::types::TypeRef;
use indexmap::IndexMap;
use proptest::prelude::*;
use std::sync::Arc;

fn object(entries: Vec<(&str, Value)>) -> Value {
    Value::Object(entries.into_iter().map(|(k, v)| (k.to_string(), v)).collect())
}

mod literals {
    use super::*;

    #[test]
    fn builtin_scalars() {
        let schema = test_schema();
        let coerce = |literal: &str, type_name: &str| coerce_value(
            schema.types(),
            &parse_literal(literal),
            &TypeRef::named(type_name),
            None,
            None,
        );

        assert_eq!(coerce("7", "Int"), Ok(Value::Int(7)));
        assert_eq!(coerce("7", "Float"), Ok(Value::Float(7.0)));
        assert_eq!(coerce("\"abc\"", "ID"), Ok(Value::String("abc".to_string())));
        assert_eq!(coerce("false", "Boolean"), Ok(Value::Boolean(false)));
        assert_eq!(coerce("GREEN", "Color"), Ok(Value::Enum("GREEN".to_string())));
        assert_eq!(coerce("null", "Int"), Ok(Value::Null));
        assert!(coerce("\"7\"", "Int").is_err());
    }

    #[test]
    fn single_value_wraps_into_list() {
        let schema = test_schema();
        let coerced = coerce_value(
            schema.types(),
            &parse_literal("4"),
            &TypeRef::list(TypeRef::named("Int")),
            None,
            None,
        );
        assert_eq!(coerced, Ok(Value::List(vec![Value::Int(4)])));
    }

    #[test]
    fn input_object_defaults_are_applied() {
        let schema = test_schema();
        let coerced = coerce_value(
            schema.types(),
            &parse_literal("{ points: { x: 1 } }"),
            &TypeRef::named("Shape"),
            None,
            None,
        );
        assert_eq!(coerced, Ok(object(vec![
            ("points", Value::List(vec![object(vec![
                ("x", Value::Int(1)),
                ("y", Value::Int(0)),
            ])])),
            ("color", Value::Enum("RED".to_string())),
        ])));
    }

    #[test]
    fn failures_null_only_the_offending_element() {
        let schema = test_schema();
        let mut coercer = InputValueCoercer::new(schema.types())
            .with_path_root("v");
        let coerced = coercer.coerce_literal(
            &parse_literal("[1, \"two\", 3, 9999999999]"),
            &TypeRef::list(TypeRef::named("Int")),
        );
        assert_eq!(coerced, Value::List(vec![
            Value::Int(1),
            Value::Null,
            Value::Int(3),
            Value::Null,
        ]));

        let errors = coercer.into_errors();
        assert_eq!(errors.len(), 2);
        assert!(matches!(
            &errors[0],
            CoercionError::InvalidValue { path, .. } if path == "v[1]",
        ));
        assert!(matches!(
            &errors[1],
            CoercionError::IntOutOfRange { path, .. } if path == "v[3]",
        ));
    }

    #[test]
    fn nested_error_paths() {
        let schema = test_schema();
        let errors = coerce_value(
            schema.types(),
            &parse_literal("{ points: [{ x: 1 }, { y: 2 }], color: PINK }"),
            &TypeRef::named("Shape"),
            None,
            None,
        ).unwrap_err();

        assert_eq!(errors.len(), 2);
        assert!(errors.iter().any(|err| matches!(
            err,
            CoercionError::MissingRequiredInputField { field_name, path, .. }
                if field_name == "x" && path == "points[1]",
        )));
        assert!(errors.iter().any(|err| matches!(
            err,
            CoercionError::UnknownEnumValue { path, .. } if path == "color",
        )));
    }
}

mod variables {
    use super::*;

    fn schema_with_args() -> Schema {
        SchemaBuilder::new()
            .load_str(
                None,
                "type Query { f(a: Int!, b: String = \"dflt\", c: Int = 9, d: Int): Int }",
            )
            .unwrap()
            .build()
            .unwrap()
    }

    #[test]
    fn variables_resolve_against_bound_values() {
        let schema = test_schema();
        let variables = IndexMap::from([("n".to_string(), Value::Int(5))]);
        let coerced = coerce_value(
            schema.types(),
            &parse_literal("{ x: $n, y: $missing }"),
            &TypeRef::named("Point"),
            Some(&variables),
            None,
        );
        // An unbound variable in an input field behaves as if the field
        // were omitted, so its default applies.
        assert_eq!(coerced, Ok(object(vec![
            ("x", Value::Int(5)),
            ("y", Value::Int(0)),
        ])));
    }

    #[test]
    fn unbound_variable_in_list_is_null() {
        let schema = test_schema();
        let variables = IndexMap::new();
        let coerced = coerce_value(
            schema.types(),
            &parse_literal("[1, $missing]"),
            &TypeRef::list(TypeRef::named("Int")),
            Some(&variables),
            None,
        );
        assert_eq!(coerced, Ok(Value::List(vec![Value::Int(1), Value::Null])));
    }

    #[test]
    fn arguments_use_parameter_defaults() {
        let schema = schema_with_args();
        let field = schema.query_type().field("f").unwrap();
        let variables = IndexMap::from([("a".to_string(), Value::Int(2))]);
        let mut coercer = InputValueCoercer::new(schema.types())
            .with_variable_values(&variables);
        let arguments = vec![
            ("a".to_string(), parse_literal("$a")),
            ("c".to_string(), parse_literal("$unset")),
        ];
        let coerced = coercer.coerce_arguments(field.parameters(), &arguments);
        assert!(coercer.errors().is_empty());
        assert_eq!(coerced, IndexMap::from([
            ("a".to_string(), Value::Int(2)),
            ("b".to_string(), Value::String("dflt".to_string())),
            ("c".to_string(), Value::Int(9)),
        ]));
    }

    #[test]
    fn missing_required_argument() {
        let schema = schema_with_args();
        let field = schema.query_type().field("f").unwrap();
        let mut coercer = InputValueCoercer::new(schema.types());
        let coerced = coercer.coerce_arguments(field.parameters(), &[]);
        assert_eq!(coerced.get("a"), Some(&Value::Null));
        assert!(matches!(
            coercer.errors(),
            [CoercionError::NullForNonNullType { path, .. }] if path == "a",
        ));
    }

}

mod custom_scalars {
    use super::*;

    fn date_coercers() -> ScalarCoercers {
        let mut coercers = ScalarCoercers::new();
        coercers.insert("Date".to_string(), Arc::new(|value: &Value| match value {
            Value::String(s) if s.len() == 10 => Some(Value::String(s.to_string())),
            _ => None,
        }));
        coercers
    }

    #[test]
    fn pass_through_without_coercer() {
        let schema = test_schema();
        let coerced = coerce_value(
            schema.types(),
            &parse_literal("{ any: [1] }"),
            &TypeRef::named("Date"),
            None,
            None,
        );
        assert_eq!(coerced, Ok(object(vec![("any", Value::List(vec![Value::Int(1)]))])));
    }

    #[test]
    fn registered_coercer_accepts_and_rejects() {
        let schema = test_schema();
        let coercers = date_coercers();
        let date = TypeRef::named("Date");

        assert_eq!(
            coerce_value(schema.types(), &parse_literal("\"2024-01-01\""), &date, None, Some(&coercers)),
            Ok(Value::String("2024-01-01".to_string())),
        );
        assert!(matches!(
            coerce_value(schema.types(), &parse_literal("3"), &date, None, Some(&coercers))
                .unwrap_err()
                .as_slice(),
            [CoercionError::CustomScalarRejected { scalar_name, .. }] if scalar_name == "Date",
        ));
    }
}

mod runtime_values {
    use super::*;

    #[test]
    fn enums_accept_strings() {
        let schema = test_schema();
        let mut coercer = InputValueCoercer::new(schema.types());
        let coerced = coercer.coerce_runtime_value(
            &Value::String("BLUE".to_string()),
            &TypeRef::named("Color"),
        );
        assert_eq!(coerced, Value::Enum("BLUE".to_string()));
        assert!(coercer.errors().is_empty());
    }

    #[test]
    fn ids_accept_ints() {
        let schema = test_schema();
        let mut coercer = InputValueCoercer::new(schema.types());
        let coerced = coercer.coerce_runtime_value(&Value::Int(42), &TypeRef::named("ID"));
        assert_eq!(coerced, Value::String("42".to_string()));
    }

    #[test]
    fn json_input_object() {
        let schema = test_schema();
        let json: Value = serde_json::json!({"x": 1, "label": "p"}).into();
        let mut coercer = InputValueCoercer::new(schema.types());
        let coerced = coercer.coerce_runtime_value(&json, &TypeRef::named("Point"));
        assert_eq!(coerced, object(vec![
            ("x", Value::Int(1)),
            ("y", Value::Int(0)),
            ("label", Value::String("p".to_string())),
        ]));
    }
}

proptest! {
    #[test]
    fn coercing_a_coerced_int_is_idempotent(i in any::<i32>()) {
        let schema = test_schema();
        let int = TypeRef::named("Int");
        let mut coercer = InputValueCoercer::new(schema.types());
        let once = coercer.coerce_literal(&parse_literal(i.to_string().as_str()), &int);
        let twice = coercer.coerce_runtime_value(&once, &int);
        prop_assert!(coercer.errors().is_empty());
        prop_assert_eq!(once.clone(), Value::Int(i.into()));
        prop_assert_eq!(twice, once);
    }
}
