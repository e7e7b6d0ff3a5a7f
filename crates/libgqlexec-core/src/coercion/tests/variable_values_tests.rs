use crate::Value;
use crate::coercion::CoercionError;
use crate::coercion::coerce_variable_values;
use crate::coercion::tests::parse_variable_defs;
use crate::coercion::tests::test_schema;
use indexmap::IndexMap;

fn inputs(json: serde_json::Value) -> IndexMap<String, Value> {
    match Value::from(json) {
        Value::Object(fields) => fields,
        other => panic!("expected an object, found {other}"),
    }
}

#[test]
fn provided_values_are_coerced() {
    let schema = test_schema();
    let defs = parse_variable_defs("$n: Int, $c: Color!, $ids: [ID!]");
    let coerced = coerce_variable_values(
        schema.types(),
        &defs,
        &inputs(serde_json::json!({"n": 4, "c": "GREEN", "ids": 7})),
        None,
    ).unwrap();

    assert_eq!(coerced.get("n"), Some(&Value::Int(4)));
    assert_eq!(coerced.get("c"), Some(&Value::Enum("GREEN".to_string())));
    assert_eq!(coerced.get("ids"), Some(&Value::List(vec![Value::String("7".to_string())])));
}

#[test]
fn defaults_and_absence() {
    let schema = test_schema();
    let defs = parse_variable_defs("$withDefault: Int = 10, $absent: String, $nullable: Int");
    let coerced = coerce_variable_values(
        schema.types(),
        &defs,
        &inputs(serde_json::json!({"nullable": null})),
        None,
    ).unwrap();

    assert_eq!(coerced.get("withDefault"), Some(&Value::Int(10)));
    assert!(!coerced.contains_key("absent"));
    // An explicit null is distinct from an absent value.
    assert_eq!(coerced.get("nullable"), Some(&Value::Null));
}

#[test]
fn missing_required_variable() {
    let schema = test_schema();
    let defs = parse_variable_defs("$p: Point!");
    let errors = coerce_variable_values(schema.types(), &defs, &IndexMap::new(), None)
        .unwrap_err();
    assert!(matches!(
        errors.as_slice(),
        [CoercionError::MissingRequiredVariable { variable_name, .. }] if variable_name == "p",
    ));
}

#[test]
fn errors_name_the_variable() {
    let schema = test_schema();
    let defs = parse_variable_defs("$p: Point!, $q: Int!");
    let errors = coerce_variable_values(
        schema.types(),
        &defs,
        &inputs(serde_json::json!({"p": {"y": "no"}, "q": null})),
        None,
    ).unwrap_err();

    assert_eq!(errors.len(), 3);
    assert!(errors.iter().any(|err| matches!(
        err,
        CoercionError::MissingRequiredInputField { path, .. } if path == "$p",
    )));
    assert!(errors.iter().any(|err| matches!(
        err,
        CoercionError::InvalidValue { path, .. } if path == "$p.y",
    )));
    assert!(errors.iter().any(|err| matches!(
        err,
        CoercionError::NullForNonNullType { path, .. } if path == "$q",
    )));
}

#[test]
fn output_types_are_rejected() {
    let schema = test_schema();
    let defs = parse_variable_defs("$q: Query");
    let errors = coerce_variable_values(schema.types(), &defs, &IndexMap::new(), None)
        .unwrap_err();
    assert!(matches!(
        errors.as_slice(),
        [CoercionError::NotAnInputType { type_name }] if type_name == "Query",
    ));
}
