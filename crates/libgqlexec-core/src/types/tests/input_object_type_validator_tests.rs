use crate::schema::SchemaBuildError;
use crate::schema::TypeValidationError;
use crate::types::tests::test_utils;

fn circular_paths(errors: &[SchemaBuildError]) -> Vec<Vec<String>> {
    errors.iter().filter_map(|err| match err {
        SchemaBuildError::TypeValidation(
            TypeValidationError::CircularInputFieldChain { circular_field_path }
        ) => Some(circular_field_path.to_owned()),
        _ => None,
    }).collect()
}

#[test]
fn flat_input_object_validates() {
    test_utils::build_schema("
        type Query { a(in: In): Int }
        input In { x: Int, y: Int! }
    ").expect("valid schema");
}

#[test]
fn nullable_self_reference_validates() {
    test_utils::build_schema("
        type Query { a(in: In): Int }
        input In { next: In }
    ").expect("nullable self-reference breaks the cycle");
}

#[test]
fn list_self_reference_validates() {
    test_utils::build_schema("
        type Query { a(in: In): Int }
        input In { children: [In!]! }
    ").expect("list self-reference breaks the cycle");
}

#[test]
fn non_null_self_reference_is_rejected() {
    let errors = test_utils::build_schema("
        type Query { a(in: In): Int }
        input In { next: In! }
    ").expect_err("unbreakable cycle");

    assert_eq!(circular_paths(&errors).len(), 1);
}

#[test]
fn non_null_cycle_through_two_types_is_rejected() {
    let errors = test_utils::build_schema("
        type Query { a(in: A): Int }
        input A { b: B! }
        input B { a: A! }
    ").expect_err("unbreakable cycle");

    // Reported once from each participating type.
    assert_eq!(circular_paths(&errors).len(), 2);
}

#[test]
fn input_field_with_output_type_is_rejected() {
    let errors = test_utils::build_schema("
        type Query { a(in: In): Int }
        input In { q: Query }
    ").expect_err("output type in input field");

    assert!(errors.iter().any(|err| matches!(
        err,
        SchemaBuildError::TypeValidation(
            TypeValidationError::InvalidInputFieldWithOutputType { field_name, .. }
        ) if field_name == "q",
    )));
}
