use crate::coercion::CoercionError;
use crate::coercion::is_const_input_value_coercible_to_type;
use crate::coercion::is_variable_usage_allowed;
use crate::coercion::tests::parse_literal;
use crate::coercion::tests::parse_variable_defs;
use crate::coercion::tests::test_schema;
use crate::types::TypeRef;

fn int() -> TypeRef {
    TypeRef::named("Int")
}

fn non_null(inner: TypeRef) -> TypeRef {
    TypeRef::non_null(inner)
}

mod constants {
    use super::*;

    #[test]
    fn builtin_scalars() {
        let schema = test_schema();
        let check = |literal: &str, type_ref: TypeRef| is_const_input_value_coercible_to_type(
            schema.types(),
            &parse_literal(literal),
            None,
            &type_ref,
            None,
        );

        assert!(check("1", int()).is_ok());
        assert!(check("1", TypeRef::named("Float")).is_ok());
        assert!(check("1.5", TypeRef::named("Float")).is_ok());
        assert!(check("\"s\"", TypeRef::named("String")).is_ok());
        assert!(check("\"s\"", TypeRef::named("ID")).is_ok());
        assert!(check("true", TypeRef::named("Boolean")).is_ok());
        assert!(check("null", int()).is_ok());

        assert!(check("1.5", int()).is_err());
        assert!(check("\"1\"", int()).is_err());
        assert!(check("null", non_null(int())).is_err());
    }

    #[test]
    fn int_out_of_range() {
        let schema = test_schema();
        let result = is_const_input_value_coercible_to_type(
            schema.types(),
            &parse_literal("3000000000"),
            None,
            &int(),
            None,
        );
        assert!(matches!(
            result.unwrap_err().as_slice(),
            [CoercionError::IntOutOfRange { .. }],
        ));
    }

    #[test]
    fn enums_and_custom_scalars() {
        let schema = test_schema();
        let color = TypeRef::named("Color");
        assert!(is_const_input_value_coercible_to_type(
            schema.types(), &parse_literal("RED"), None, &color, None,
        ).is_ok());
        assert!(matches!(
            is_const_input_value_coercible_to_type(
                schema.types(), &parse_literal("PINK"), None, &color, None,
            ).unwrap_err().as_slice(),
            [CoercionError::UnknownEnumValue { value, .. }] if value == "PINK",
        ));
        assert!(is_const_input_value_coercible_to_type(
            schema.types(), &parse_literal("\"RED\""), None, &color, None,
        ).is_err());

        // Custom scalars accept any literal statically.
        assert!(is_const_input_value_coercible_to_type(
            schema.types(), &parse_literal("{ y: 1 }"), None, &TypeRef::named("Date"), None,
        ).is_ok());
    }

    #[test]
    fn lists_accept_single_items() {
        let schema = test_schema();
        let list = TypeRef::list(non_null(int()));
        assert!(is_const_input_value_coercible_to_type(
            schema.types(), &parse_literal("[1, 2]"), None, &list, None,
        ).is_ok());
        assert!(is_const_input_value_coercible_to_type(
            schema.types(), &parse_literal("1"), None, &list, None,
        ).is_ok());
        let errors = is_const_input_value_coercible_to_type(
            schema.types(), &parse_literal("[1, null, \"x\"]"), None, &list, None,
        ).unwrap_err();
        assert_eq!(errors.len(), 2);
    }

    #[test]
    fn input_objects() {
        let schema = test_schema();
        let point = TypeRef::named("Point");
        assert!(is_const_input_value_coercible_to_type(
            schema.types(), &parse_literal("{ x: 1 }"), None, &point, None,
        ).is_ok());

        let errors = is_const_input_value_coercible_to_type(
            schema.types(), &parse_literal("{ y: 1, z: 2 }"), None, &point, None,
        ).unwrap_err();
        assert!(errors.iter().any(|err| matches!(
            err,
            CoercionError::MissingRequiredInputField { field_name, .. } if field_name == "x",
        )));
        assert!(errors.iter().any(|err| matches!(
            err,
            CoercionError::UnknownInputField { field_name, .. } if field_name == "z",
        )));
    }
}

mod variables {
    use super::*;

    #[test]
    fn unchecked_without_definitions() {
        let schema = test_schema();
        assert!(is_const_input_value_coercible_to_type(
            schema.types(), &parse_literal("$anything"), None, &non_null(int()), None,
        ).is_ok());
    }

    #[test]
    fn undefined_variable() {
        let schema = test_schema();
        let defs = parse_variable_defs("$a: Int");
        assert!(matches!(
            is_const_input_value_coercible_to_type(
                schema.types(), &parse_literal("$b"), None, &int(), Some(defs.as_slice()),
            ).unwrap_err().as_slice(),
            [CoercionError::UndefinedVariable { variable_name }] if variable_name == "b",
        ));
    }

    #[test]
    fn nullable_variable_in_non_null_position() {
        let schema = test_schema();
        let defs = parse_variable_defs("$a: Int, $b: Int = 3, $c: Int!");
        let check = |var: &str| is_const_input_value_coercible_to_type(
            schema.types(), &parse_literal(var), None, &non_null(int()), Some(defs.as_slice()),
        );
        assert!(matches!(
            check("$a").unwrap_err().as_slice(),
            [CoercionError::VariableTypeMismatch { .. }],
        ));
        assert!(check("$b").is_ok());
        assert!(check("$c").is_ok());
    }

    #[test]
    fn location_default_allows_nullable_variable() {
        assert!(is_variable_usage_allowed(
            &int(),
            None,
            &non_null(int()),
            Some(&parse_literal("1")),
        ));
        assert!(!is_variable_usage_allowed(&int(), None, &non_null(int()), None));
    }

    #[test]
    fn null_variable_default_does_not_count() {
        assert!(!is_variable_usage_allowed(
            &int(),
            Some(&parse_literal("null")),
            &non_null(int()),
            None,
        ));
    }

    #[test]
    fn structural_compatibility() {
        let list_of_int = TypeRef::list(int());
        assert!(is_variable_usage_allowed(&non_null(int()), None, &int(), None));
        assert!(is_variable_usage_allowed(&list_of_int, None, &list_of_int, None));
        assert!(!is_variable_usage_allowed(&list_of_int, None, &int(), None));
        assert!(!is_variable_usage_allowed(&TypeRef::named("String"), None, &int(), None));
    }

    #[test]
    fn variable_nested_in_list_and_object() {
        let schema = test_schema();
        let defs = parse_variable_defs("$x: Int!, $s: String");
        assert!(is_const_input_value_coercible_to_type(
            schema.types(),
            &parse_literal("{ x: $x, label: $s }"),
            None,
            &TypeRef::named("Point"),
            Some(defs.as_slice()),
        ).is_ok());
        assert!(is_const_input_value_coercible_to_type(
            schema.types(),
            &parse_literal("{ x: $s }"),
            None,
            &TypeRef::named("Point"),
            Some(defs.as_slice()),
        ).is_err());
    }
}
