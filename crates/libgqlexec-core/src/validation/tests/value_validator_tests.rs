use crate::validation::ValidationError;
use crate::validation::tests::assert_valid;
use crate::validation::tests::validation_errors;

mod definitions {
    use super::*;

    #[test]
    fn variables_must_be_input_types() {
        let errors = validation_errors("query Q($d: Dog, $n: Nope) { dog { name } }");
        assert!(errors.iter().any(|err| matches!(
            err,
            ValidationError::NonInputVariableType { variable_name, .. } if variable_name == "d",
        )));
        assert!(errors.iter().any(|err| matches!(
            err,
            ValidationError::UndefinedVariableType { type_name, .. } if type_name == "Nope",
        )));
    }

    #[test]
    fn duplicate_variables() {
        let errors = validation_errors("query Q($id: ID!, $id: ID!) { human(id: $id) { name } }");
        assert!(matches!(
            errors.as_slice(),
            [ValidationError::DuplicateVariable { variable_name, locations, .. }]
                if variable_name == "id" && locations.len() == 2,
        ));
    }

    #[test]
    fn invalid_default_value() {
        let errors = validation_errors("query Q($limit: Int = \"ten\") { search(limit: $limit) { name } }");
        assert!(matches!(
            errors.as_slice(),
            [ValidationError::InvalidVariableDefault { variable_name, .. }]
                if variable_name == "limit",
        ));
    }
}

mod usages {
    use super::*;

    #[test]
    fn used_through_fragments_and_nested_values() {
        assert_valid("
            query Q($id: ID!, $name: String!, $c: DogCommand = SIT) {
                human(id: $id) { ...H }
                search(filter: { name: $name }) { name }
            }
            fragment H on Human { pets { ... on Dog { doesKnowCommand(command: $c) } } }
        ");
    }

    #[test]
    fn unused_variable() {
        let errors = validation_errors("query Q($unused: Int) { count }");
        assert!(matches!(
            errors.as_slice(),
            [ValidationError::UnusedVariable { variable_name, operation_name: Some(op_name), .. }]
                if variable_name == "unused" && op_name == "Q",
        ));
    }

    #[test]
    fn undefined_variable_through_fragment() {
        let errors = validation_errors("
            query A($id: ID!) { ...F }
            query B { ...F }
            fragment F on Query { human(id: $id) { name } }
        ");
        assert!(matches!(
            errors.as_slice(),
            [ValidationError::UndefinedVariable { variable_name, operation_name: Some(op_name), .. }]
                if variable_name == "id" && op_name == "B",
        ));
    }

    #[test]
    fn nullable_variable_in_non_null_position() {
        let errors = validation_errors("query Q($id: ID) { human(id: $id) { name } }");
        assert!(matches!(
            errors.as_slice(),
            [ValidationError::VariableTypeMismatch { variable_name, .. }] if variable_name == "id",
        ));
    }

    #[test]
    fn default_satisfies_non_null_position() {
        assert_valid("query Q($c: DogCommand = HEEL) { dog { doesKnowCommand(command: $c) } }");
        assert_valid("query Q($limit: Int) { search(limit: $limit) { name } }");
    }

    #[test]
    fn incompatible_named_types() {
        let errors = validation_errors("query Q($id: String!) { human(id: $id) { name } }");
        assert!(matches!(
            errors.as_slice(),
            [ValidationError::VariableTypeMismatch { variable_type, expected_type, .. }]
                if variable_type.to_string() == "String!" && expected_type.to_string() == "ID!",
        ));
    }
}
