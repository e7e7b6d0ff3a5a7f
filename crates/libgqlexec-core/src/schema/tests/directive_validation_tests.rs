use crate::schema::Schema;
use crate::schema::SchemaBuildError;
use crate::schema::SchemaBuilder;
use crate::schema::TypeValidationError;
use crate::types::DirectiveLocation;

fn build(sdl: &str) -> Result<Schema, Vec<SchemaBuildError>> {
    SchemaBuilder::new()
        .load_str(None, sdl)
        .map_err(|err| vec![err])?
        .build()
}

fn type_validation_errors(errors: Vec<SchemaBuildError>) -> Vec<TypeValidationError> {
    errors.into_iter().filter_map(|err| match err {
        SchemaBuildError::TypeValidation(err) => Some(err),
        _ => None,
    }).collect()
}

mod annotations {
    use super::*;

    #[test]
    fn custom_directive_definition_is_registered() {
        let schema = build("
            directive @tag(name: String!) repeatable on FIELD_DEFINITION | OBJECT
            type Query @tag(name: \"root\") {
              a: Int @tag(name: \"x\") @tag(name: \"y\")
            }
        ").unwrap();

        let tag = schema.directive("tag").unwrap();
        assert!(tag.is_repeatable());
        assert!(!tag.is_builtin());
        assert_eq!(
            tag.locations(),
            &[DirectiveLocation::FieldDefinition, DirectiveLocation::Object],
        );
        assert!(schema.directive("skip").unwrap().is_builtin());
    }

    #[test]
    fn undefined_directive() {
        let errors = build("type Query { a: Int @nope }").unwrap_err();
        assert!(matches!(
            type_validation_errors(errors).as_slice(),
            [TypeValidationError::UndefinedDirective { directive_name, .. }]
                if directive_name == "nope",
        ));
    }

    #[test]
    fn directive_at_illegal_location() {
        let errors = build("
            directive @onlyFields on FIELD_DEFINITION
            type Query @onlyFields { a: Int }
        ").unwrap_err();
        assert!(matches!(
            type_validation_errors(errors).as_slice(),
            [TypeValidationError::DirectiveNotAllowedAtLocation {
                directive_location: DirectiveLocation::Object,
                ..
            }],
        ));
    }

    #[test]
    fn non_repeatable_directive_repeated() {
        let errors = build("
            type Query { a: Int @deprecated @deprecated }
        ").unwrap_err();
        assert!(matches!(
            type_validation_errors(errors).as_slice(),
            [TypeValidationError::DuplicateNonRepeatableDirective { directive_name, .. }]
                if directive_name == "deprecated",
        ));
    }

    #[test]
    fn unknown_and_missing_arguments() {
        let errors = build("
            scalar Url @specifiedBy(link: \"https://example.com\")
            type Query { u: Url }
        ").unwrap_err();
        let errors = type_validation_errors(errors);
        assert_eq!(errors.len(), 2);
        assert!(errors.iter().any(|err| matches!(
            err,
            TypeValidationError::UnknownDirectiveArgument { argument_name, .. }
                if argument_name == "link",
        )));
        assert!(errors.iter().any(|err| matches!(
            err,
            TypeValidationError::MissingRequiredDirectiveArgument { argument_name, .. }
                if argument_name == "url",
        )));
    }

    #[test]
    fn invalid_argument_value() {
        let errors = build("
            type Query { a: Int @deprecated(reason: 5) }
        ").unwrap_err();
        assert!(matches!(
            type_validation_errors(errors).as_slice(),
            [TypeValidationError::InvalidDirectiveArgumentValue { argument_name, .. }]
                if argument_name == "reason",
        ));
    }
}

mod cycles {
    use super::*;

    #[test]
    fn directive_referencing_itself_on_a_parameter() {
        let errors = build("
            directive @loop(x: Int @loop) on ARGUMENT_DEFINITION
            type Query { a: Int }
        ").unwrap_err();
        assert!(type_validation_errors(errors).iter().any(|err| matches!(
            err,
            TypeValidationError::CircularDirectiveReference { directive_name, directive_path, .. }
                if directive_name == "loop" && directive_path == &["loop", "loop"],
        )));
    }

    #[test]
    fn directive_referencing_itself_through_an_input_type() {
        let errors = build("
            directive @a(x: In) on INPUT_FIELD_DEFINITION | FIELD_DEFINITION
            input In { y: Int @a }
            type Query { f: Int }
        ").unwrap_err();
        assert!(type_validation_errors(errors).iter().any(|err| matches!(
            err,
            TypeValidationError::CircularDirectiveReference { directive_name, .. }
                if directive_name == "a",
        )));
    }

    #[test]
    fn mutual_directive_reference() {
        let errors = build("
            directive @a(x: Int @b) on ARGUMENT_DEFINITION
            directive @b(x: Int @a) on ARGUMENT_DEFINITION
            type Query { f: Int }
        ").unwrap_err();
        let cycle_count = type_validation_errors(errors).iter()
            .filter(|err| matches!(err, TypeValidationError::CircularDirectiveReference { .. }))
            .count();
        assert_eq!(cycle_count, 2);
    }
}

mod default_values {
    use super::*;

    #[test]
    fn valid_defaults() {
        build("
            enum Color { RED GREEN }
            input In { c: Color = RED, n: [Int] = 1 }
            type Query { a(x: Int = 3, y: In = { c: GREEN }, z: Float = 1): Int }
        ").unwrap();
    }

    #[test]
    fn invalid_defaults() {
        let errors = build("
            enum Color { RED }
            type Query { a(x: Int = \"three\", c: Color = BLUE): Int }
        ").unwrap_err();
        let errors = type_validation_errors(errors);
        assert_eq!(errors.len(), 2);
        assert!(errors.iter().all(|err| matches!(
            err,
            TypeValidationError::InvalidDefaultValue { .. },
        )));
    }
}
