use crate::Engine;
use crate::execution::ResolverRegistry;
use crate::tests::build_schema;
use crate::validation::DocumentValidator;
use crate::validation::ValidationError;
use indexmap::IndexMap;

const SDL: &str = "
    type Query { dog: Dog count: Int }
    type Dog { name: String barkVolume: Int owner: Dog }
";

fn validation_errors(document: &str) -> Vec<ValidationError> {
    let schema = build_schema(SDL);
    match DocumentValidator::from_str(&schema, document).expect("parse").validate() {
        Ok(_) => panic!("expected validation to fail for:\n{document}"),
        Err(errors) => errors,
    }
}

mod fragment_cycles {
    use super::*;

    #[test]
    fn direct_self_spread() {
        let errors = validation_errors("
            { dog { ...A } }
            fragment A on Dog { name owner { ...A } }
        ");
        assert!(errors.iter().any(|err| matches!(err, ValidationError::FragmentCycle { .. })));
    }

    #[test]
    fn cycle_through_two_fragments() {
        let errors = validation_errors("
            { dog { ...A } }
            fragment A on Dog { name ...B }
            fragment B on Dog { barkVolume ...A }
        ");
        let cycles: Vec<&ValidationError> = errors.iter()
            .filter(|err| matches!(err, ValidationError::FragmentCycle { .. }))
            .collect();
        assert_eq!(cycles.len(), 1);
    }

    #[tokio::test]
    async fn cyclic_documents_never_execute() {
        let schema = build_schema(SDL);
        let resolvers = ResolverRegistry::builder(&schema).add_property_resolvers().build();
        let engine = Engine::new(schema, resolvers);
        let response = engine.execute_str(
            "{ dog { ...A } } fragment A on Dog { ...B } fragment B on Dog { ...A }",
            None,
            &IndexMap::new(),
        ).await;
        assert_eq!(response.data, None);
        assert!(!response.errors.is_empty());
    }
}

#[test]
fn same_alias_with_int_and_string_fields_conflicts() {
    let errors = validation_errors("{ dog { value: name value: barkVolume } }");
    assert!(errors.iter().any(|err| matches!(
        err,
        ValidationError::FieldsConflict { response_key, .. } if response_key == "value",
    )));
}
