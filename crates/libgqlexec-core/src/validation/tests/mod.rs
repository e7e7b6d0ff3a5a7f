mod value_validator_tests;

use crate::schema::Schema;
use crate::schema::SchemaBuilder;
use crate::validation::DocumentValidator;
use crate::validation::ValidatedDocument;
use crate::validation::ValidationError;

const TEST_SDL: &str = "
    directive @tag(name: String!) repeatable on FIELD

    interface Pet { name: String! }

    type Dog implements Pet {
        name: String!
        barks: Boolean
        nickname: String
        owner: Human
        doesKnowCommand(command: DogCommand!): Boolean!
    }

    type Cat implements Pet {
        name: String!
        meows: Boolean
        lives: Int
    }

    type Human {
        name: String!
        pets: [Pet!]
    }

    union CatOrDog = Cat | Dog

    enum DogCommand { SIT HEEL }

    input Filter { name: String!, limit: Int = 10 }

    type Query {
        dog: Dog
        pet: Pet
        catOrDog: CatOrDog
        human(id: ID!): Human
        search(filter: Filter, limit: Int = 5): [Pet!]!
        count: Int
    }

    type Subscription {
        newPet: Pet
        petCount: Int
    }
";

fn test_schema() -> Schema {
    SchemaBuilder::new()
        .load_str(None, TEST_SDL)
        .expect("parse")
        .build()
        .expect("valid schema")
}

fn validate(schema: &Schema, document: &str) -> Result<ValidatedDocument, Vec<ValidationError>> {
    DocumentValidator::from_str(schema, document)
        .expect("parse error")
        .validate()
}

/// Validates a document that is expected to fail and returns its errors.
fn validation_errors(document: &str) -> Vec<ValidationError> {
    let schema = test_schema();
    match validate(&schema, document) {
        Ok(_) => panic!("expected validation to fail for:\n{document}"),
        Err(errors) => errors,
    }
}

fn assert_valid(document: &str) {
    let schema = test_schema();
    if let Err(errors) = validate(&schema, document) {
        panic!("expected a valid document, found errors: {errors:#?}");
    }
}
