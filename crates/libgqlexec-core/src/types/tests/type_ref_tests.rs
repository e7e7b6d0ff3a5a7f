use crate::ast;
use crate::types::TypeRef;
use crate::types::tests::test_utils;

fn parse_var_type(type_str: &str) -> TypeRef {
    let doc = ast::query::parse(format!("query($v: {type_str}) {{ a }}").as_str())
        .expect("parse error");
    let graphql_parser::query::Definition::Operation(
        graphql_parser::query::OperationDefinition::Query(query)
    ) = &doc.definitions[0] else {
        panic!("expected a query definition");
    };
    TypeRef::from_ast(&query.variable_definitions[0].var_type)
}

mod from_ast {
    use super::*;

    #[test]
    fn nested_wrappers() {
        assert_eq!(
            parse_var_type("[[Int!]]!"),
            TypeRef::non_null(TypeRef::list(TypeRef::list(
                TypeRef::non_null(TypeRef::named("Int")),
            ))),
        );
    }

    #[test]
    fn display_matches_source() {
        for type_str in ["Int", "Int!", "[Int]", "[Int!]!", "[[String]!]"] {
            assert_eq!(parse_var_type(type_str).to_string(), type_str);
        }
    }

    #[test]
    fn innermost_name_and_nullability() {
        let type_ref = parse_var_type("[Foo!]!");
        assert_eq!(type_ref.innermost_name(), "Foo");
        assert!(type_ref.is_non_null());
        assert!(type_ref.is_list());
        assert_eq!(
            type_ref.list_item_type(),
            Some(&TypeRef::non_null(TypeRef::named("Foo"))),
        );
        assert!(!type_ref.nullable().is_non_null());
    }
}

mod is_subtype_of {
    use super::*;

    const SDL: &str = "
        type Query { a: Int }
        interface Node { id: ID! }
        type User implements Node { id: ID! }
        type Post { id: ID! }
        union SearchResult = User | Post
    ";

    #[test]
    fn object_is_subtype_of_implemented_interface() {
        let schema = test_utils::build_schema(SDL).expect("valid schema");
        assert!(TypeRef::named("User").is_subtype_of(schema.types(), &TypeRef::named("Node")));
        assert!(!TypeRef::named("Post").is_subtype_of(schema.types(), &TypeRef::named("Node")));
    }

    #[test]
    fn object_is_subtype_of_containing_union() {
        let schema = test_utils::build_schema(SDL).expect("valid schema");
        assert!(TypeRef::named("Post").is_subtype_of(
            schema.types(),
            &TypeRef::named("SearchResult"),
        ));
    }

    #[test]
    fn non_null_is_subtype_of_nullable_but_not_vice_versa() {
        let schema = test_utils::build_schema(SDL).expect("valid schema");
        let nullable = TypeRef::named("Int");
        let non_null = TypeRef::non_null(TypeRef::named("Int"));
        assert!(non_null.is_subtype_of(schema.types(), &nullable));
        assert!(!nullable.is_subtype_of(schema.types(), &non_null));
    }

    #[test]
    fn list_must_match_list() {
        let schema = test_utils::build_schema(SDL).expect("valid schema");
        let list = TypeRef::list(TypeRef::named("User"));
        assert!(list.is_subtype_of(schema.types(), &TypeRef::list(TypeRef::named("Node"))));
        assert!(!list.is_subtype_of(schema.types(), &TypeRef::named("Node")));
    }
}
