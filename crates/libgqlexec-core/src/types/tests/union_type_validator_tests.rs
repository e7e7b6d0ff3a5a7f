use crate::schema::SchemaBuildError;
use crate::schema::TypeValidationError;
use crate::types::GraphQLType;
use crate::types::GraphQLTypeKind;
use crate::types::tests::test_utils;

#[test]
fn union_members_keep_order() {
    let schema = test_utils::build_schema("
        type Query { r: Result }
        type A { a: Int }
        type B { b: Int }
        union Result = B | A
    ").expect("valid schema");

    let union_type = schema.type_definition("Result")
        .and_then(GraphQLType::as_union)
        .expect("Result is a union");
    assert_eq!(union_type.member_names(), vec!["B", "A"]);
    assert_eq!(
        schema.possible_types("Result").iter().map(|t| t.name()).collect::<Vec<_>>(),
        vec!["B", "A"],
    );
}

#[test]
fn non_object_member_is_rejected() {
    let errors = test_utils::build_schema("
        type Query { r: Result }
        type A { a: Int }
        union Result = A | String
    ").expect_err("scalar union member");

    assert!(errors.iter().any(|err| matches!(
        err,
        SchemaBuildError::TypeValidation(TypeValidationError::InvalidUnionMemberTypeKind {
            invalid_member_type_kind: GraphQLTypeKind::Scalar,
            invalid_member_type_name,
            ..
        }) if invalid_member_type_name == "String",
    )));
}

#[test]
fn duplicate_member_is_rejected() {
    let errors = test_utils::build_schema("
        type Query { r: Result }
        type A { a: Int }
        union Result = A | A
    ").expect_err("duplicate member");

    assert!(matches!(
        errors.as_slice(),
        [SchemaBuildError::DuplicateUnionMember { member_name, .. }] if member_name == "A",
    ));
}
