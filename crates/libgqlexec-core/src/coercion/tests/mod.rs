mod input_value_coercer_tests;
mod literal_coercibility_tests;
mod variable_values_tests;

use crate::ast;
use crate::schema::Schema;
use crate::schema::SchemaBuilder;

const TEST_SDL: &str = "
    type Query { a: Int }
    enum Color { RED GREEN BLUE }
    scalar Date
    input Point { x: Int!, y: Int! = 0, label: String }
    input Shape { points: [Point!]!, color: Color = RED }
";

fn test_schema() -> Schema {
    SchemaBuilder::new()
        .load_str(None, TEST_SDL)
        .expect("parse")
        .build()
        .expect("valid schema")
}

/// Parses a single value literal by wrapping it as an argument.
fn parse_literal(literal: &str) -> ast::query::Value {
    let doc = ast::query::parse(format!("{{ a(v: {literal}) }}").as_str())
        .expect("parse error");
    let graphql_parser::query::Definition::Operation(
        graphql_parser::query::OperationDefinition::SelectionSet(selection_set)
    ) = &doc.definitions[0] else {
        panic!("expected a selection set");
    };
    let graphql_parser::query::Selection::Field(field) = &selection_set.items[0] else {
        panic!("expected a field");
    };
    field.arguments[0].1.to_owned()
}

/// Parses the variable definitions of `query(<defs>) { a }`.
fn parse_variable_defs(defs: &str) -> Vec<ast::query::VariableDefinition> {
    let doc = ast::query::parse(format!("query({defs}) {{ a }}").as_str())
        .expect("parse error");
    let graphql_parser::query::Definition::Operation(
        graphql_parser::query::OperationDefinition::Query(query)
    ) = &doc.definitions[0] else {
        panic!("expected a query");
    };
    query.variable_definitions.to_owned()
}
