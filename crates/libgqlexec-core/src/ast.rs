//! Aliases over the [`graphql_parser`] AST, fixed to owned (`'static`,
//! [`String`]) text so that parsed documents can be stored and shared freely.

pub use graphql_parser::Pos;

pub mod query {
    pub use graphql_parser::query::ParseError;

    pub type Definition = graphql_parser::query::Definition<'static, String>;
    pub type Directive = graphql_parser::query::Directive<'static, String>;
    pub type Document = graphql_parser::query::Document<'static, String>;
    pub type Field = graphql_parser::query::Field<'static, String>;
    pub type FragmentDefinition = graphql_parser::query::FragmentDefinition<'static, String>;
    pub type FragmentSpread = graphql_parser::query::FragmentSpread<'static, String>;
    pub type InlineFragment = graphql_parser::query::InlineFragment<'static, String>;
    pub type OperationDefinition = graphql_parser::query::OperationDefinition<'static, String>;
    pub type Selection = graphql_parser::query::Selection<'static, String>;
    pub type SelectionSet = graphql_parser::query::SelectionSet<'static, String>;
    pub type Type = graphql_parser::query::Type<'static, String>;
    pub type TypeCondition = graphql_parser::query::TypeCondition<'static, String>;
    pub type Value = graphql_parser::query::Value<'static, String>;
    pub type VariableDefinition = graphql_parser::query::VariableDefinition<'static, String>;

    /// Parses an executable document into an owned AST.
    pub fn parse(content: &str) -> Result<Document, ParseError> {
        Ok(graphql_parser::query::parse_query::<String>(content)?.into_static())
    }
}

pub mod schema {
    pub use graphql_parser::schema::DirectiveLocation;
    pub use graphql_parser::schema::ParseError;

    pub type Definition = graphql_parser::schema::Definition<'static, String>;
    pub type Directive = graphql_parser::schema::Directive<'static, String>;
    pub type DirectiveDefinition = graphql_parser::schema::DirectiveDefinition<'static, String>;
    pub type Document = graphql_parser::schema::Document<'static, String>;
    pub type EnumType = graphql_parser::schema::EnumType<'static, String>;
    pub type EnumTypeExtension = graphql_parser::schema::EnumTypeExtension<'static, String>;
    pub type EnumValue = graphql_parser::schema::EnumValue<'static, String>;
    pub type Field = graphql_parser::schema::Field<'static, String>;
    pub type InputObjectType = graphql_parser::schema::InputObjectType<'static, String>;
    pub type InputObjectTypeExtension = graphql_parser::schema::InputObjectTypeExtension<'static, String>;
    pub type InputValue = graphql_parser::schema::InputValue<'static, String>;
    pub type InterfaceType = graphql_parser::schema::InterfaceType<'static, String>;
    pub type InterfaceTypeExtension = graphql_parser::schema::InterfaceTypeExtension<'static, String>;
    pub type ObjectType = graphql_parser::schema::ObjectType<'static, String>;
    pub type ObjectTypeExtension = graphql_parser::schema::ObjectTypeExtension<'static, String>;
    pub type ScalarType = graphql_parser::schema::ScalarType<'static, String>;
    pub type ScalarTypeExtension = graphql_parser::schema::ScalarTypeExtension<'static, String>;
    pub type SchemaDefinition = graphql_parser::schema::SchemaDefinition<'static, String>;
    pub type Type = graphql_parser::schema::Type<'static, String>;
    pub type TypeDefinition = graphql_parser::schema::TypeDefinition<'static, String>;
    pub type TypeExtension = graphql_parser::schema::TypeExtension<'static, String>;
    pub type UnionType = graphql_parser::schema::UnionType<'static, String>;
    pub type UnionTypeExtension = graphql_parser::schema::UnionTypeExtension<'static, String>;
    pub type Value = graphql_parser::schema::Value<'static, String>;

    /// Parses a type-system document into an owned AST.
    pub fn parse(content: &str) -> Result<Document, ParseError> {
        Ok(graphql_parser::schema::parse_schema::<String>(content)?.into_static())
    }
}

/// Renders a literal [`Value`](query::Value) the way it would be written in a
/// GraphQL document (e.g. for `__InputValue.defaultValue`).
pub fn print_value(value: &query::Value) -> String {
    use graphql_parser::query::Value;
    match value {
        Value::Variable(name) => format!("${name}"),
        Value::Int(num) => num.as_i64().map(|i| i.to_string()).unwrap_or_default(),
        Value::Float(f) => {
            let printed = f.to_string();
            if printed.contains(['.', 'e', 'E']) {
                printed
            } else {
                format!("{printed}.0")
            }
        },
        Value::String(s) => format!("{s:?}"),
        Value::Boolean(b) => b.to_string(),
        Value::Null => "null".to_string(),
        Value::Enum(name) => name.to_string(),
        Value::List(items) => format!(
            "[{}]",
            items.iter().map(print_value).collect::<Vec<_>>().join(", "),
        ),
        Value::Object(fields) => format!(
            "{{{}}}",
            fields.iter()
                .map(|(name, val)| format!("{name}: {}", print_value(val)))
                .collect::<Vec<_>>()
                .join(", "),
        ),
    }
}
