use crate::Value;
use crate::ast;
use crate::execution::Arguments;
use crate::schema::Schema;
use crate::types::DeprecationState;
use crate::types::EnumValue;
use crate::types::Field;
use crate::types::GraphQLType;
use crate::types::InputValue;
use crate::types::TypeRef;

/// A schema element exposed through the introspection types. Travels
/// through execution as the host value of `__Schema`, `__Type` (etc.)
/// objects.
#[derive(Clone, Debug)]
pub(crate) enum IntrospectionNode {
    Directive(String),
    EnumValue(EnumValue),
    Field(Field),
    InputValue(InputValue),
    Schema,
    Type(TypeRef),
}
impl IntrospectionNode {
    fn into_value(self) -> Value {
        Value::any(self)
    }
}

/// Whether `field_name` on `type_name` is answered from the schema rather
/// than by a registered resolver.
pub(crate) fn is_introspection_field(type_name: &str, field_name: &str) -> bool {
    type_name.starts_with("__") || field_name.starts_with("__")
}

/// Resolves a field of one of the introspection types, or one of the
/// `__schema`/`__type` entry points of the query root.
///
/// https://spec.graphql.org/October2021/#sec-Schema-Introspection
pub(crate) fn resolve_introspection_field(
    schema: &Schema,
    field_name: &str,
    parent: &Value,
    arguments: &Arguments,
) -> Option<Value> {
    match field_name {
        "__schema" => return Some(IntrospectionNode::Schema.into_value()),
        "__type" => {
            let type_name = arguments.get("name").and_then(Value::as_str)?;
            let value = schema.type_definition(type_name)
                .map(|_| IntrospectionNode::Type(TypeRef::named(type_name)).into_value())
                .unwrap_or_default();
            return Some(value);
        },
        _ => (),
    }

    let include_deprecated = arguments.get("includeDeprecated")
        .and_then(Value::as_bool)
        .unwrap_or(false);
    let node = parent.as_any()?.downcast_ref::<IntrospectionNode>()?;
    let value = match node {
        IntrospectionNode::Schema => resolve_schema_field(schema, field_name),
        IntrospectionNode::Type(type_ref) =>
            resolve_type_field(schema, type_ref, field_name, include_deprecated),
        IntrospectionNode::Field(field) => match field_name {
            "args" => input_values(field.parameters().values(), include_deprecated),
            "description" => field.description().into(),
            "name" => field.name().into(),
            "type" => IntrospectionNode::Type(field.type_ref().to_owned()).into_value(),
            _ => deprecation_field(field.deprecation_state(), field_name),
        },
        IntrospectionNode::InputValue(input_value) => match field_name {
            "defaultValue" => input_value.default_value().map(ast::print_value).into(),
            "description" => input_value.description().into(),
            "name" => input_value.name().into(),
            "type" => IntrospectionNode::Type(input_value.type_ref().to_owned()).into_value(),
            _ => deprecation_field(input_value.deprecation_state(), field_name),
        },
        IntrospectionNode::EnumValue(enum_value) => match field_name {
            "description" => enum_value.description().into(),
            "name" => enum_value.name().into(),
            _ => deprecation_field(enum_value.deprecation_state(), field_name),
        },
        IntrospectionNode::Directive(directive_name) => {
            let directive = schema.directive(directive_name)?;
            match field_name {
                "args" => input_values(directive.parameters().values(), include_deprecated),
                "description" => directive.description().into(),
                "isRepeatable" => directive.is_repeatable().into(),
                "locations" => Value::List(
                    directive.locations().iter()
                        .map(|location| Value::Enum(location.as_str().to_string()))
                        .collect(),
                ),
                "name" => directive.name().into(),
                _ => Value::Null,
            }
        },
    };
    Some(value)
}

fn resolve_schema_field(schema: &Schema, field_name: &str) -> Value {
    match field_name {
        "directives" => Value::List(
            schema.directives().keys()
                .map(|name| IntrospectionNode::Directive(name.to_string()).into_value())
                .collect(),
        ),
        "mutationType" => schema.mutation_type()
            .map(|obj_type| named_type_value(obj_type.name()))
            .unwrap_or_default(),
        "queryType" => named_type_value(schema.query_type().name()),
        "subscriptionType" => schema.subscription_type()
            .map(|obj_type| named_type_value(obj_type.name()))
            .unwrap_or_default(),
        "types" => Value::List(schema.types().keys().map(|name| named_type_value(name)).collect()),
        _ => Value::Null,
    }
}

fn resolve_type_field(
    schema: &Schema,
    type_ref: &TypeRef,
    field_name: &str,
    include_deprecated: bool,
) -> Value {
    let type_name = match type_ref {
        TypeRef::List(inner) | TypeRef::NonNull(inner) => {
            return match field_name {
                "kind" => Value::Enum(match type_ref {
                    TypeRef::List(_) => "LIST".to_string(),
                    _ => "NON_NULL".to_string(),
                }),
                "ofType" => IntrospectionNode::Type(inner.as_ref().to_owned()).into_value(),
                _ => Value::Null,
            };
        },
        TypeRef::Named(type_name) => type_name,
    };
    let Some(type_) = schema.type_definition(type_name) else {
        return Value::Null;
    };

    match field_name {
        "description" => type_.description().into(),
        "enumValues" => match type_.as_enum() {
            Some(enum_type) => Value::List(
                enum_type.values().values()
                    .filter(|enum_value| {
                        include_deprecated || !enum_value.deprecation_state().is_deprecated()
                    })
                    .map(|enum_value| IntrospectionNode::EnumValue(enum_value.to_owned()).into_value())
                    .collect(),
            ),
            None => Value::Null,
        },
        "fields" => match type_.fields() {
            Some(fields) => Value::List(
                fields.values()
                    .filter(|field| !field.is_introspection_field())
                    .filter(|field| include_deprecated || !field.deprecation_state().is_deprecated())
                    .map(|field| IntrospectionNode::Field(field.to_owned()).into_value())
                    .collect(),
            ),
            None => Value::Null,
        },
        "inputFields" => match type_.as_input_object() {
            Some(inputobj_type) =>
                input_values(inputobj_type.fields().values(), include_deprecated),
            None => Value::Null,
        },
        "interfaces" => match type_.as_object_or_interface() {
            Some(data) => Value::List(
                data.interface_names().into_iter().map(named_type_value).collect(),
            ),
            None => Value::Null,
        },
        "kind" => Value::Enum(type_.kind().as_introspection_str().to_string()),
        "name" => type_.name().into(),
        "possibleTypes" => {
            if type_.is_abstract() {
                Value::List(
                    schema.possible_types(type_.name()).into_iter()
                        .map(|obj_type| named_type_value(obj_type.name()))
                        .collect(),
                )
            } else {
                Value::Null
            }
        },
        "specifiedByURL" => match type_ {
            GraphQLType::Scalar(scalar_type) => scalar_type.specified_by_url().into(),
            _ => Value::Null,
        },
        _ => Value::Null,
    }
}

fn deprecation_field(state: DeprecationState<'_>, field_name: &str) -> Value {
    match field_name {
        "deprecationReason" => state.reason().into(),
        "isDeprecated" => state.is_deprecated().into(),
        _ => Value::Null,
    }
}

fn input_values<'a>(
    input_values: impl Iterator<Item = &'a InputValue>,
    include_deprecated: bool,
) -> Value {
    Value::List(
        input_values
            .filter(|input_value| {
                include_deprecated || !input_value.deprecation_state().is_deprecated()
            })
            .map(|input_value| IntrospectionNode::InputValue(input_value.to_owned()).into_value())
            .collect(),
    )
}

fn named_type_value(type_name: &str) -> Value {
    IntrospectionNode::Type(TypeRef::named(type_name)).into_value()
}
