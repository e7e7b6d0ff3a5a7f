use crate::operation::OperationKind;
use crate::schema::SchemaBuilder;
use crate::types::Directive;
use crate::types::Field;
use crate::types::GraphQLType;
use crate::types::ObjectType;
use indexmap::IndexMap;
use std::collections::HashMap;

/// Represents a fully typechecked and immutable GraphQL schema.
#[derive(Clone, Debug, PartialEq)]
pub struct Schema {
    pub(crate) directive_defs: IndexMap<String, Directive>,
    pub(crate) mutation_type: Option<String>,
    pub(crate) query_type: String,
    pub(crate) subscription_type: Option<String>,
    pub(crate) types: IndexMap<String, GraphQLType>,
    /// Unions carry no field definitions of their own, but `__typename` may
    /// still be selected on them.
    pub(crate) union_typename_fields: HashMap<String, Field>,
}
impl Schema {
    /// Helper function that just delegates to [`SchemaBuilder::new()`].
    pub fn builder() -> SchemaBuilder {
        SchemaBuilder::new()
    }

    /// Looks up a directive definition (custom or built-in) by name.
    pub fn directive(&self, name: &str) -> Option<&Directive> {
        self.directive_defs.get(name)
    }

    /// All directives defined within this [`Schema`], including built-in
    /// directives like `@deprecated`.
    pub fn directives(&self) -> &IndexMap<String, Directive> {
        &self.directive_defs
    }

    /// Types defined by the loaded schema documents, excluding built-in
    /// scalars and introspection types.
    pub fn defined_types(&self) -> impl Iterator<Item = &GraphQLType> {
        self.types.values()
            .filter(|type_| !type_.is_builtin_scalar() && !type_.name().starts_with("__"))
    }

    /// Resolves a field selected on `parent_type_name`, including the
    /// implicit `__typename` field of union types.
    pub fn field_definition(
        &self,
        parent_type_name: &str,
        field_name: &str,
    ) -> Option<&Field> {
        match self.types.get(parent_type_name)? {
            GraphQLType::Union(_) if field_name == "__typename" =>
                self.union_typename_fields.get(parent_type_name),
            type_ => type_.fields()?.get(field_name),
        }
    }

    /// Whether an object of type `object_type_name` can appear where
    /// `type_name` is expected.
    pub fn is_possible_type(&self, type_name: &str, object_type_name: &str) -> bool {
        match self.types.get(type_name) {
            Some(GraphQLType::Object(obj_type)) => obj_type.name() == object_type_name,
            Some(GraphQLType::Interface(iface_type)) =>
                iface_type.implementers.iter().any(|name| name == object_type_name),
            Some(GraphQLType::Union(union_type)) => union_type.has_member(object_type_name),
            _ => false,
        }
    }

    /// https://spec.graphql.org/October2021/#GetPossibleTypes()
    pub fn possible_types(&self, type_name: &str) -> Vec<&ObjectType> {
        let names: Vec<&str> = match self.types.get(type_name) {
            Some(GraphQLType::Object(obj_type)) => vec![obj_type.name()],
            Some(GraphQLType::Interface(iface_type)) =>
                iface_type.implementers.iter().map(String::as_str).collect(),
            Some(GraphQLType::Union(union_type)) => union_type.member_names(),
            _ => vec![],
        };
        names.into_iter()
            .filter_map(|name| self.types.get(name).and_then(GraphQLType::as_object))
            .collect()
    }

    /// Returns this [`Schema`]'s Mutation root operation type (if one was
    /// defined).
    ///
    /// GraphQL [defines an object type named "Mutation" as the _default_
    /// Mutation type](https://spec.graphql.org/October2021/#sec-Root-Operation-Types.Default-Root-Operation-Type-Names),
    /// but a `schema { }` block may select a differently-named type instead.
    /// This accessor factors in any such override.
    pub fn mutation_type(&self) -> Option<&ObjectType> {
        self.root_operation_type(OperationKind::Mutation)
    }

    /// Returns this [`Schema`]'s Query root operation type.
    pub fn query_type(&self) -> &ObjectType {
        self.types.get(&self.query_type)
            .and_then(GraphQLType::as_object)
            .expect("query type is present in schema")
    }

    /// The root object type that operations of `kind` select against.
    pub fn root_operation_type(&self, kind: OperationKind) -> Option<&ObjectType> {
        let type_name = match kind {
            OperationKind::Mutation => self.mutation_type.as_ref()?,
            OperationKind::Query => &self.query_type,
            OperationKind::Subscription => self.subscription_type.as_ref()?,
        };
        self.types.get(type_name).and_then(GraphQLType::as_object)
    }

    /// Returns this [`Schema`]'s Subscription root operation type (if one was
    /// defined).
    pub fn subscription_type(&self) -> Option<&ObjectType> {
        self.root_operation_type(OperationKind::Subscription)
    }

    /// The single lookup primitive for named types. Not finding a type is
    /// not an error here; callers decide whether it is one.
    pub fn type_definition(&self, name: &str) -> Option<&GraphQLType> {
        self.types.get(name)
    }

    /// All types in this [`Schema`], including built-in scalars and the
    /// introspection types.
    pub fn types(&self) -> &IndexMap<String, GraphQLType> {
        &self.types
    }
}
