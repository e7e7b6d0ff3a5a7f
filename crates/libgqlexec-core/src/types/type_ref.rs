use crate::ast;

/// A (possibly list- or non-null-wrapped) reference to a named type, as
/// written in a field, parameter, input field, or variable declaration.
///
/// Wrapping depth is unlimited: `[[Int!]]!` is
/// `NonNull(List(List(NonNull(Named("Int")))))`.
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub enum TypeRef {
    List(Box<TypeRef>),
    Named(String),
    NonNull(Box<TypeRef>),
}
impl TypeRef {
    pub fn from_ast(ast_type: &ast::query::Type) -> Self {
        use graphql_parser::query::Type;
        match ast_type {
            Type::NamedType(name) => Self::Named(name.to_string()),
            Type::ListType(inner) => Self::List(Box::new(Self::from_ast(inner))),
            Type::NonNullType(inner) => Self::NonNull(Box::new(Self::from_ast(inner))),
        }
    }

    pub fn named(name: impl Into<String>) -> Self {
        Self::Named(name.into())
    }

    pub fn list(inner: TypeRef) -> Self {
        Self::List(Box::new(inner))
    }

    pub fn non_null(inner: TypeRef) -> Self {
        Self::NonNull(Box::new(inner))
    }

    /// The name of the type at the core of all list/non-null wrappers.
    pub fn innermost_name(&self) -> &str {
        match self {
            Self::Named(name) => name.as_str(),
            Self::List(inner) | Self::NonNull(inner) => inner.innermost_name(),
        }
    }

    pub fn is_non_null(&self) -> bool {
        matches!(self, Self::NonNull(_))
    }

    /// True if this reference is a list once any outer non-null wrapper is
    /// removed.
    pub fn is_list(&self) -> bool {
        matches!(self.nullable(), Self::List(_))
    }

    /// The item type when this (nullable-or-not) reference is a list.
    pub fn list_item_type(&self) -> Option<&TypeRef> {
        match self.nullable() {
            Self::List(inner) => Some(inner),
            _ => None,
        }
    }

    /// Strips one outer non-null wrapper, if present.
    pub fn nullable(&self) -> &TypeRef {
        match self {
            Self::NonNull(inner) => inner,
            other => other,
        }
    }
}
impl std::fmt::Display for TypeRef {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::List(inner) => write!(f, "[{inner}]"),
            Self::Named(name) => write!(f, "{name}"),
            Self::NonNull(inner) => write!(f, "{inner}!"),
        }
    }
}

impl TypeRef {
    /// Whether a field declared with `self` validly implements an interface
    /// field declared with `other` (covariant in the named type, and at
    /// least as strict in nullability).
    ///
    /// https://spec.graphql.org/October2021/#IsValidImplementationFieldType()
    pub fn is_subtype_of(
        &self,
        types_map: &indexmap::IndexMap<String, crate::types::GraphQLType>,
        other: &TypeRef,
    ) -> bool {
        use crate::types::GraphQLType;
        match (self, other) {
            (Self::NonNull(inner), Self::NonNull(other_inner)) =>
                inner.is_subtype_of(types_map, other_inner),
            (Self::NonNull(inner), other) =>
                inner.is_subtype_of(types_map, other),
            (_, Self::NonNull(_)) => false,
            (Self::List(inner), Self::List(other_inner)) =>
                inner.is_subtype_of(types_map, other_inner),
            (Self::List(_), _) | (_, Self::List(_)) => false,
            (Self::Named(name), Self::Named(other_name)) => {
                if name == other_name {
                    return true;
                }
                match (types_map.get(name), types_map.get(other_name)) {
                    (Some(GraphQLType::Object(obj)), Some(GraphQLType::Union(union_type))) =>
                        union_type.has_member(obj.name()),
                    (Some(sub_type), Some(GraphQLType::Interface(iface))) =>
                        sub_type.as_object_or_interface().is_some_and(|data| {
                            data.interfaces.iter().any(|i| i == iface.name())
                        }),
                    _ => false,
                }
            },
        }
    }
}
