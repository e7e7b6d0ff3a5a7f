use crate::loc;
use crate::types::DirectiveAnnotation;
use crate::types::EnumType;
use crate::types::Field;
use crate::types::GraphQLTypeKind;
use crate::types::InputObjectType;
use crate::types::InterfaceType;
use crate::types::ObjectOrInterfaceTypeData;
use crate::types::ObjectType;
use crate::types::ScalarType;
use crate::types::UnionType;
use indexmap::IndexMap;

static BUILTIN_LOCATION: loc::SourceLocation = loc::SourceLocation::GraphQLBuiltIn;

/// Represents a defined GraphQL type.
#[derive(Clone, Debug, PartialEq)]
pub enum GraphQLType {
    Bool,
    Enum(Box<EnumType>),
    Float,
    ID,
    InputObject(Box<InputObjectType>),
    Int,
    Interface(Box<InterfaceType>),
    Object(Box<ObjectType>),
    Scalar(Box<ScalarType>),
    String,
    Union(Box<UnionType>),
}
impl GraphQLType {
    pub fn as_enum(&self) -> Option<&EnumType> {
        if let Self::Enum(t) = self { Some(t) } else { None }
    }

    pub fn as_input_object(&self) -> Option<&InputObjectType> {
        if let Self::InputObject(t) = self { Some(t) } else { None }
    }

    pub fn as_interface(&self) -> Option<&InterfaceType> {
        if let Self::Interface(t) = self { Some(t) } else { None }
    }

    pub fn as_object(&self) -> Option<&ObjectType> {
        if let Self::Object(t) = self { Some(t) } else { None }
    }

    /// The shared field-bearing data of an object or interface type.
    pub fn as_object_or_interface(&self) -> Option<&ObjectOrInterfaceTypeData> {
        match self {
            Self::Interface(t) => Some(&t.data),
            Self::Object(t) => Some(&t.0),
            _ => None,
        }
    }

    pub fn as_scalar(&self) -> Option<&ScalarType> {
        if let Self::Scalar(t) = self { Some(t) } else { None }
    }

    pub fn as_union(&self) -> Option<&UnionType> {
        if let Self::Union(t) = self { Some(t) } else { None }
    }

    pub fn def_location(&self) -> &loc::SourceLocation {
        match self {
            Self::Bool | Self::Float | Self::ID | Self::Int | Self::String =>
                &BUILTIN_LOCATION,
            Self::Enum(t) => &t.def_location,
            Self::InputObject(t) => &t.def_location,
            Self::Interface(t) => &t.data.def_location,
            Self::Object(t) => &t.0.def_location,
            Self::Scalar(t) => &t.def_location,
            Self::Union(t) => &t.def_location,
        }
    }

    pub fn description(&self) -> Option<&str> {
        match self {
            Self::Bool | Self::Float | Self::ID | Self::Int | Self::String => None,
            Self::Enum(t) => t.description(),
            Self::InputObject(t) => t.description(),
            Self::Interface(t) => t.description(),
            Self::Object(t) => t.description(),
            Self::Scalar(t) => t.description(),
            Self::Union(t) => t.description(),
        }
    }

    pub fn directives(&self) -> &[DirectiveAnnotation] {
        match self {
            Self::Bool | Self::Float | Self::ID | Self::Int | Self::String => &[],
            Self::Enum(t) => t.directives(),
            Self::InputObject(t) => t.directives(),
            Self::Interface(t) => t.directives(),
            Self::Object(t) => t.directives(),
            Self::Scalar(t) => t.directives(),
            Self::Union(t) => t.directives(),
        }
    }

    /// The fields of an object or interface type.
    pub fn fields(&self) -> Option<&IndexMap<String, Field>> {
        self.as_object_or_interface().map(|data| &data.fields)
    }

    /// Interfaces and unions: types whose concrete object type is only known
    /// at runtime.
    pub fn is_abstract(&self) -> bool {
        matches!(self, Self::Interface(_) | Self::Union(_))
    }

    pub fn is_builtin_scalar(&self) -> bool {
        matches!(self, Self::Bool | Self::Float | Self::ID | Self::Int | Self::String)
    }

    /// Objects, interfaces and unions: types selected into with a
    /// sub-selection.
    pub fn is_composite(&self) -> bool {
        matches!(self, Self::Interface(_) | Self::Object(_) | Self::Union(_))
    }

    /// https://spec.graphql.org/October2021/#IsInputType()
    pub fn is_input_type(&self) -> bool {
        !matches!(self, Self::Interface(_) | Self::Object(_) | Self::Union(_))
    }

    /// Scalars and enums: types that terminate a selection.
    pub fn is_leaf(&self) -> bool {
        !self.is_composite() && !matches!(self, Self::InputObject(_))
    }

    /// https://spec.graphql.org/October2021/#IsOutputType()
    pub fn is_output_type(&self) -> bool {
        !matches!(self, Self::InputObject(_))
    }

    pub fn kind(&self) -> GraphQLTypeKind {
        match self {
            Self::Bool
                | Self::Float
                | Self::ID
                | Self::Int
                | Self::Scalar(_)
                | Self::String => GraphQLTypeKind::Scalar,
            Self::Enum(_) => GraphQLTypeKind::Enum,
            Self::InputObject(_) => GraphQLTypeKind::InputObject,
            Self::Interface(_) => GraphQLTypeKind::Interface,
            Self::Object(_) => GraphQLTypeKind::Object,
            Self::Union(_) => GraphQLTypeKind::Union,
        }
    }

    pub fn name(&self) -> &str {
        match self {
            Self::Bool => "Boolean",
            Self::Float => "Float",
            Self::ID => "ID",
            Self::Int => "Int",
            Self::String => "String",
            Self::Enum(t) => t.name(),
            Self::InputObject(t) => t.name(),
            Self::Interface(t) => t.name(),
            Self::Object(t) => t.name(),
            Self::Scalar(t) => t.name(),
            Self::Union(t) => t.name(),
        }
    }
}
