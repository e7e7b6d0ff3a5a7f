mod deprecation_state;
mod directive;
mod directive_annotation;
mod enum_type;
mod enum_type_builder;
mod field;
mod graphql_type;
mod graphql_type_kind;
mod input_object_type;
mod input_object_type_builder;
mod input_object_type_validator;
mod input_value;
mod interface_type;
mod interface_type_builder;
mod object_or_interface_type_data;
mod object_or_interface_type_validator;
mod object_type;
mod object_type_builder;
mod scalar_type;
mod scalar_type_builder;
mod type_builder;
mod type_ref;
mod types_map_builder;
mod union_type;
mod union_type_builder;
mod union_type_validator;

pub use deprecation_state::DeprecationState;
pub use directive::Directive;
pub use directive::DirectiveLocation;
pub use directive_annotation::DirectiveAnnotation;
pub use enum_type::EnumType;
pub use enum_type::EnumValue;
pub(crate) use enum_type_builder::EnumTypeBuilder;
pub use field::Field;
pub use graphql_type::GraphQLType;
pub use graphql_type_kind::GraphQLTypeKind;
pub use input_object_type::InputObjectType;
pub(crate) use input_object_type_builder::InputObjectTypeBuilder;
use input_object_type_validator::InputObjectTypeValidator;
pub use input_value::InputValue;
pub use interface_type::InterfaceType;
pub(crate) use interface_type_builder::InterfaceTypeBuilder;
pub use object_or_interface_type_data::ObjectOrInterfaceTypeData;
use object_or_interface_type_validator::ObjectOrInterfaceTypeValidator;
pub use object_type::ObjectType;
pub(crate) use object_type_builder::ObjectTypeBuilder;
pub use scalar_type::ScalarType;
pub(crate) use scalar_type_builder::ScalarTypeBuilder;
pub(crate) use type_builder::TypeBuilder;
pub(crate) use type_builder::TypeBuilderHelpers;
pub use type_ref::TypeRef;
pub(crate) use types_map_builder::TypesMapBuilder;
pub use union_type::UnionType;
pub(crate) use union_type_builder::UnionTypeBuilder;
use union_type_validator::UnionTypeValidator;

#[cfg(test)]
mod tests;
