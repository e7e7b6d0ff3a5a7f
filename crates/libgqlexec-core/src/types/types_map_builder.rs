use crate::loc;
use crate::schema::SchemaBuildError;
use crate::types::GraphQLType;
use crate::types::InputObjectTypeValidator;
use crate::types::ObjectOrInterfaceTypeValidator;
use crate::types::UnionTypeValidator;
use indexmap::IndexMap;
use std::collections::HashSet;

type Result<T> = std::result::Result<T, SchemaBuildError>;

#[derive(Debug)]
pub(crate) struct TypesMapBuilder {
    /// Set while the built-in introspection types are being loaded, since
    /// those are the only types permitted to use `__`-prefixed names.
    pub(crate) allow_dunder_names: bool,
    pub(super) types: IndexMap<String, GraphQLType>,
}
impl TypesMapBuilder {
    pub fn new() -> Self {
        Self {
            allow_dunder_names: false,
            types: IndexMap::from([
                ("Boolean".to_string(), GraphQLType::Bool),
                ("Float".to_string(), GraphQLType::Float),
                ("ID".to_string(), GraphQLType::ID),
                ("Int".to_string(), GraphQLType::Int),
                ("String".to_string(), GraphQLType::String),
            ]),
        }
    }

    pub fn add_new_type(
        &mut self,
        type_name: &str,
        type_loc: &loc::SourceLocation,
        type_: GraphQLType,
    ) -> Result<()> {
        // https://spec.graphql.org/October2021/#sec-Names.Reserved-Names
        if !self.allow_dunder_names && type_name.starts_with("__") {
            return Err(SchemaBuildError::InvalidDunderPrefixedTypeName {
                def_location: type_loc.to_owned(),
                type_name: type_name.to_string(),
            });
        }

        if let Some(conflicting_type) = self.types.get(type_name) {
            return Err(SchemaBuildError::DuplicateTypeDefinition {
                type_name: type_name.to_string(),
                def1: conflicting_type.def_location().to_owned(),
                def2: type_loc.to_owned(),
            });
        }

        self.types.insert(type_name.to_string(), type_);
        Ok(())
    }

    pub fn get_type(&self, type_name: &str) -> Option<&GraphQLType> {
        self.types.get(type_name)
    }

    pub fn get_type_mut(
        &mut self,
        type_name: &str,
    ) -> Option<&mut GraphQLType> {
        self.types.get_mut(type_name)
    }

    /// Validates all types together and computes each interface's set of
    /// implementing object types.
    pub fn into_types_map(
        mut self,
    ) -> std::result::Result<IndexMap<String, GraphQLType>, Vec<SchemaBuildError>> {
        let mut errors = vec![];
        for type_ in self.types.values() {
            match type_ {
                GraphQLType::Bool
                | GraphQLType::Enum(_)
                | GraphQLType::Float
                | GraphQLType::ID
                | GraphQLType::Int
                | GraphQLType::Scalar(_)
                | GraphQLType::String
                    => (),

                GraphQLType::InputObject(type_) => errors.append(
                    &mut InputObjectTypeValidator::new(type_, &self.types)
                        .validate()
                ),

                GraphQLType::Interface(type_) => errors.append(
                    &mut ObjectOrInterfaceTypeValidator::new(&type_.data, &self.types)
                        .validate(&mut HashSet::new())
                ),

                GraphQLType::Object(type_) => errors.append(
                    &mut ObjectOrInterfaceTypeValidator::new(&type_.0, &self.types)
                        .validate(&mut HashSet::new())
                ),

                GraphQLType::Union(type_) => errors.append(
                    &mut UnionTypeValidator::new(type_, &self.types)
                        .validate()
                ),
            }
        }

        if !errors.is_empty() {
            return Err(errors.into_iter().map(SchemaBuildError::from).collect());
        }

        let implementations: Vec<(String, String)> =
            self.types.values()
                .filter_map(GraphQLType::as_object)
                .flat_map(|obj_type| obj_type.interfaces.iter().map(|iface_name| (
                    iface_name.to_string(),
                    obj_type.name.to_string(),
                )))
                .collect();
        for (iface_name, obj_name) in implementations {
            if let Some(GraphQLType::Interface(iface)) = self.types.get_mut(&iface_name) {
                iface.implementers.push(obj_name);
            }
        }

        Ok(self.types)
    }
}
