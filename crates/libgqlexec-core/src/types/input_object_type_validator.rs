use crate::schema::TypeValidationError;
use crate::types::GraphQLType;
use crate::types::InputObjectType;
use crate::types::InputValue;
use crate::types::TypeRef;
use indexmap::IndexMap;
use std::collections::HashSet;

pub(super) struct InputObjectTypeValidator<'a> {
    errors: Vec<TypeValidationError>,
    type_: &'a InputObjectType,
    types_map: &'a IndexMap<String, GraphQLType>,
}
impl<'a> InputObjectTypeValidator<'a> {
    pub fn new(
        type_: &'a InputObjectType,
        types_map: &'a IndexMap<String, GraphQLType>,
    ) -> Self {
        Self {
            errors: vec![],
            type_,
            types_map,
        }
    }

    pub fn validate(mut self) -> Vec<TypeValidationError> {
        self.validate_field_types();
        self.validate_fields_recursive(
            self.type_.name(),
            self.type_.fields(),
            &mut vec![],
            HashSet::from([self.type_.name()]),
        );
        self.errors
    }

    fn validate_field_types(&mut self) {
        for (field_name, field) in self.type_.fields() {
            let innermost_type_name = field.type_ref().innermost_name();
            match self.types_map.get(innermost_type_name) {
                // Input object fields can not be declared with an output-only
                // type.
                //
                // https://spec.graphql.org/October2021/#sel-IAHhBXDDBFCAACEB4iG
                Some(innermost_type) if !innermost_type.is_input_type() =>
                    self.errors.push(TypeValidationError::InvalidInputFieldWithOutputType {
                        def_location: field.def_location().to_owned(),
                        field_name: field_name.to_owned(),
                        invalid_type_name: innermost_type_name.to_string(),
                        parent_type_name: self.type_.name().to_string(),
                    }),
                Some(_) => (),
                None => self.errors.push(TypeValidationError::UndefinedTypeName {
                    ref_location: field.def_location().to_owned(),
                    undefined_type_name: innermost_type_name.to_string(),
                }),
            }
        }
    }

    /// Looks for input-type cycles that aren't broken by at least one
    /// nullable (or list) type.
    fn validate_fields_recursive(
        &mut self,
        type_name: &'a str,
        fields: &'a IndexMap<String, InputValue>,
        path: &mut Vec<(&'a str, Option<&'a str>)>,
        seen_type_names: HashSet<&'a str>,
    ) {
        for (field_name, field) in fields {
            if is_cycle_breaking(field.type_ref()) {
                continue;
            }

            let innermost_type_name = field.type_ref().innermost_name();
            let Some(GraphQLType::InputObject(input_obj_type)) =
                self.types_map.get(innermost_type_name) else {
                continue;
            };

            path.extend_from_slice(&[
                (type_name, Some(field_name.as_str())),
                (innermost_type_name, None),
            ]);
            if seen_type_names.contains(innermost_type_name) {
                // Only report the cycle from the type it starts at so each
                // cycle is surfaced once per participating root.
                if innermost_type_name == self.type_.name() {
                    self.errors.push(TypeValidationError::CircularInputFieldChain {
                        circular_field_path: path.iter().map(|(type_name, field_name)| {
                            if let Some(field_name) = field_name {
                                format!("{type_name}.{field_name}")
                            } else {
                                type_name.to_string()
                            }
                        }).collect(),
                    });
                }
            } else {
                let mut seen_type_names = seen_type_names.clone();
                seen_type_names.insert(innermost_type_name);
                self.validate_fields_recursive(
                    innermost_type_name,
                    input_obj_type.fields(),
                    path,
                    seen_type_names,
                );
            }
            path.pop();
            path.pop();
        }
    }
}

/// A chain of non-null input fields can only be broken by a nullable field or
/// a list (which may always be empty).
fn is_cycle_breaking(type_ref: &TypeRef) -> bool {
    match type_ref {
        TypeRef::NonNull(inner) => matches!(**inner, TypeRef::List(_)),
        TypeRef::List(_) | TypeRef::Named(_) => true,
    }
}
