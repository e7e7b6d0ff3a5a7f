use crate::schema::TypeValidationError;
use crate::types::GraphQLType;
use crate::types::ObjectOrInterfaceTypeData;
use indexmap::IndexMap;
use std::collections::HashSet;

pub(super) struct ObjectOrInterfaceTypeValidator<'a> {
    errors: Vec<TypeValidationError>,
    implemented_iface_names: Vec<&'a str>,
    inheritance_path: Vec<&'a str>,
    type_: &'a ObjectOrInterfaceTypeData,
    types_map: &'a IndexMap<String, GraphQLType>,
}
impl<'a> ObjectOrInterfaceTypeValidator<'a> {
    pub fn new(
        type_: &'a ObjectOrInterfaceTypeData,
        types_map: &'a IndexMap<String, GraphQLType>,
    ) -> Self {
        Self {
            errors: vec![],
            implemented_iface_names: type_.interface_names(),
            inheritance_path: vec![],
            type_,
            types_map,
        }
    }

    pub fn validate(
        mut self,
        verified_interface_impls: &mut HashSet<&'a str>,
    ) -> Vec<TypeValidationError> {
        let type_name = self.type_.name();
        let type_fields = self.type_.fields();
        let declared_iface_names: HashSet<&str> =
            self.type_.interface_names().into_iter().collect();

        for iface_name in self.implemented_iface_names.to_owned() {
            // Since interfaces can implement other interfaces, it's possible
            // that we're validating a recursively-implemented interface that
            // we've already validated on this type.
            if !verified_interface_impls.insert(iface_name) {
                continue;
            }

            if iface_name == type_name {
                self.errors.push(TypeValidationError::SelfImplementingInterface {
                    loc: self.type_.def_location().to_owned(),
                    type_name: type_name.to_string(),
                });
                continue;
            }

            let Some(iface_type) = self.types_map.get(iface_name) else {
                self.errors.push(TypeValidationError::ImplementsUndefinedInterface {
                    type_name: type_name.to_string(),
                    undefined_interface_name: iface_name.to_string(),
                    loc: self.type_.def_location().to_owned(),
                });
                continue;
            };

            let Some(iface) = iface_type.as_interface() else {
                self.errors.push(TypeValidationError::ImplementsNonInterfaceType {
                    type_name: type_name.to_string(),
                    non_interface_type_name: iface_type.name().to_string(),
                    loc: self.type_.def_location().to_owned(),
                });
                continue;
            };

            // The implementing type must also explicitly implement each of
            // the interfaces *this* interface itself implements.
            //
            // https://spec.graphql.org/October2021/#IsValidImplementation()
            for transitive_iface_name in iface.interface_names() {
                if !declared_iface_names.contains(transitive_iface_name) {
                    self.errors.push(
                        TypeValidationError::MissingRecursiveInterfaceImplementation {
                            def_location: self.type_.def_location().to_owned(),
                            inheritance_path:
                                self.inheritance_path.iter()
                                    .map(|s| s.to_string())
                                    .collect(),
                            missing_recursive_interface_name:
                                transitive_iface_name.to_string(),
                            type_name: type_name.to_string(),
                        }
                    );
                }
            }

            let mut child_inheritance_path = self.inheritance_path.to_owned();
            child_inheritance_path.push(iface_name);
            let child_validator = ObjectOrInterfaceTypeValidator {
                errors: vec![],
                implemented_iface_names: iface.interface_names(),
                inheritance_path: child_inheritance_path,
                type_: self.type_,
                types_map: self.types_map,
            };
            self.errors.append(&mut child_validator.validate(
                verified_interface_impls,
            ));

            for (field_name, iface_field) in iface.fields() {
                if iface_field.is_introspection_field() {
                    continue;
                }

                let Some(type_field) = type_fields.get(field_name) else {
                    self.errors.push(TypeValidationError::MissingInterfaceSpecifiedField {
                        def_location: self.type_.def_location().to_owned(),
                        field_name: field_name.to_string(),
                        interface_name: iface_name.to_string(),
                        type_name: type_name.to_string(),
                    });
                    continue;
                };

                // For each parameter defined on this field in the interface,
                // there must be a corresponding and equivalently-typed
                // parameter defined on the implementing type.
                for (param_name, iface_field_param) in iface_field.parameters() {
                    let Some(type_param) = type_field.parameters().get(param_name) else {
                        self.errors.push(
                            TypeValidationError::MissingInterfaceSpecifiedFieldParameter {
                                def_location: type_field.def_location().to_owned(),
                                field_name: field_name.to_string(),
                                interface_name: iface_name.to_string(),
                                missing_parameter_name: param_name.to_string(),
                                type_name: type_name.to_string(),
                            }
                        );
                        continue;
                    };

                    if type_param.type_ref() != iface_field_param.type_ref() {
                        self.errors.push(
                            TypeValidationError::InvalidInterfaceSpecifiedFieldParameterType {
                                def_location: type_param.def_location().to_owned(),
                                expected_parameter_type:
                                    iface_field_param.type_ref().to_owned(),
                                field_name: field_name.to_string(),
                                interface_name: iface_name.to_string(),
                                invalid_parameter_type: type_param.type_ref().to_owned(),
                                parameter_name: param_name.to_string(),
                                type_name: type_name.to_string(),
                            }
                        );
                    }
                }

                // Any parameters defined on the implementing field which aren't
                // also defined on the interface's corresponding field must be
                // optional.
                //
                // See 2.d at https://spec.graphql.org/October2021/#IsValidImplementation()
                for (param_name, type_param) in type_field.parameters() {
                    if !iface_field.parameters().contains_key(param_name)
                        && type_param.is_required() {
                        self.errors.push(
                            TypeValidationError::InvalidRequiredAdditionalParameterOnInterfaceSpecifiedField {
                                location: type_param.def_location().to_owned(),
                                field_name: field_name.to_string(),
                                interface_name: iface_name.to_string(),
                                parameter_name: param_name.to_string(),
                                type_name: type_name.to_string(),
                            }
                        );
                    }
                }

                if !type_field.type_ref().is_subtype_of(self.types_map, iface_field.type_ref()) {
                    self.errors.push(TypeValidationError::InvalidInterfaceSpecifiedFieldType {
                        location: type_field.def_location().to_owned(),
                        expected_field_type: iface_field.type_ref().to_owned(),
                        field_name: field_name.to_string(),
                        interface_name: iface_name.to_string(),
                        invalid_field_type: type_field.type_ref().to_owned(),
                        type_name: type_name.to_string(),
                    });
                }
            }
        }

        // Field-level checks only apply once, at the top of the inheritance
        // walk.
        if !self.inheritance_path.is_empty() {
            return self.errors;
        }

        for (field_name, field) in type_fields {
            // All fields on an object type must be declared with an output
            // type.
            //
            // https://spec.graphql.org/October2021/#sel-JAHZhCFDBFABLBgB_pM
            let innermost_type_name = field.type_ref().innermost_name();
            match self.types_map.get(innermost_type_name) {
                Some(innermost_type) if !innermost_type.is_output_type() =>
                    self.errors.push(TypeValidationError::InvalidOutputFieldWithInputType {
                        def_location: field.def_location().to_owned(),
                        field_name: field_name.to_string(),
                        input_type_name: innermost_type_name.to_string(),
                        parent_type_name: type_name.to_string(),
                    }),
                Some(_) => (),
                None => self.errors.push(TypeValidationError::UndefinedTypeName {
                    ref_location: field.def_location().to_owned(),
                    undefined_type_name: innermost_type_name.to_string(),
                }),
            }

            for (param_name, param) in field.parameters() {
                // All parameters must be declared with an input type.
                //
                // https://spec.graphql.org/October2021/#sel-KAHZhCFDBHBDCAACEB6yD
                let innermost_type_name = param.type_ref().innermost_name();
                match self.types_map.get(innermost_type_name) {
                    Some(innermost_type) if !innermost_type.is_input_type() =>
                        self.errors.push(TypeValidationError::InvalidParameterWithOutputOnlyType {
                            def_location: param.def_location().to_owned(),
                            outputonly_type_name: innermost_type_name.to_string(),
                            parameter_name: param_name.to_string(),
                        }),
                    Some(_) => (),
                    None => self.errors.push(TypeValidationError::UndefinedTypeName {
                        ref_location: param.def_location().to_owned(),
                        undefined_type_name: innermost_type_name.to_string(),
                    }),
                }
            }
        }

        self.errors
    }
}
