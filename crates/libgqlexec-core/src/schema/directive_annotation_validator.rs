use crate::coercion;
use crate::schema::TypeValidationError;
use crate::types::Directive;
use crate::types::DirectiveAnnotation;
use crate::types::DirectiveLocation;
use crate::types::GraphQLType;
use crate::types::InputValue;
use crate::types::ObjectOrInterfaceTypeData;
use indexmap::IndexMap;
use std::collections::HashMap;

/// Checks every directive annotation in the type system: the directive must
/// be defined, allowed where it is applied, given only known arguments (with
/// all required ones present and every value coercible), and applied at most
/// once unless it is repeatable.
///
/// https://spec.graphql.org/October2021/#sec-Type-System.Directives
pub(super) struct DirectiveAnnotationValidator<'a> {
    directive_defs: &'a IndexMap<String, Directive>,
    errors: Vec<TypeValidationError>,
    types_map: &'a IndexMap<String, GraphQLType>,
}
impl<'a> DirectiveAnnotationValidator<'a> {
    pub fn new(
        directive_defs: &'a IndexMap<String, Directive>,
        types_map: &'a IndexMap<String, GraphQLType>,
    ) -> Self {
        Self {
            directive_defs,
            errors: vec![],
            types_map,
        }
    }

    pub fn validate(mut self) -> Vec<TypeValidationError> {
        let types_map = self.types_map;
        for type_ in types_map.values() {
            self.validate_type(type_);
        }
        let directive_defs = self.directive_defs;
        for directive in directive_defs.values() {
            self.validate_input_values(
                directive.parameters(),
                DirectiveLocation::ArgumentDefinition,
            );
        }
        self.errors
    }

    fn validate_annotations(
        &mut self,
        annotations: &[DirectiveAnnotation],
        directive_location: DirectiveLocation,
    ) {
        let directive_defs = self.directive_defs;
        let mut seen: HashMap<&str, usize> = HashMap::new();
        for annot in annotations {
            let Some(directive) = directive_defs.get(annot.name()) else {
                self.errors.push(TypeValidationError::UndefinedDirective {
                    directive_name: annot.name().to_string(),
                    location: annot.ref_location().to_owned(),
                });
                continue;
            };

            if !directive.locations().contains(&directive_location) {
                self.errors.push(TypeValidationError::DirectiveNotAllowedAtLocation {
                    directive_location,
                    directive_name: annot.name().to_string(),
                    location: annot.ref_location().to_owned(),
                });
            }

            let count = seen.entry(annot.name()).or_default();
            *count += 1;
            if *count == 2 && !directive.is_repeatable() {
                self.errors.push(TypeValidationError::DuplicateNonRepeatableDirective {
                    directive_name: annot.name().to_string(),
                    location: annot.ref_location().to_owned(),
                });
            }

            self.validate_arguments(annot, directive);
        }
    }

    fn validate_arguments(
        &mut self,
        annot: &DirectiveAnnotation,
        directive: &Directive,
    ) {
        for (arg_name, arg_value) in annot.arguments() {
            let Some(param) = directive.parameters().get(arg_name) else {
                self.errors.push(TypeValidationError::UnknownDirectiveArgument {
                    argument_name: arg_name.to_string(),
                    directive_name: annot.name().to_string(),
                    location: annot.ref_location().to_owned(),
                });
                continue;
            };

            // Schema documents have no variables in scope.
            let coercibility = coercion::is_const_input_value_coercible_to_type(
                self.types_map,
                arg_value,
                param.default_value(),
                param.type_ref(),
                Some(&[][..]),
            );
            if let Err(coercion_errors) = coercibility {
                for err in coercion_errors {
                    self.errors.push(TypeValidationError::InvalidDirectiveArgumentValue {
                        argument_name: arg_name.to_string(),
                        directive_name: annot.name().to_string(),
                        location: annot.ref_location().to_owned(),
                        reason: err.to_string(),
                    });
                }
            }
        }

        for (param_name, param) in directive.parameters() {
            if param.is_required() && !annot.arguments().contains_key(param_name) {
                self.errors.push(TypeValidationError::MissingRequiredDirectiveArgument {
                    argument_name: param_name.to_string(),
                    directive_name: annot.name().to_string(),
                    location: annot.ref_location().to_owned(),
                });
            }
        }
    }

    fn validate_input_values(
        &mut self,
        input_values: &IndexMap<String, InputValue>,
        directive_location: DirectiveLocation,
    ) {
        for input_value in input_values.values() {
            self.validate_annotations(input_value.directives(), directive_location);
        }
    }

    fn validate_type(&mut self, type_: &GraphQLType) {
        match type_ {
            GraphQLType::Bool
                | GraphQLType::Float
                | GraphQLType::ID
                | GraphQLType::Int
                | GraphQLType::String => (),

            GraphQLType::Enum(enum_type) => {
                self.validate_annotations(enum_type.directives(), DirectiveLocation::Enum);
                for value in enum_type.values().values() {
                    self.validate_annotations(value.directives(), DirectiveLocation::EnumValue);
                }
            },

            GraphQLType::InputObject(inputobj_type) => {
                self.validate_annotations(
                    inputobj_type.directives(),
                    DirectiveLocation::InputObject,
                );
                self.validate_input_values(
                    inputobj_type.fields(),
                    DirectiveLocation::InputFieldDefinition,
                );
            },

            GraphQLType::Interface(iface_type) =>
                self.validate_object_or_interface(&iface_type.data, DirectiveLocation::Interface),

            GraphQLType::Object(obj_type) =>
                self.validate_object_or_interface(&obj_type.0, DirectiveLocation::Object),

            GraphQLType::Scalar(scalar_type) =>
                self.validate_annotations(scalar_type.directives(), DirectiveLocation::Scalar),

            GraphQLType::Union(union_type) =>
                self.validate_annotations(union_type.directives(), DirectiveLocation::Union),
        }
    }

    fn validate_object_or_interface(
        &mut self,
        data: &ObjectOrInterfaceTypeData,
        directive_location: DirectiveLocation,
    ) {
        self.validate_annotations(data.directives(), directive_location);
        for field in data.fields().values() {
            self.validate_annotations(
                field.directives(),
                DirectiveLocation::FieldDefinition,
            );
            self.validate_input_values(
                field.parameters(),
                DirectiveLocation::ArgumentDefinition,
            );
        }
    }
}
