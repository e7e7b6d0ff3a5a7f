use crate::coercion;
use crate::schema::TypeValidationError;
use crate::types::Directive;
use crate::types::GraphQLType;
use crate::types::InputValue;
use indexmap::IndexMap;

/// Every declared default value (of a field parameter, an input-object field,
/// or a directive parameter) must be coercible to its declared type.
pub(super) struct DefaultValueValidator<'a> {
    directive_defs: &'a IndexMap<String, Directive>,
    errors: Vec<TypeValidationError>,
    types_map: &'a IndexMap<String, GraphQLType>,
}
impl<'a> DefaultValueValidator<'a> {
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
        let directive_defs = self.directive_defs;
        for directive in directive_defs.values() {
            self.validate_input_values(
                format!("@{}", directive.name()).as_str(),
                directive.parameters(),
            );
        }

        let types_map = self.types_map;
        for type_ in types_map.values() {
            match type_ {
                GraphQLType::InputObject(inputobj_type) =>
                    self.validate_input_values(inputobj_type.name(), inputobj_type.fields()),

                GraphQLType::Interface(_) | GraphQLType::Object(_) => {
                    for field in type_.fields().into_iter().flat_map(|fields| fields.values()) {
                        self.validate_input_values(
                            format!("{}.{}", type_.name(), field.name()).as_str(),
                            field.parameters(),
                        );
                    }
                },

                _ => (),
            }
        }

        self.errors
    }

    fn validate_input_values(
        &mut self,
        owner_name: &str,
        input_values: &IndexMap<String, InputValue>,
    ) {
        for input_value in input_values.values() {
            let Some(default_value) = input_value.default_value() else {
                continue;
            };
            let coercibility = coercion::is_const_input_value_coercible_to_type(
                self.types_map,
                default_value,
                None,
                input_value.type_ref(),
                Some(&[][..]),
            );
            if let Err(coercion_errors) = coercibility {
                for err in coercion_errors {
                    self.errors.push(TypeValidationError::InvalidDefaultValue {
                        location: input_value.def_location().to_owned(),
                        owner_name: format!("{owner_name}({})", input_value.name()),
                        reason: err.to_string(),
                    });
                }
            }
        }
    }
}
