use crate::ast;
use crate::coercion::CoercionError;
use crate::coercion::InputPath;
use crate::types::GraphQLType;
use crate::types::TypeRef;
use indexmap::IndexMap;

/// Statically decides whether a literal `value` (as written in a document)
/// can be coerced to `type_ref`, without executing anything.
///
/// `location_default` is the default value declared at the position the
/// literal occupies (an argument or input-field default), which matters
/// when `value` is a variable: a nullable variable may flow into a non-null
/// position when either the variable or the position has a default.
///
/// When `variable_defs` is `None`, variable uses are not checked here (e.g.
/// inside a fragment that may be spread into several operations).
pub fn is_const_input_value_coercible_to_type(
    types_map: &IndexMap<String, GraphQLType>,
    value: &ast::query::Value,
    location_default: Option<&ast::query::Value>,
    type_ref: &TypeRef,
    variable_defs: Option<&[ast::query::VariableDefinition]>,
) -> Result<(), Vec<CoercionError>> {
    let mut checker = LiteralCoercibilityChecker {
        errors: vec![],
        path: InputPath::default(),
        types_map,
        variable_defs,
    };
    checker.check(value, location_default, type_ref);
    if checker.errors.is_empty() {
        Ok(())
    } else {
        Err(checker.errors)
    }
}

/// https://spec.graphql.org/October2021/#IsVariableUsageAllowed()
pub fn is_variable_usage_allowed(
    variable_type: &TypeRef,
    variable_default: Option<&ast::query::Value>,
    location_type: &TypeRef,
    location_default: Option<&ast::query::Value>,
) -> bool {
    if let TypeRef::NonNull(location_inner) = location_type
        && !variable_type.is_non_null() {
        let has_non_null_variable_default =
            variable_default.is_some_and(|val| !matches!(val, ast::query::Value::Null));
        if !has_non_null_variable_default && location_default.is_none() {
            return false;
        }
        return are_types_compatible(variable_type, location_inner);
    }
    are_types_compatible(variable_type, location_type)
}

/// https://spec.graphql.org/October2021/#AreTypesCompatible()
fn are_types_compatible(variable_type: &TypeRef, location_type: &TypeRef) -> bool {
    match (variable_type, location_type) {
        (TypeRef::NonNull(var_inner), TypeRef::NonNull(loc_inner)) =>
            are_types_compatible(var_inner, loc_inner),
        (_, TypeRef::NonNull(_)) => false,
        (TypeRef::NonNull(var_inner), _) =>
            are_types_compatible(var_inner, location_type),
        (TypeRef::List(var_item), TypeRef::List(loc_item)) =>
            are_types_compatible(var_item, loc_item),
        (TypeRef::List(_), _) | (_, TypeRef::List(_)) => false,
        (TypeRef::Named(var_name), TypeRef::Named(loc_name)) => var_name == loc_name,
    }
}

struct LiteralCoercibilityChecker<'a> {
    errors: Vec<CoercionError>,
    path: InputPath,
    types_map: &'a IndexMap<String, GraphQLType>,
    variable_defs: Option<&'a [ast::query::VariableDefinition]>,
}
impl LiteralCoercibilityChecker<'_> {
    fn invalid(&mut self, type_ref: &TypeRef, value: &ast::query::Value) {
        self.errors.push(CoercionError::InvalidValue {
            expected_type: type_ref.to_string(),
            found: ast::print_value(value),
            path: self.path.render(),
        });
    }

    fn check(
        &mut self,
        value: &ast::query::Value,
        location_default: Option<&ast::query::Value>,
        type_ref: &TypeRef,
    ) {
        use graphql_parser::query::Value;

        if let Value::Variable(var_name) = value {
            self.check_variable(var_name, location_default, type_ref);
            return;
        }

        match type_ref {
            TypeRef::NonNull(inner) => {
                if matches!(value, Value::Null) {
                    self.errors.push(CoercionError::NullForNonNullType {
                        expected_type: type_ref.to_string(),
                        path: self.path.render(),
                    });
                } else {
                    self.check(value, None, inner);
                }
            },

            _ if matches!(value, Value::Null) => (),

            TypeRef::List(item_type) => match value {
                Value::List(items) => {
                    for (idx, item) in items.iter().enumerate() {
                        self.path.push_index(idx);
                        self.check(item, None, item_type);
                        self.path.pop();
                    }
                },
                // A single item is accepted where a list is expected.
                _ => self.check(value, None, item_type),
            },

            TypeRef::Named(type_name) => self.check_named(value, type_ref, type_name),
        }
    }

    fn check_named(
        &mut self,
        value: &ast::query::Value,
        type_ref: &TypeRef,
        type_name: &str,
    ) {
        use graphql_parser::query::Value;

        let Some(type_) = self.types_map.get(type_name) else {
            self.errors.push(CoercionError::UndefinedType {
                type_name: type_name.to_string(),
            });
            return;
        };

        match (type_, value) {
            (GraphQLType::Int, Value::Int(num)) => {
                let in_range = num.as_i64()
                    .is_some_and(|i| i32::try_from(i).is_ok());
                if !in_range {
                    self.errors.push(CoercionError::IntOutOfRange {
                        path: self.path.render(),
                        value: ast::print_value(value),
                    });
                }
            },
            (GraphQLType::Float, Value::Int(_) | Value::Float(_)) => (),
            (GraphQLType::String | GraphQLType::ID, Value::String(_)) => (),
            (GraphQLType::Bool, Value::Boolean(_)) => (),

            // Custom scalars define their own literal forms; the registered
            // coercer (if any) decides at execution time.
            (GraphQLType::Scalar(_), _) => self.check_nested_variables(value),

            (GraphQLType::Enum(enum_type), Value::Enum(enum_value)) => {
                if enum_type.value(enum_value).is_none() {
                    self.errors.push(CoercionError::UnknownEnumValue {
                        enum_name: enum_type.name().to_string(),
                        path: self.path.render(),
                        value: enum_value.to_string(),
                    });
                }
            },

            (GraphQLType::InputObject(inputobj_type), Value::Object(fields)) => {
                for field_name in fields.keys() {
                    if !inputobj_type.fields().contains_key(field_name) {
                        self.errors.push(CoercionError::UnknownInputField {
                            field_name: field_name.to_string(),
                            path: self.path.render(),
                            type_name: inputobj_type.name().to_string(),
                        });
                    }
                }
                for (field_name, field_def) in inputobj_type.fields() {
                    match fields.get(field_name) {
                        Some(field_value) => {
                            self.path.push_field(field_name);
                            self.check(
                                field_value,
                                field_def.default_value(),
                                field_def.type_ref(),
                            );
                            self.path.pop();
                        },
                        None if field_def.is_required() =>
                            self.errors.push(CoercionError::MissingRequiredInputField {
                                field_name: field_name.to_string(),
                                path: self.path.render(),
                                type_name: inputobj_type.name().to_string(),
                            }),
                        None => (),
                    }
                }
            },

            (GraphQLType::Interface(_) | GraphQLType::Object(_) | GraphQLType::Union(_), _) =>
                self.errors.push(CoercionError::NotAnInputType {
                    type_name: type_name.to_string(),
                }),

            _ => self.invalid(type_ref, value),
        }
    }

    fn check_nested_variables(&mut self, value: &ast::query::Value) {
        use graphql_parser::query::Value;
        match value {
            Value::Variable(var_name) => {
                if let Some(var_defs) = self.variable_defs
                    && !var_defs.iter().any(|def| &def.name == var_name) {
                    self.errors.push(CoercionError::UndefinedVariable {
                        variable_name: var_name.to_string(),
                    });
                }
            },
            Value::List(items) =>
                items.iter().for_each(|item| self.check_nested_variables(item)),
            Value::Object(fields) =>
                fields.values().for_each(|val| self.check_nested_variables(val)),
            _ => (),
        }
    }

    fn check_variable(
        &mut self,
        var_name: &str,
        location_default: Option<&ast::query::Value>,
        type_ref: &TypeRef,
    ) {
        let Some(var_defs) = self.variable_defs else {
            return;
        };
        let Some(var_def) = var_defs.iter().find(|def| def.name == var_name) else {
            self.errors.push(CoercionError::UndefinedVariable {
                variable_name: var_name.to_string(),
            });
            return;
        };
        let var_type = TypeRef::from_ast(&var_def.var_type);
        if !is_variable_usage_allowed(
            &var_type,
            var_def.default_value.as_ref(),
            type_ref,
            location_default,
        ) {
            self.errors.push(CoercionError::VariableTypeMismatch {
                expected_type: type_ref.to_owned(),
                variable_name: var_name.to_string(),
                variable_type: var_type,
            });
        }
    }
}
