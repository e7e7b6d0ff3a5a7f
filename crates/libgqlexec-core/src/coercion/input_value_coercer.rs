use crate::ast;
use crate::coercion::CoercionError;
use crate::coercion::InputPath;
use crate::coercion::ScalarCoercers;
use crate::types::GraphQLType;
use crate::types::InputValue;
use crate::types::TypeRef;
use crate::Value;
use indexmap::IndexMap;

/// Coerces input values (document literals or runtime values) to the input
/// types they are declared against.
///
/// Coercion never stops at the first failure: each failing position records
/// a [`CoercionError`] and is replaced by [`Value::Null`] so that sibling
/// positions are still coerced (and their failures reported too).
pub struct InputValueCoercer<'a> {
    errors: Vec<CoercionError>,
    path: InputPath,
    scalar_coercers: Option<&'a ScalarCoercers>,
    types_map: &'a IndexMap<String, GraphQLType>,
    variable_values: Option<&'a IndexMap<String, Value>>,
}
impl<'a> InputValueCoercer<'a> {
    pub fn new(types_map: &'a IndexMap<String, GraphQLType>) -> Self {
        Self {
            errors: vec![],
            path: InputPath::default(),
            scalar_coercers: None,
            types_map,
            variable_values: None,
        }
    }

    /// Names the outermost position being coerced (e.g. `$input` or an
    /// argument name) so that error paths read naturally.
    pub fn with_path_root(mut self, root: impl Into<String>) -> Self {
        self.path = InputPath::root(root);
        self
    }

    pub fn with_scalar_coercers(mut self, scalar_coercers: &'a ScalarCoercers) -> Self {
        self.scalar_coercers = Some(scalar_coercers);
        self
    }

    /// Already-coerced variable values that `$variable` literals resolve
    /// against.
    pub fn with_variable_values(
        mut self,
        variable_values: &'a IndexMap<String, Value>,
    ) -> Self {
        self.variable_values = Some(variable_values);
        self
    }

    pub fn errors(&self) -> &[CoercionError] {
        &self.errors
    }

    pub fn into_errors(self) -> Vec<CoercionError> {
        self.errors
    }

    /// Coerces the arguments written at a field or directive against that
    /// field's (or directive's) parameter definitions.
    ///
    /// https://spec.graphql.org/October2021/#CoerceArgumentValues()
    pub fn coerce_arguments(
        &mut self,
        parameters: &IndexMap<String, InputValue>,
        arguments: &[(String, ast::query::Value)],
    ) -> IndexMap<String, Value> {
        let mut coerced = IndexMap::new();
        for (param_name, param) in parameters {
            let arg_value = arguments.iter()
                .find(|(arg_name, _)| arg_name == param_name)
                .map(|(_, value)| value);

            self.path.push_field(param_name);
            let value = match arg_value {
                Some(value) => self.coerce_literal_or_absent(value, param.type_ref()),
                None => None,
            };
            match value {
                Some(value) => {
                    coerced.insert(param_name.to_string(), value);
                },
                None => {
                    if let Some(default_value) = param.default_value() {
                        let value = self.coerce_literal(default_value, param.type_ref());
                        coerced.insert(param_name.to_string(), value);
                    } else if param.type_ref().is_non_null() {
                        self.errors.push(CoercionError::NullForNonNullType {
                            expected_type: param.type_ref().to_string(),
                            path: self.path.render(),
                        });
                        coerced.insert(param_name.to_string(), Value::Null);
                    }
                },
            }
            self.path.pop();
        }
        coerced
    }

    /// Coerces a literal written in a document. A reference to a variable
    /// that was not provided coerces to `null`.
    pub fn coerce_literal(
        &mut self,
        value: &ast::query::Value,
        type_ref: &TypeRef,
    ) -> Value {
        match self.coerce_literal_or_absent(value, type_ref) {
            Some(value) => value,
            None => {
                if type_ref.is_non_null() {
                    self.null_for_non_null(type_ref);
                }
                Value::Null
            },
        }
    }

    /// Coerces a runtime value (e.g. a JSON-provided variable value).
    pub fn coerce_runtime_value(&mut self, value: &Value, type_ref: &TypeRef) -> Value {
        match type_ref {
            TypeRef::NonNull(inner) => {
                if value.is_null() {
                    self.null_for_non_null(type_ref);
                    Value::Null
                } else {
                    self.coerce_runtime_value(value, inner)
                }
            },

            _ if value.is_null() => Value::Null,

            TypeRef::List(item_type) => match value {
                Value::List(items) => Value::List(
                    items.iter().enumerate().map(|(idx, item)| {
                        self.path.push_index(idx);
                        let coerced = self.coerce_runtime_value(item, item_type);
                        self.path.pop();
                        coerced
                    }).collect()
                ),
                _ => Value::List(vec![self.coerce_runtime_value(value, item_type)]),
            },

            TypeRef::Named(type_name) => {
                let Some(type_) = self.lookup_input_type(type_name) else {
                    return Value::Null;
                };
                self.coerce_runtime_named(value, type_ref, type_)
            },
        }
    }

    fn coerce_runtime_named(
        &mut self,
        value: &Value,
        type_ref: &TypeRef,
        type_: &'a GraphQLType,
    ) -> Value {
        match (type_, value) {
            (GraphQLType::Int, Value::Int(i)) => self.coerce_i32(*i, value),
            (GraphQLType::Int, Value::Float(f)) if f.fract() == 0.0 =>
                self.coerce_i32(*f as i64, value),
            (GraphQLType::Float, Value::Int(i)) => Value::Float(*i as f64),
            (GraphQLType::Float, Value::Float(f)) if f.is_finite() => Value::Float(*f),
            (GraphQLType::String, Value::String(s)) => Value::String(s.to_string()),
            (GraphQLType::ID, Value::String(s)) => Value::String(s.to_string()),
            (GraphQLType::ID, Value::Int(i)) => Value::String(i.to_string()),
            (GraphQLType::Bool, Value::Boolean(b)) => Value::Boolean(*b),

            (GraphQLType::Scalar(scalar_type), _) =>
                self.coerce_custom_scalar(scalar_type.name(), value.to_owned()),

            (GraphQLType::Enum(enum_type), Value::Enum(name) | Value::String(name)) => {
                if enum_type.value(name).is_some() {
                    Value::Enum(name.to_string())
                } else {
                    self.errors.push(CoercionError::UnknownEnumValue {
                        enum_name: enum_type.name().to_string(),
                        path: self.path.render(),
                        value: name.to_string(),
                    });
                    Value::Null
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

                let mut coerced = IndexMap::new();
                for (field_name, field_def) in inputobj_type.fields() {
                    self.path.push_field(field_name);
                    match fields.get(field_name) {
                        Some(field_value) => {
                            let value = self.coerce_runtime_value(
                                field_value,
                                field_def.type_ref(),
                            );
                            coerced.insert(field_name.to_string(), value);
                        },
                        None => self.apply_input_field_default(
                            &mut coerced,
                            inputobj_type.name(),
                            field_def,
                        ),
                    }
                    self.path.pop();
                }
                Value::Object(coerced)
            },

            _ => {
                self.errors.push(CoercionError::InvalidValue {
                    expected_type: type_ref.to_string(),
                    found: value.to_string(),
                    path: self.path.render(),
                });
                Value::Null
            },
        }
    }

    /// Returns `None` when `value` is a reference to a variable that has no
    /// provided value, so callers can fall back to a default.
    fn coerce_literal_or_absent(
        &mut self,
        value: &ast::query::Value,
        type_ref: &TypeRef,
    ) -> Option<Value> {
        use graphql_parser::query::Value as Lit;

        if let Lit::Variable(var_name) = value {
            let var_value = self.variable_values
                .and_then(|vars| vars.get(var_name))?
                .to_owned();
            if type_ref.is_non_null() && var_value.is_null() {
                self.null_for_non_null(type_ref);
            }
            return Some(var_value);
        }

        Some(match type_ref {
            TypeRef::NonNull(inner) => {
                if matches!(value, Lit::Null) {
                    self.null_for_non_null(type_ref);
                    Value::Null
                } else {
                    self.coerce_literal(value, inner)
                }
            },

            _ if matches!(value, Lit::Null) => Value::Null,

            TypeRef::List(item_type) => match value {
                Lit::List(items) => Value::List(
                    items.iter().enumerate().map(|(idx, item)| {
                        self.path.push_index(idx);
                        let coerced = self.coerce_literal(item, item_type);
                        self.path.pop();
                        coerced
                    }).collect()
                ),
                _ => Value::List(vec![self.coerce_literal(value, item_type)]),
            },

            TypeRef::Named(type_name) => {
                let type_ = self.lookup_input_type(type_name)?;
                self.coerce_literal_named(value, type_ref, type_)
            },
        })
    }

    fn coerce_literal_named(
        &mut self,
        value: &ast::query::Value,
        type_ref: &TypeRef,
        type_: &'a GraphQLType,
    ) -> Value {
        use graphql_parser::query::Value as Lit;

        match (type_, value) {
            (GraphQLType::Int, Lit::Int(num)) => match num.as_i64() {
                Some(i) => self.coerce_i32(i, &Value::Int(i)),
                None => {
                    self.errors.push(CoercionError::IntOutOfRange {
                        path: self.path.render(),
                        value: ast::print_value(value),
                    });
                    Value::Null
                },
            },
            (GraphQLType::Float, Lit::Int(num)) =>
                Value::Float(num.as_i64().unwrap_or_default() as f64),
            (GraphQLType::Float, Lit::Float(f)) => Value::Float(*f),
            (GraphQLType::String | GraphQLType::ID, Lit::String(s)) =>
                Value::String(s.to_string()),
            (GraphQLType::Bool, Lit::Boolean(b)) => Value::Boolean(*b),

            (GraphQLType::Scalar(scalar_type), _) => {
                let raw = self.literal_to_value(value);
                self.coerce_custom_scalar(scalar_type.name(), raw)
            },

            (GraphQLType::Enum(enum_type), Lit::Enum(name)) => {
                if enum_type.value(name).is_some() {
                    Value::Enum(name.to_string())
                } else {
                    self.errors.push(CoercionError::UnknownEnumValue {
                        enum_name: enum_type.name().to_string(),
                        path: self.path.render(),
                        value: name.to_string(),
                    });
                    Value::Null
                }
            },

            (GraphQLType::InputObject(inputobj_type), Lit::Object(fields)) => {
                for field_name in fields.keys() {
                    if !inputobj_type.fields().contains_key(field_name) {
                        self.errors.push(CoercionError::UnknownInputField {
                            field_name: field_name.to_string(),
                            path: self.path.render(),
                            type_name: inputobj_type.name().to_string(),
                        });
                    }
                }

                let mut coerced = IndexMap::new();
                for (field_name, field_def) in inputobj_type.fields() {
                    self.path.push_field(field_name);
                    let value = fields.get(field_name).and_then(|field_value| {
                        self.coerce_literal_or_absent(field_value, field_def.type_ref())
                    });
                    match value {
                        Some(value) => {
                            coerced.insert(field_name.to_string(), value);
                        },
                        None => self.apply_input_field_default(
                            &mut coerced,
                            inputobj_type.name(),
                            field_def,
                        ),
                    }
                    self.path.pop();
                }
                Value::Object(coerced)
            },

            _ => {
                self.errors.push(CoercionError::InvalidValue {
                    expected_type: type_ref.to_string(),
                    found: ast::print_value(value),
                    path: self.path.render(),
                });
                Value::Null
            },
        }
    }

    fn apply_input_field_default(
        &mut self,
        coerced: &mut IndexMap<String, Value>,
        type_name: &str,
        field_def: &InputValue,
    ) {
        if let Some(default_value) = field_def.default_value() {
            let value = self.coerce_literal(default_value, field_def.type_ref());
            coerced.insert(field_def.name().to_string(), value);
        } else if field_def.type_ref().is_non_null() {
            // The field's own position is already on the path; report the
            // missing field at its parent.
            self.path.pop();
            self.errors.push(CoercionError::MissingRequiredInputField {
                field_name: field_def.name().to_string(),
                path: self.path.render(),
                type_name: type_name.to_string(),
            });
            self.path.push_field(field_def.name());
        }
    }

    fn coerce_custom_scalar(&mut self, scalar_name: &str, value: Value) -> Value {
        let coercer = self.scalar_coercers
            .and_then(|coercers| coercers.get(scalar_name));
        let Some(coercer) = coercer else {
            return value;
        };
        match coercer.coerce(&value) {
            Some(coerced) => coerced,
            None => {
                self.errors.push(CoercionError::CustomScalarRejected {
                    path: self.path.render(),
                    scalar_name: scalar_name.to_string(),
                    value: value.to_string(),
                });
                Value::Null
            },
        }
    }

    fn coerce_i32(&mut self, i: i64, original: &Value) -> Value {
        if i32::try_from(i).is_ok() {
            Value::Int(i)
        } else {
            self.errors.push(CoercionError::IntOutOfRange {
                path: self.path.render(),
                value: original.to_string(),
            });
            Value::Null
        }
    }

    /// Converts a literal to a [`Value`] without any type information, for
    /// handing to custom scalar coercers.
    fn literal_to_value(&self, value: &ast::query::Value) -> Value {
        use graphql_parser::query::Value as Lit;
        match value {
            Lit::Variable(var_name) => self.variable_values
                .and_then(|vars| vars.get(var_name))
                .cloned()
                .unwrap_or_default(),
            Lit::Int(num) => num.as_i64().map(Value::Int).unwrap_or_default(),
            Lit::Float(f) => Value::Float(*f),
            Lit::String(s) => Value::String(s.to_string()),
            Lit::Boolean(b) => Value::Boolean(*b),
            Lit::Null => Value::Null,
            Lit::Enum(name) => Value::Enum(name.to_string()),
            Lit::List(items) =>
                Value::List(items.iter().map(|item| self.literal_to_value(item)).collect()),
            Lit::Object(fields) => Value::Object(
                fields.iter()
                    .map(|(name, val)| (name.to_string(), self.literal_to_value(val)))
                    .collect(),
            ),
        }
    }

    fn lookup_input_type(&mut self, type_name: &str) -> Option<&'a GraphQLType> {
        match self.types_map.get(type_name) {
            Some(type_) if type_.is_input_type() => Some(type_),
            Some(_) => {
                self.errors.push(CoercionError::NotAnInputType {
                    type_name: type_name.to_string(),
                });
                None
            },
            None => {
                self.errors.push(CoercionError::UndefinedType {
                    type_name: type_name.to_string(),
                });
                None
            },
        }
    }

    fn null_for_non_null(&mut self, type_ref: &TypeRef) {
        self.errors.push(CoercionError::NullForNonNullType {
            expected_type: type_ref.to_string(),
            path: self.path.render(),
        });
    }
}

/// Coerces a single literal to `type_ref`, returning every failure found.
pub fn coerce_value(
    types_map: &IndexMap<String, GraphQLType>,
    value: &ast::query::Value,
    type_ref: &TypeRef,
    variable_values: Option<&IndexMap<String, Value>>,
    scalar_coercers: Option<&ScalarCoercers>,
) -> Result<Value, Vec<CoercionError>> {
    let mut coercer = InputValueCoercer::new(types_map);
    coercer.variable_values = variable_values;
    coercer.scalar_coercers = scalar_coercers;
    let coerced = coercer.coerce_literal(value, type_ref);
    if coercer.errors.is_empty() {
        Ok(coerced)
    } else {
        Err(coercer.errors)
    }
}
