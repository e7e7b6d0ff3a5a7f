use crate::coercion::CoercionError;
use crate::coercion::ScalarCoercers;
use crate::types::GraphQLType;
use crate::Value;

/// Serializes a resolver's value for a leaf (scalar or enum) output position.
///
/// https://spec.graphql.org/October2021/#CompleteValue()
pub fn coerce_leaf_result(
    leaf_type: &GraphQLType,
    value: &Value,
    scalar_coercers: Option<&ScalarCoercers>,
) -> Result<Value, CoercionError> {
    let coerced = match (leaf_type, value) {
        (GraphQLType::Int, Value::Int(i)) if i32::try_from(*i).is_ok() =>
            Some(Value::Int(*i)),
        (GraphQLType::Int, Value::Float(f))
            if f.fract() == 0.0 && *f >= i32::MIN as f64 && *f <= i32::MAX as f64 =>
            Some(Value::Int(*f as i64)),
        (GraphQLType::Int, Value::Int(_) | Value::Float(_)) =>
            return Err(CoercionError::IntOutOfRange {
                path: String::new(),
                value: value.to_string(),
            }),

        (GraphQLType::Float, Value::Int(i)) => Some(Value::Float(*i as f64)),
        (GraphQLType::Float, Value::Float(f)) if f.is_finite() => Some(Value::Float(*f)),

        (GraphQLType::String, Value::String(s)) => Some(Value::String(s.to_string())),
        (GraphQLType::String, Value::Int(_) | Value::Float(_) | Value::Boolean(_)) =>
            Some(Value::String(value.to_string())),

        (GraphQLType::ID, Value::String(s)) => Some(Value::String(s.to_string())),
        (GraphQLType::ID, Value::Int(i)) => Some(Value::String(i.to_string())),

        (GraphQLType::Bool, Value::Boolean(b)) => Some(Value::Boolean(*b)),

        (GraphQLType::Enum(enum_type), Value::Enum(name) | Value::String(name)) => {
            if enum_type.value(name).is_none() {
                return Err(CoercionError::UnknownEnumValue {
                    enum_name: enum_type.name().to_string(),
                    path: String::new(),
                    value: name.to_string(),
                });
            }
            Some(Value::Enum(name.to_string()))
        },

        (GraphQLType::Scalar(scalar_type), Value::Any(_)) => {
            let coercer = scalar_coercers
                .and_then(|coercers| coercers.get(scalar_type.name()));
            match coercer {
                Some(coercer) => coercer.coerce(value),
                None => None,
            }
        },

        (GraphQLType::Scalar(scalar_type), _) => {
            let coercer = scalar_coercers
                .and_then(|coercers| coercers.get(scalar_type.name()));
            match coercer {
                Some(coercer) => match coercer.coerce(value) {
                    Some(coerced) => Some(coerced),
                    None => return Err(CoercionError::CustomScalarRejected {
                        path: String::new(),
                        scalar_name: scalar_type.name().to_string(),
                        value: value.to_string(),
                    }),
                },
                None => Some(value.to_owned()),
            }
        },

        _ => None,
    };

    // Host values are never serializable on their own.
    match coerced {
        Some(Value::Any(_)) | None => Err(CoercionError::InvalidValue {
            expected_type: leaf_type.name().to_string(),
            found: value.to_string(),
            path: String::new(),
        }),
        Some(coerced) => Ok(coerced),
    }
}
