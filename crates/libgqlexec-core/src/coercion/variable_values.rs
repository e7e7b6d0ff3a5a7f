use crate::ast;
use crate::coercion::CoercionError;
use crate::coercion::InputValueCoercer;
use crate::coercion::ScalarCoercers;
use crate::types::GraphQLType;
use crate::types::TypeRef;
use crate::Value;
use indexmap::IndexMap;

/// Coerces the runtime values supplied with a request against an operation's
/// variable definitions, applying declared defaults.
///
/// https://spec.graphql.org/October2021/#CoerceVariableValues()
pub fn coerce_variable_values(
    types_map: &IndexMap<String, GraphQLType>,
    variable_definitions: &[ast::query::VariableDefinition],
    inputs: &IndexMap<String, Value>,
    scalar_coercers: Option<&ScalarCoercers>,
) -> Result<IndexMap<String, Value>, Vec<CoercionError>> {
    let mut errors = vec![];
    let mut coerced = IndexMap::new();

    for var_def in variable_definitions {
        let var_name = var_def.name.as_str();
        let var_type = TypeRef::from_ast(&var_def.var_type);

        let is_input_type = types_map.get(var_type.innermost_name())
            .is_some_and(GraphQLType::is_input_type);
        if !is_input_type {
            errors.push(CoercionError::NotAnInputType {
                type_name: var_type.innermost_name().to_string(),
            });
            continue;
        }

        let mut coercer = InputValueCoercer::new(types_map)
            .with_path_root(format!("${var_name}"));
        if let Some(scalar_coercers) = scalar_coercers {
            coercer = coercer.with_scalar_coercers(scalar_coercers);
        }

        match (inputs.get(var_name), &var_def.default_value) {
            (None, Some(default_value)) => {
                let value = coercer.coerce_literal(default_value, &var_type);
                coerced.insert(var_name.to_string(), value);
            },
            (None, None) if var_type.is_non_null() => {
                errors.push(CoercionError::MissingRequiredVariable {
                    variable_name: var_name.to_string(),
                    variable_type: var_type,
                });
                continue;
            },
            // Absent and nullable: stays absent so that argument defaults
            // can still apply downstream.
            (None, None) => continue,
            (Some(value), _) => {
                let value = coercer.coerce_runtime_value(value, &var_type);
                coerced.insert(var_name.to_string(), value);
            },
        }
        errors.append(&mut coercer.into_errors());
    }

    if errors.is_empty() {
        Ok(coerced)
    } else {
        Err(errors)
    }
}
