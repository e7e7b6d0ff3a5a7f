mod coercion_error;
mod input_value_coercer;
mod literal_coercibility;
mod result_coercion;
mod scalar_coercer;
mod variable_values;

pub use coercion_error::CoercionError;
pub(crate) use coercion_error::InputPath;
pub use input_value_coercer::coerce_value;
pub use input_value_coercer::InputValueCoercer;
pub use literal_coercibility::is_const_input_value_coercible_to_type;
pub use literal_coercibility::is_variable_usage_allowed;
pub use result_coercion::coerce_leaf_result;
pub use scalar_coercer::ScalarCoercer;
pub use scalar_coercer::ScalarCoercers;
pub use variable_values::coerce_variable_values;

#[cfg(test)]
mod tests;
