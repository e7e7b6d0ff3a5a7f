use crate::ast;
use crate::coercion;
use crate::loc::DocumentPosition;
use crate::types::GraphQLType;
use crate::types::InputValue;
use crate::types::TypeRef;
use crate::validation::ValidationError;
use crate::validation::validation_context::ValidationContext;
use graphql_parser::query::Selection;
use indexmap::IndexMap;
use std::collections::HashSet;

/// Checks the arguments written at fields and directives against their
/// parameter definitions, along with variable default values.
///
/// Variable uses are checked per-operation by the variables pass, so this
/// pass only checks literal values.
///
/// https://spec.graphql.org/October2021/#sec-Validation.Arguments
pub(super) struct ArgumentValidator<'a, 'ctx> {
    ctx: &'ctx ValidationContext<'a>,
    errors: Vec<ValidationError>,
}
impl<'a, 'ctx> ArgumentValidator<'a, 'ctx> {
    pub fn new(ctx: &'ctx ValidationContext<'a>) -> Self {
        Self {
            ctx,
            errors: vec![],
        }
    }

    pub fn validate(mut self) -> Vec<ValidationError> {
        let ctx = self.ctx;

        let mut field_args = vec![];
        ctx.visit_selection_sets(&mut |parent_type, selection_set| {
            for selection in &selection_set.items {
                if let Selection::Field(field) = selection
                    && let Some(field_def) = ctx.field_definition(parent_type, &field.name) {
                    field_args.push((parent_type, field, field_def));
                }
            }
        });
        for (parent_type, field, field_def) in field_args {
            self.validate_arguments(
                &format!("field `{}.{}`", parent_type.name(), field.name),
                field_def.parameters(),
                &field.arguments,
                field.position.into(),
            );
        }

        let mut directives = vec![];
        ctx.visit_directives(&mut |directive_list, _location| {
            directives.extend(directive_list);
        });
        for directive in directives {
            // Undefined directives are reported by the directives pass.
            let Some(directive_def) = ctx.schema.directive(&directive.name) else {
                continue;
            };
            self.validate_arguments(
                &format!("directive `@{}`", directive.name),
                directive_def.parameters(),
                &directive.arguments,
                directive.position.into(),
            );
        }

        for op in &ctx.operations {
            for var_def in op.variable_definitions {
                self.validate_variable_default(var_def);
            }
        }

        self.errors
    }

    fn validate_arguments(
        &mut self,
        owner: &str,
        parameters: &IndexMap<String, InputValue>,
        arguments: &[(String, ast::query::Value)],
        position: DocumentPosition,
    ) {
        let mut seen = HashSet::new();
        for (arg_name, arg_value) in arguments {
            if !seen.insert(arg_name.as_str()) {
                self.errors.push(ValidationError::DuplicateArgument {
                    argument_name: arg_name.to_string(),
                    locations: vec![position],
                });
                continue;
            }

            let Some(param) = parameters.get(arg_name) else {
                self.errors.push(ValidationError::UnknownArgument {
                    argument_name: arg_name.to_string(),
                    locations: vec![position],
                    owner: owner.to_string(),
                });
                continue;
            };

            let coercible = coercion::is_const_input_value_coercible_to_type(
                self.ctx.schema.types(),
                arg_value,
                param.default_value(),
                param.type_ref(),
                None,
            );
            if let Err(errors) = coercible {
                self.errors.push(ValidationError::InvalidArgumentValue {
                    argument_name: arg_name.to_string(),
                    errors,
                    locations: vec![position],
                    owner: owner.to_string(),
                });
            }
        }

        for (param_name, param) in parameters {
            if param.is_required() && !seen.contains(param_name.as_str()) {
                self.errors.push(ValidationError::MissingRequiredArgument {
                    argument_name: param_name.to_string(),
                    locations: vec![position],
                    owner: owner.to_string(),
                });
            }
        }
    }

    fn validate_variable_default(&mut self, var_def: &ast::query::VariableDefinition) {
        let Some(default_value) = &var_def.default_value else {
            return;
        };
        let var_type = TypeRef::from_ast(&var_def.var_type);
        // Non-input variable types are reported by the variables pass.
        let is_input_type = self.ctx.schema.type_definition(var_type.innermost_name())
            .is_some_and(GraphQLType::is_input_type);
        if !is_input_type {
            return;
        }

        // Default values are constant: any variable within one is undefined.
        let coercible = coercion::is_const_input_value_coercible_to_type(
            self.ctx.schema.types(),
            default_value,
            None,
            &var_type,
            Some(&[][..]),
        );
        if let Err(errors) = coercible {
            self.errors.push(ValidationError::InvalidVariableDefault {
                errors,
                locations: vec![var_def.position.into()],
                variable_name: var_def.name.to_string(),
            });
        }
    }
}
