use crate::ast;
use crate::coercion;
use crate::loc::DocumentPosition;
use crate::operation;
use crate::operation::OperationInfo;
use crate::types::GraphQLType;
use crate::types::InputValue;
use crate::types::TypeRef;
use crate::validation::ValidationError;
use crate::validation::validation_context::ValidationContext;
use graphql_parser::query::Selection;
use indexmap::IndexMap;
use std::collections::HashSet;

/// One place a `$variable` is referenced, with the type (and default) of
/// the position it occupies when that could be determined.
struct VariableUsage<'a> {
    location_default: Option<&'a ast::query::Value>,
    location_type: Option<&'a TypeRef>,
    name: &'a str,
    position: DocumentPosition,
}

/// Checks each operation's variable definitions against every variable use
/// reachable from that operation (including through fragments).
///
/// https://spec.graphql.org/October2021/#sec-Validation.Variables
pub(super) struct VariableValidator<'a, 'ctx> {
    ctx: &'ctx ValidationContext<'a>,
    errors: Vec<ValidationError>,
}
impl<'a, 'ctx> VariableValidator<'a, 'ctx> {
    pub fn new(ctx: &'ctx ValidationContext<'a>) -> Self {
        Self {
            ctx,
            errors: vec![],
        }
    }

    pub fn validate(mut self) -> Vec<ValidationError> {
        let ctx = self.ctx;
        for op in &ctx.operations {
            self.validate_definitions(op);
            self.validate_usages(op);
        }
        self.errors
    }

    fn validate_definitions(&mut self, op: &OperationInfo<'a>) {
        let mut positions_by_name = IndexMap::<&str, Vec<DocumentPosition>>::new();
        for var_def in op.variable_definitions {
            positions_by_name.entry(var_def.name.as_str())
                .or_default()
                .push(var_def.position.into());

            let var_type = TypeRef::from_ast(&var_def.var_type);
            match self.ctx.schema.type_definition(var_type.innermost_name()) {
                Some(type_) if type_.is_input_type() => (),
                Some(_) => self.errors.push(ValidationError::NonInputVariableType {
                    locations: vec![var_def.position.into()],
                    type_ref: var_type,
                    variable_name: var_def.name.to_string(),
                }),
                None => self.errors.push(ValidationError::UndefinedVariableType {
                    locations: vec![var_def.position.into()],
                    type_name: var_type.innermost_name().to_string(),
                    variable_name: var_def.name.to_string(),
                }),
            }
        }

        for (variable_name, positions) in positions_by_name {
            if positions.len() > 1 {
                self.errors.push(ValidationError::DuplicateVariable {
                    locations: positions,
                    variable_name: variable_name.to_string(),
                });
            }
        }
    }

    fn validate_usages(&mut self, op: &OperationInfo<'a>) {
        let mut usages = vec![];
        self.collect_directive_usages(op.directives, &mut usages);
        self.collect_selection_set_usages(
            self.ctx.root_type(op),
            op.selection_set,
            &mut HashSet::new(),
            &mut usages,
        );

        let operation_name = op.name.map(str::to_string);
        let mut used = HashSet::new();
        for usage in usages {
            used.insert(usage.name);
            let var_def = op.variable_definitions.iter()
                .find(|var_def| var_def.name == usage.name);
            let Some(var_def) = var_def else {
                self.errors.push(ValidationError::UndefinedVariable {
                    locations: vec![usage.position],
                    operation_name: operation_name.to_owned(),
                    variable_name: usage.name.to_string(),
                });
                continue;
            };

            let Some(location_type) = usage.location_type else {
                continue;
            };
            let var_type = TypeRef::from_ast(&var_def.var_type);
            let allowed = coercion::is_variable_usage_allowed(
                &var_type,
                var_def.default_value.as_ref(),
                location_type,
                usage.location_default,
            );
            if !allowed {
                self.errors.push(ValidationError::VariableTypeMismatch {
                    expected_type: location_type.to_owned(),
                    locations: vec![usage.position, var_def.position.into()],
                    variable_name: usage.name.to_string(),
                    variable_type: var_type,
                });
            }
        }

        for var_def in op.variable_definitions {
            if !used.contains(var_def.name.as_str()) {
                self.errors.push(ValidationError::UnusedVariable {
                    locations: vec![var_def.position.into()],
                    operation_name: operation_name.to_owned(),
                    variable_name: var_def.name.to_string(),
                });
            }
        }
    }

    fn collect_selection_set_usages(
        &self,
        parent_type: Option<&'a GraphQLType>,
        selection_set: &'a ast::query::SelectionSet,
        visited_fragments: &mut HashSet<&'a str>,
        usages: &mut Vec<VariableUsage<'a>>,
    ) {
        for selection in &selection_set.items {
            match selection {
                Selection::Field(field) => {
                    let field_def = parent_type
                        .and_then(|parent_type| self.ctx.field_definition(parent_type, &field.name));
                    self.collect_argument_usages(
                        field_def.map(|field_def| field_def.parameters()),
                        &field.arguments,
                        field.position.into(),
                        usages,
                    );
                    self.collect_directive_usages(&field.directives, usages);
                    self.collect_selection_set_usages(
                        field_def.and_then(|field_def| self.ctx.field_selection_type(field_def)),
                        &field.selection_set,
                        visited_fragments,
                        usages,
                    );
                },
                Selection::InlineFragment(inline_frag) => {
                    self.collect_directive_usages(&inline_frag.directives, usages);
                    let frag_type = match &inline_frag.type_condition {
                        Some(type_cond) =>
                            self.ctx.composite_type(operation::type_condition_name(type_cond)),
                        None => parent_type,
                    };
                    self.collect_selection_set_usages(
                        frag_type,
                        &inline_frag.selection_set,
                        visited_fragments,
                        usages,
                    );
                },
                Selection::FragmentSpread(spread) => {
                    self.collect_directive_usages(&spread.directives, usages);
                    let Some(&frag_def) = self.ctx.fragments.get(spread.fragment_name.as_str()) else {
                        continue;
                    };
                    if !visited_fragments.insert(frag_def.name.as_str()) {
                        continue;
                    }
                    self.collect_directive_usages(&frag_def.directives, usages);
                    self.collect_selection_set_usages(
                        self.ctx.fragment_type(frag_def),
                        &frag_def.selection_set,
                        visited_fragments,
                        usages,
                    );
                },
            }
        }
    }

    fn collect_directive_usages(
        &self,
        directives: &'a [ast::query::Directive],
        usages: &mut Vec<VariableUsage<'a>>,
    ) {
        for directive in directives {
            let directive_def = self.ctx.schema.directive(&directive.name);
            self.collect_argument_usages(
                directive_def.map(|directive_def| directive_def.parameters()),
                &directive.arguments,
                directive.position.into(),
                usages,
            );
        }
    }

    fn collect_argument_usages(
        &self,
        parameters: Option<&'a IndexMap<String, InputValue>>,
        arguments: &'a [(String, ast::query::Value)],
        position: DocumentPosition,
        usages: &mut Vec<VariableUsage<'a>>,
    ) {
        for (arg_name, arg_value) in arguments {
            let param = parameters.and_then(|params| params.get(arg_name));
            self.collect_value_usages(
                arg_value,
                param.map(InputValue::type_ref),
                param.and_then(InputValue::default_value),
                position,
                usages,
            );
        }
    }

    fn collect_value_usages(
        &self,
        value: &'a ast::query::Value,
        location_type: Option<&'a TypeRef>,
        location_default: Option<&'a ast::query::Value>,
        position: DocumentPosition,
        usages: &mut Vec<VariableUsage<'a>>,
    ) {
        use graphql_parser::query::Value;
        match value {
            Value::Variable(name) => usages.push(VariableUsage {
                location_default,
                location_type,
                name: name.as_str(),
                position,
            }),

            Value::List(items) => {
                let item_type = location_type.and_then(TypeRef::list_item_type);
                for item in items {
                    self.collect_value_usages(item, item_type, None, position, usages);
                }
            },

            Value::Object(fields) => {
                let inputobj_type = location_type
                    .and_then(|type_ref| self.ctx.schema.type_definition(type_ref.innermost_name()))
                    .and_then(GraphQLType::as_input_object);
                for (field_name, field_value) in fields {
                    let field_def = inputobj_type
                        .and_then(|inputobj_type| inputobj_type.fields().get(field_name));
                    self.collect_value_usages(
                        field_value,
                        field_def.map(InputValue::type_ref),
                        field_def.and_then(InputValue::default_value),
                        position,
                        usages,
                    );
                }
            },

            _ => (),
        }
    }
}
