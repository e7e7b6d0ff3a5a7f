use crate::Value;
use crate::ast;
use crate::coercion;
use crate::coercion::InputValueCoercer;
use crate::execution::Arguments;
use crate::execution::ExecutionError;
use crate::execution::PathSegment;
use crate::execution::ResolverRegistry;
use crate::execution::Response;
use crate::execution::ResponseError;
use crate::execution::execution_context::ExecutionContext;
use crate::execution::field_collector;
use crate::execution::field_collector::GroupedFields;
use crate::execution::introspection;
use crate::loc::DocumentPosition;
use crate::operation::OperationInfo;
use crate::operation::OperationKind;
use crate::schema::Schema;
use crate::subscription::SourceStream;
use crate::types::Field;
use crate::types::GraphQLType;
use crate::types::ObjectType;
use crate::types::TypeRef;
use crate::validation::ValidatedDocument;
use futures::future::BoxFuture;
use indexmap::IndexMap;
use std::collections::HashSet;

/// Marks a position that must become `null` because a non-null position at
/// or below it did. The error that caused it has already been recorded.
#[derive(Debug)]
struct NullPropagation;

type Completion = Result<Value, NullPropagation>;

/// Selects the operation to run, reporting an unknown name (or a missing
/// name in a multi-operation document) as an error.
pub(crate) fn select_operation<'a>(
    document: &'a ValidatedDocument,
    operation_name: Option<&str>,
) -> Result<OperationInfo<'a>, ExecutionError> {
    document.operation(operation_name).ok_or_else(|| ExecutionError::UnknownOperation {
        operation_name: operation_name.map(str::to_string),
    })
}

/// Runs one query or mutation operation to completion.
///
/// https://spec.graphql.org/October2021/#ExecuteRequest()
pub(crate) async fn execute_request(
    schema: &Schema,
    resolvers: &ResolverRegistry,
    document: &ValidatedDocument,
    operation_name: Option<&str>,
    variable_inputs: &IndexMap<String, Value>,
    root_value: &Value,
) -> Response {
    let op = match select_operation(document, operation_name) {
        Ok(op) => op,
        Err(err) => return Response::from_errors([err]),
    };
    let variable_values = match coercion::coerce_variable_values(
        schema.types(),
        op.variable_definitions,
        variable_inputs,
        Some(resolvers.scalar_coercers()),
    ) {
        Ok(variable_values) => variable_values,
        Err(errors) => return Response::from_errors(
            errors.into_iter().map(ExecutionError::InvalidVariable),
        ),
    };

    tracing::debug!(
        operation_kind = %op.kind,
        operation_name = op.name.unwrap_or("(anonymous)"),
        "executing operation",
    );
    execute_operation(schema, resolvers, document, op, &variable_values, root_value.to_owned())
        .await
}

/// Executes an operation whose variables are already coerced. Subscription
/// events come through here with the event as the root value.
pub(crate) async fn execute_operation(
    schema: &Schema,
    resolvers: &ResolverRegistry,
    document: &ValidatedDocument,
    op: OperationInfo<'_>,
    variable_values: &IndexMap<String, Value>,
    root_value: Value,
) -> Response {
    let Some(root_type) = schema.root_operation_type(op.kind) else {
        return Response::from_errors([ExecutionError::MissingRootType {
            operation_kind: op.kind,
        }]);
    };

    let ctx = ExecutionContext::new(schema, resolvers, document, op.kind, variable_values);
    // Mutation root fields run one after another, in document order.
    let parallel = op.kind != OperationKind::Mutation;
    let data = execute_selection_set(
        &ctx,
        root_type,
        root_value,
        vec![op.selection_set],
        vec![],
        parallel,
    ).await;

    Response {
        data: Some(data.unwrap_or(Value::Null)),
        errors: ctx.into_errors(),
    }
}

/// Binds a subscription operation to the source stream its single root
/// field resolves to.
///
/// https://spec.graphql.org/October2021/#CreateSourceEventStream()
pub(crate) fn create_source_stream(
    schema: &Schema,
    resolvers: &ResolverRegistry,
    document: &ValidatedDocument,
    op: OperationInfo<'_>,
    variable_values: &IndexMap<String, Value>,
    root_value: &Value,
) -> Result<SourceStream, Vec<ResponseError>> {
    let Some(root_type) = schema.root_operation_type(op.kind) else {
        return Err(vec![ExecutionError::MissingRootType { operation_kind: op.kind }.into()]);
    };
    let ctx = ExecutionContext::new(schema, resolvers, document, op.kind, variable_values);
    let mut grouped = GroupedFields::new();
    field_collector::collect_fields(&ctx, root_type, op.selection_set, &HashSet::new(), &mut grouped);

    let source_stream = match grouped.first() {
        Some((_, fields)) => resolve_source_stream(&ctx, root_type, fields[0], root_value),
        None => Err(ExecutionError::EmptySubscription {
            operation_name: op.name.map(str::to_string),
        }),
    };
    let mut errors = ctx.into_errors();
    match source_stream {
        Ok(source_stream) if errors.is_empty() => Ok(source_stream),
        Ok(_) => Err(errors),
        Err(err) => {
            errors.push(err.into());
            Err(errors)
        },
    }
}

fn resolve_source_stream(
    ctx: &ExecutionContext<'_>,
    root_type: &ObjectType,
    field: &ast::query::Field,
    root_value: &Value,
) -> Result<SourceStream, ExecutionError> {
    let locations: Vec<DocumentPosition> = vec![field.position.into()];
    let missing_stream_resolver = || ExecutionError::MissingStreamResolver {
        field_name: field.name.to_string(),
        locations: locations.to_owned(),
    };
    let field_def = ctx.schema.field_definition(root_type.name(), &field.name)
        .ok_or_else(missing_stream_resolver)?;
    let stream_resolver = ctx.resolvers.stream_resolver(&field.name)
        .ok_or_else(missing_stream_resolver)?;

    let mut coercer = InputValueCoercer::new(ctx.schema.types())
        .with_path_root(field.name.as_str())
        .with_scalar_coercers(ctx.resolvers.scalar_coercers())
        .with_variable_values(ctx.variable_values);
    let arguments = coercer.coerce_arguments(field_def.parameters(), &field.arguments);
    if let Some(error) = coercer.into_errors().into_iter().next() {
        return Err(ExecutionError::InvalidArgument {
            error,
            field_name: field.name.to_string(),
            locations,
            type_name: root_type.name().to_string(),
        });
    }

    let source_stream = stream_resolver.resolve_stream(root_value, &arguments)
        .map_err(|err| ExecutionError::ResolverFailed {
            locations: locations.to_owned(),
            message: err.to_string(),
        })?;
    tracing::debug!(
        field_name = %field.name,
        source = source_stream.name(),
        "resolved subscription source stream",
    );
    Ok(source_stream)
}

/// https://spec.graphql.org/October2021/#ExecuteSelectionSet()
fn execute_selection_set<'a>(
    ctx: &'a ExecutionContext<'a>,
    object_type: &'a ObjectType,
    object_value: Value,
    selection_sets: Vec<&'a ast::query::SelectionSet>,
    path: Vec<PathSegment>,
    parallel: bool,
) -> BoxFuture<'a, Completion> {
    Box::pin(async move {
        let mut grouped = GroupedFields::new();
        for selection_set in selection_sets {
            field_collector::collect_fields(
                ctx,
                object_type,
                selection_set,
                &HashSet::new(),
                &mut grouped,
            );
        }

        let field_path = |response_key: &str| {
            let mut field_path = path.to_owned();
            field_path.push(PathSegment::from(response_key));
            field_path
        };

        let mut data = IndexMap::with_capacity(grouped.len());
        if parallel {
            let field_futures = grouped.iter().map(|(&response_key, fields)| {
                execute_field(ctx, object_type, &object_value, fields, field_path(response_key))
            });
            let results = futures::future::join_all(field_futures).await;
            for (&response_key, result) in grouped.keys().zip(results) {
                data.insert(response_key.to_string(), result?);
            }
        } else {
            for (&response_key, fields) in &grouped {
                let result = execute_field(
                    ctx,
                    object_type,
                    &object_value,
                    fields,
                    field_path(response_key),
                ).await;
                data.insert(response_key.to_string(), result?);
            }
        }
        Ok(Value::Object(data))
    })
}

/// https://spec.graphql.org/October2021/#ExecuteField()
async fn execute_field<'a>(
    ctx: &'a ExecutionContext<'a>,
    object_type: &'a ObjectType,
    object_value: &Value,
    fields: &[&'a ast::query::Field],
    path: Vec<PathSegment>,
) -> Completion {
    let field = fields[0];
    // Validation guarantees every selected field is defined.
    let Some(field_def) = ctx.schema.field_definition(object_type.name(), &field.name) else {
        return Ok(Value::Null);
    };
    let field_type = field_def.type_ref();
    let locations: Vec<DocumentPosition> = vec![field.position.into()];

    let mut coercer = InputValueCoercer::new(ctx.schema.types())
        .with_path_root(field.name.as_str())
        .with_scalar_coercers(ctx.resolvers.scalar_coercers())
        .with_variable_values(ctx.variable_values);
    let arguments = coercer.coerce_arguments(field_def.parameters(), &field.arguments);
    let argument_errors = coercer.into_errors();
    if !argument_errors.is_empty() {
        for error in argument_errors {
            ctx.record_error(
                ExecutionError::InvalidArgument {
                    error,
                    field_name: field.name.to_string(),
                    locations: locations.to_owned(),
                    type_name: object_type.name().to_string(),
                },
                Some(&path),
            );
        }
        return null_for_field(field_type);
    }

    let resolved = resolve_field_value(
        ctx,
        object_type,
        object_value,
        field_def,
        &arguments,
        &locations,
    ).await;
    match resolved {
        Ok(value) => complete_value(ctx, field_def, field_type, fields.to_vec(), value, path).await,
        Err(err) => {
            ctx.record_error(err, Some(&path));
            null_for_field(field_type)
        },
    }
}

/// https://spec.graphql.org/October2021/#ResolveFieldValue()
async fn resolve_field_value(
    ctx: &ExecutionContext<'_>,
    object_type: &ObjectType,
    object_value: &Value,
    field_def: &Field,
    arguments: &Arguments,
    locations: &[DocumentPosition],
) -> Result<Value, ExecutionError> {
    let type_name = object_type.name();
    let field_name = field_def.name();
    tracing::trace!(type_name, field_name, "resolving field");

    if field_name == "__typename" {
        return Ok(Value::String(type_name.to_string()));
    }
    if introspection::is_introspection_field(type_name, field_name) {
        return introspection::resolve_introspection_field(
            ctx.schema,
            field_name,
            object_value,
            arguments,
        ).ok_or_else(|| ExecutionError::ResolverFailed {
            locations: locations.to_vec(),
            message: format!("`{type_name}.{field_name}` was resolved on a non-schema value"),
        });
    }

    if let Some(resolver) = ctx.resolvers.field_resolver(type_name, field_name) {
        return resolver.resolve(object_value, arguments).await
            .map_err(|err| ExecutionError::ResolverFailed {
                locations: locations.to_vec(),
                message: err.to_string(),
            });
    }

    // Subscription root fields default to the event that triggered them.
    let is_subscription_root = ctx.operation_kind == OperationKind::Subscription
        && ctx.schema.subscription_type().is_some_and(|sub_type| sub_type.name() == type_name);
    if is_subscription_root {
        return Ok(object_value.to_owned());
    }

    Err(ExecutionError::MissingResolver {
        field_name: field_name.to_string(),
        locations: locations.to_vec(),
        type_name: type_name.to_string(),
    })
}

/// https://spec.graphql.org/October2021/#CompleteValue()
fn complete_value<'a>(
    ctx: &'a ExecutionContext<'a>,
    field_def: &'a Field,
    field_type: &'a TypeRef,
    fields: Vec<&'a ast::query::Field>,
    value: Value,
    path: Vec<PathSegment>,
) -> BoxFuture<'a, Completion> {
    Box::pin(async move {
        let position: DocumentPosition = fields[0].position.into();
        match field_type {
            TypeRef::NonNull(inner_type) => {
                let completed =
                    complete_nullable_value(ctx, field_def, inner_type, fields, value, &path).await?;
                if completed.is_null() {
                    ctx.record_error(
                        ExecutionError::NullForNonNullField {
                            field_name: field_def.name().to_string(),
                            locations: vec![position],
                            type_name: field_def.parent_type_name().to_string(),
                        },
                        Some(&path),
                    );
                    return Err(NullPropagation);
                }
                Ok(completed)
            },
            // A nullable position absorbs a null propagated from below.
            _ => Ok(
                complete_nullable_value(ctx, field_def, field_type, fields, value, &path).await
                    .unwrap_or(Value::Null),
            ),
        }
    })
}

/// Completes a value for a position that is not itself non-null.
async fn complete_nullable_value<'a>(
    ctx: &'a ExecutionContext<'a>,
    field_def: &'a Field,
    field_type: &'a TypeRef,
    fields: Vec<&'a ast::query::Field>,
    value: Value,
    path: &[PathSegment],
) -> Completion {
    if value.is_null() {
        return Ok(Value::Null);
    }
    let locations: Vec<DocumentPosition> = vec![fields[0].position.into()];

    if let TypeRef::List(item_type) = field_type {
        let found = value.kind_name();
        let Value::List(items) = value else {
            ctx.record_error(
                ExecutionError::ListExpected {
                    field_name: field_def.name().to_string(),
                    found: found.to_string(),
                    locations,
                    type_name: field_def.parent_type_name().to_string(),
                },
                Some(path),
            );
            return Err(NullPropagation);
        };
        let item_futures = items.into_iter().enumerate().map(|(idx, item)| {
            let mut item_path = path.to_vec();
            item_path.push(PathSegment::Index(idx));
            complete_value(ctx, field_def, item_type, fields.to_owned(), item, item_path)
        });
        let completed = futures::future::join_all(item_futures).await
            .into_iter()
            .collect::<Result<Vec<_>, _>>()?;
        return Ok(Value::List(completed));
    }

    let Some(named_type) = ctx.schema.type_definition(field_type.innermost_name()) else {
        return Ok(Value::Null);
    };

    if named_type.is_leaf() {
        return coercion::coerce_leaf_result(
            named_type,
            &value,
            Some(ctx.resolvers.scalar_coercers()),
        ).or_else(|error| {
            ctx.record_error(
                ExecutionError::InvalidLeafValue {
                    error,
                    field_name: field_def.name().to_string(),
                    locations,
                    type_name: field_def.parent_type_name().to_string(),
                },
                Some(path),
            );
            Err(NullPropagation)
        });
    }

    let object_type = match named_type {
        GraphQLType::Object(obj_type) => obj_type.as_ref(),
        _ => match resolve_abstract_type(ctx, named_type, &value, locations) {
            Ok(obj_type) => obj_type,
            Err(err) => {
                ctx.record_error(err, Some(path));
                return Err(NullPropagation);
            },
        },
    };
    let selection_sets = fields.iter().map(|field| &field.selection_set).collect();
    execute_selection_set(ctx, object_type, value, selection_sets, path.to_vec(), true).await
}

/// https://spec.graphql.org/October2021/#ResolveAbstractType()
fn resolve_abstract_type<'a>(
    ctx: &ExecutionContext<'a>,
    abstract_type: &GraphQLType,
    value: &Value,
    locations: Vec<DocumentPosition>,
) -> Result<&'a ObjectType, ExecutionError> {
    let abstract_name = abstract_type.name();
    let type_name = ctx.resolvers.abstract_type_resolver()
        .and_then(|resolver| resolver.resolve_type(value, abstract_name))
        .or_else(|| value.get("__typename").and_then(Value::as_str).map(str::to_string));
    let Some(type_name) = type_name else {
        return Err(ExecutionError::UnresolvedAbstractType {
            abstract_type: abstract_name.to_string(),
            locations,
        });
    };

    let schema = ctx.schema;
    match schema.type_definition(&type_name).and_then(GraphQLType::as_object) {
        Some(obj_type) if schema.is_possible_type(abstract_name, obj_type.name()) => Ok(obj_type),
        _ => Err(ExecutionError::ImpossibleConcreteType {
            abstract_type: abstract_name.to_string(),
            concrete_type: type_name,
            locations,
        }),
    }
}

fn null_for_field(field_type: &TypeRef) -> Completion {
    if field_type.is_non_null() {
        Err(NullPropagation)
    } else {
        Ok(Value::Null)
    }
}
