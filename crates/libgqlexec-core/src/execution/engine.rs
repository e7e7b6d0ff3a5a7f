use crate::Value;
use crate::ast;
use crate::coercion;
use crate::execution::ExecutionError;
use crate::execution::ResolverRegistry;
use crate::execution::Response;
use crate::execution::executor;
use crate::operation::OperationKind;
use crate::schema::Schema;
use crate::subscription::ResponseConsumer;
use crate::subscription::ResponseStream;
use crate::subscription::SubscriptionHandle;
use crate::subscription::SubscriptionHub;
use crate::validation::DocumentValidator;
use crate::validation::ValidatedDocument;
use crate::validation::ValidationError;
use indexmap::IndexMap;
use std::sync::Arc;

/// Executes validated documents against one [`Schema`] and
/// [`ResolverRegistry`], and keeps the table of active subscriptions.
///
/// Cloning an `Engine` is cheap; clones share the schema, the resolvers and
/// the subscription table.
#[derive(Clone)]
pub struct Engine {
    resolvers: Arc<ResolverRegistry>,
    root_value: Value,
    schema: Arc<Schema>,
    subscriptions: Arc<SubscriptionHub>,
}
impl Engine {
    pub fn new(schema: Schema, resolvers: ResolverRegistry) -> Self {
        Self {
            resolvers: Arc::new(resolvers),
            root_value: Value::Null,
            schema: Arc::new(schema),
            subscriptions: Arc::new(SubscriptionHub::new()),
        }
    }

    /// Sets the value handed to resolvers of query and mutation root fields
    /// (and to stream resolvers) as their parent.
    pub fn with_root_value(mut self, root_value: impl Into<Value>) -> Self {
        self.root_value = root_value.into();
        self
    }

    pub fn resolvers(&self) -> &ResolverRegistry {
        &self.resolvers
    }

    pub fn schema(&self) -> &Schema {
        &self.schema
    }

    pub fn validate(
        &self,
        document: ast::query::Document,
    ) -> Result<ValidatedDocument, Vec<ValidationError>> {
        DocumentValidator::new(&self.schema, document).validate()
    }

    /// Executes one operation of `document`. A subscription operation
    /// executed this way runs once, against the engine's root value.
    ///
    /// https://spec.graphql.org/October2021/#ExecuteRequest()
    pub async fn execute(
        &self,
        document: &ValidatedDocument,
        operation_name: Option<&str>,
        variable_inputs: &IndexMap<String, Value>,
    ) -> Response {
        executor::execute_request(
            &self.schema,
            &self.resolvers,
            document,
            operation_name,
            variable_inputs,
            &self.root_value,
        ).await
    }

    /// Parses, validates and executes `content`. Parse and validation
    /// failures come back as a [`Response`] without `data`.
    pub async fn execute_str(
        &self,
        content: &str,
        operation_name: Option<&str>,
        variable_inputs: &IndexMap<String, Value>,
    ) -> Response {
        let document = match ast::query::parse(content) {
            Ok(document) => document,
            Err(err) => return Response::from_errors([ExecutionError::ParseFailed {
                message: err.to_string(),
            }]),
        };
        match self.validate(document) {
            Ok(document) => self.execute(&document, operation_name, variable_inputs).await,
            Err(errors) => Response::from_errors(errors),
        }
    }

    /// Binds a subscription operation to the source stream its root field
    /// resolves to. Every later [`publish()`](Self::publish) to that source
    /// re-executes the operation and hands the result to `consumer`.
    ///
    /// https://spec.graphql.org/October2021/#Subscribe()
    pub async fn subscribe(
        &self,
        document: ValidatedDocument,
        operation_name: Option<&str>,
        variable_inputs: &IndexMap<String, Value>,
        consumer: impl ResponseConsumer + 'static,
    ) -> Result<SubscriptionHandle, Response> {
        let op = executor::select_operation(&document, operation_name)
            .map_err(|err| Response::from_errors([err]))?;
        if op.kind != OperationKind::Subscription {
            return Err(Response::from_errors([ExecutionError::NotASubscription {
                operation_kind: op.kind,
                operation_name: op.name.map(str::to_string),
            }]));
        }

        let variable_values = coercion::coerce_variable_values(
            self.schema.types(),
            op.variable_definitions,
            variable_inputs,
            Some(self.resolvers.scalar_coercers()),
        ).map_err(|errors| Response::from_errors(
            errors.into_iter().map(ExecutionError::InvalidVariable),
        ))?;

        let source_stream = executor::create_source_stream(
            &self.schema,
            &self.resolvers,
            &document,
            op,
            &variable_values,
            &self.root_value,
        ).map_err(Response::from_errors)?;

        let operation_name = op.name.map(str::to_string);
        let response_stream = ResponseStream {
            consumer: Box::new(consumer),
            document,
            operation_name,
            variable_values,
        };
        Ok(self.subscriptions.attach(source_stream, response_stream).await)
    }

    /// Ends a subscription. Returns `false` if it was already ended.
    pub async fn unsubscribe(&self, handle: &SubscriptionHandle) -> bool {
        self.subscriptions.detach(handle).await
    }

    /// Delivers one event of the source named `source_name`: every
    /// subscription bound to it re-executes with `event` as its root value.
    /// Returns how many responses were delivered.
    ///
    /// https://spec.graphql.org/October2021/#MapSourceToResponseEvent()
    pub async fn publish(&self, source_name: &str, event: impl Into<Value>) -> usize {
        let Some(source) = self.subscriptions.source(source_name) else {
            tracing::trace!(source = source_name, "no subscriptions for published event");
            return 0;
        };
        let event = event.into();
        let streams = source.read_streams().await;
        let deliveries = streams.iter().map(|(&subscription_id, stream)| {
            let event = event.to_owned();
            async move {
                let response = self.execute_event(stream, event).await;
                match stream.consumer.consume(response) {
                    Ok(()) => true,
                    Err(err) => {
                        tracing::warn!(
                            source = source_name,
                            subscription_id,
                            error = %err,
                            "subscription consumer failed",
                        );
                        false
                    },
                }
            }
        });
        let delivered = futures::future::join_all(deliveries).await
            .into_iter()
            .filter(|delivered| *delivered)
            .count();
        tracing::debug!(source = source_name, delivered, "published event");
        delivered
    }

    /// How many subscriptions are currently bound to `source_name`.
    pub async fn subscription_count(&self, source_name: &str) -> usize {
        self.subscriptions.stream_count(source_name).await
    }

    /// https://spec.graphql.org/October2021/#ExecuteSubscriptionEvent()
    async fn execute_event(&self, stream: &ResponseStream, event: Value) -> Response {
        let op = match executor::select_operation(&stream.document, stream.operation_name()) {
            Ok(op) => op,
            Err(err) => return Response::from_errors([err]),
        };
        executor::execute_operation(
            &self.schema,
            &self.resolvers,
            &stream.document,
            op,
            &stream.variable_values,
            event,
        ).await
    }
}
impl std::fmt::Debug for Engine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Engine")
            .field("resolvers", &self.resolvers)
            .field("root_value", &self.root_value)
            .finish_non_exhaustive()
    }
}
