use crate::Value;
use crate::coercion::ScalarCoercers;
use crate::execution::AbstractTypeResolver;
use crate::execution::Arguments;
use crate::execution::FieldError;
use crate::execution::FieldResolver;
use crate::execution::RegistrationError;
use crate::execution::StreamResolver;
use crate::execution::resolver::AsyncFieldResolver;
use crate::execution::resolver::PropertyResolver;
use crate::execution::resolver::SyncFieldResolver;
use crate::schema::Schema;
use crate::subscription::SourceStream;
use crate::types::GraphQLType;
use std::collections::HashMap;
use std::future::Future;
use std::sync::Arc;

type Result<T> = std::result::Result<T, RegistrationError>;

/// The resolvers and coercers an [`Engine`](crate::execution::Engine)
/// dispatches to. Immutable once built.
#[derive(Clone, Default)]
pub struct ResolverRegistry {
    abstract_type_resolver: Option<Arc<dyn AbstractTypeResolver>>,
    /// Type name -> field name -> resolver.
    field_resolvers: HashMap<String, HashMap<String, Arc<dyn FieldResolver>>>,
    scalar_coercers: ScalarCoercers,
    stream_resolvers: HashMap<String, Arc<dyn StreamResolver>>,
}
impl ResolverRegistry {
    /// Helper function that just delegates to
    /// [`ResolverRegistryBuilder::new()`].
    pub fn builder(schema: &Schema) -> ResolverRegistryBuilder<'_> {
        ResolverRegistryBuilder::new(schema)
    }

    pub fn abstract_type_resolver(&self) -> Option<&dyn AbstractTypeResolver> {
        self.abstract_type_resolver.as_deref()
    }

    pub fn field_resolver(&self, type_name: &str, field_name: &str) -> Option<&dyn FieldResolver> {
        self.field_resolvers.get(type_name)?
            .get(field_name)
            .map(Arc::as_ref)
    }

    pub fn scalar_coercers(&self) -> &ScalarCoercers {
        &self.scalar_coercers
    }

    pub fn stream_resolver(&self, field_name: &str) -> Option<&dyn StreamResolver> {
        self.stream_resolvers.get(field_name).map(Arc::as_ref)
    }
}
impl std::fmt::Debug for ResolverRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut field_resolvers: Vec<String> = self.field_resolvers.iter()
            .flat_map(|(type_name, resolvers)| {
                resolvers.keys().map(move |field_name| format!("{type_name}.{field_name}"))
            })
            .collect();
        field_resolvers.sort();
        f.debug_struct("ResolverRegistry")
            .field("abstract_type_resolver", &self.abstract_type_resolver.is_some())
            .field("field_resolvers", &field_resolvers)
            .field("scalar_coercers", &self.scalar_coercers.keys().collect::<Vec<_>>())
            .field("stream_resolvers", &self.stream_resolvers.keys().collect::<Vec<_>>())
            .finish()
    }
}

/// Registers resolvers against the types and fields of a [`Schema`].
///
/// Every registration is checked against the schema as it is made, so a
/// misspelled type or field fails at startup rather than at execution time.
pub struct ResolverRegistryBuilder<'schema> {
    registry: ResolverRegistry,
    schema: &'schema Schema,
}
impl<'schema> ResolverRegistryBuilder<'schema> {
    pub fn new(schema: &'schema Schema) -> Self {
        Self {
            registry: ResolverRegistry::default(),
            schema,
        }
    }

    pub fn add_field_resolver<F>(
        self,
        type_name: &str,
        field_name: &str,
        resolver: F,
    ) -> Result<Self>
    where
        F: Fn(&Value, &Arguments) -> std::result::Result<Value, FieldError>
            + Send
            + Sync
            + 'static,
    {
        self.add_resolver(type_name, field_name, Arc::new(SyncFieldResolver(resolver)))
    }

    pub fn add_async_field_resolver<F, Fut>(
        self,
        type_name: &str,
        field_name: &str,
        resolver: F,
    ) -> Result<Self>
    where
        F: Fn(Value, Arguments) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = std::result::Result<Value, FieldError>> + Send + 'static,
    {
        self.add_resolver(type_name, field_name, Arc::new(AsyncFieldResolver(resolver)))
    }

    /// Registers any [`FieldResolver`] implementation.
    pub fn add_resolver(
        mut self,
        type_name: &str,
        field_name: &str,
        resolver: Arc<dyn FieldResolver>,
    ) -> Result<Self> {
        let obj_type = match self.schema.type_definition(type_name) {
            Some(GraphQLType::Object(obj_type)) => obj_type,
            Some(_) => return Err(RegistrationError::NotAnObjectType {
                type_name: type_name.to_string(),
            }),
            None => return Err(RegistrationError::UndefinedType {
                type_name: type_name.to_string(),
            }),
        };
        let Some(field) = obj_type.field(field_name) else {
            return Err(RegistrationError::UndefinedField {
                field_name: field_name.to_string(),
                type_name: type_name.to_string(),
            });
        };
        if field.is_introspection_field() || type_name.starts_with("__") {
            return Err(RegistrationError::IntrospectionField {
                field_name: field_name.to_string(),
                type_name: type_name.to_string(),
            });
        }

        let type_resolvers = self.registry.field_resolvers
            .entry(type_name.to_string())
            .or_default();
        if type_resolvers.contains_key(field_name) {
            return Err(RegistrationError::DuplicateFieldResolver {
                field_name: field_name.to_string(),
                type_name: type_name.to_string(),
            });
        }
        type_resolvers.insert(field_name.to_string(), resolver);
        Ok(self)
    }

    /// Registers the resolver that opens the source stream for a field of
    /// the subscription root type.
    pub fn add_stream_resolver<F>(mut self, field_name: &str, resolver: F) -> Result<Self>
    where
        F: Fn(&Value, &Arguments) -> std::result::Result<SourceStream, FieldError>
            + Send
            + Sync
            + 'static,
    {
        let Some(subscription_type) = self.schema.subscription_type() else {
            return Err(RegistrationError::NoSubscriptionType);
        };
        if subscription_type.field(field_name).is_none() {
            return Err(RegistrationError::UndefinedField {
                field_name: field_name.to_string(),
                type_name: subscription_type.name().to_string(),
            });
        }
        if self.registry.stream_resolvers.contains_key(field_name) {
            return Err(RegistrationError::DuplicateStreamResolver {
                field_name: field_name.to_string(),
            });
        }
        self.registry.stream_resolvers.insert(field_name.to_string(), Arc::new(resolver));
        Ok(self)
    }

    /// Registers the coercer used for a custom scalar's inputs and results.
    pub fn add_scalar_coercer<C>(mut self, scalar_name: &str, coercer: C) -> Result<Self>
    where
        C: Fn(&Value) -> Option<Value> + Send + Sync + 'static,
    {
        match self.schema.type_definition(scalar_name) {
            Some(GraphQLType::Scalar(_)) => (),
            Some(_) => return Err(RegistrationError::NotACustomScalar {
                scalar_name: scalar_name.to_string(),
            }),
            None => return Err(RegistrationError::UndefinedType {
                type_name: scalar_name.to_string(),
            }),
        }
        if self.registry.scalar_coercers.contains_key(scalar_name) {
            return Err(RegistrationError::DuplicateScalarCoercer {
                scalar_name: scalar_name.to_string(),
            });
        }
        self.registry.scalar_coercers.insert(scalar_name.to_string(), Arc::new(coercer));
        Ok(self)
    }

    /// Registers a resolver that reads the parent object's entry of the same
    /// name for every object field that has no resolver yet.
    ///
    /// Subscription root fields are left alone so that they keep resolving to
    /// the event that triggered them.
    pub fn add_property_resolvers(mut self) -> Self {
        let schema = self.schema;
        let subscription_type_name = schema.subscription_type().map(|sub_type| sub_type.name());
        for obj_type in schema.types().values().filter_map(GraphQLType::as_object) {
            if obj_type.name().starts_with("__")
                || subscription_type_name == Some(obj_type.name()) {
                continue;
            }
            let type_resolvers = self.registry.field_resolvers
                .entry(obj_type.name().to_string())
                .or_default();
            for field in obj_type.fields().values() {
                if field.is_introspection_field() {
                    continue;
                }
                type_resolvers.entry(field.name().to_string()).or_insert_with(|| {
                    Arc::new(PropertyResolver {
                        property: field.name().to_string(),
                    })
                });
            }
        }
        self
    }

    /// Replaces the default `__typename`-entry lookup used to pick the
    /// concrete type of interface and union values.
    pub fn set_abstract_type_resolver<R>(mut self, resolver: R) -> Self
    where
        R: Fn(&Value, &str) -> Option<String> + Send + Sync + 'static,
    {
        self.registry.abstract_type_resolver = Some(Arc::new(resolver));
        self
    }

    pub fn build(self) -> ResolverRegistry {
        tracing::debug!(
            field_resolvers = self.registry.field_resolvers.values()
                .map(HashMap::len)
                .sum::<usize>(),
            stream_resolvers = self.registry.stream_resolvers.len(),
            "built resolver registry",
        );
        self.registry
    }
}
