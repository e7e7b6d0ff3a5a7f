/// Releases an external notification registration.
pub(crate) type ReleaseHook = Box<dyn FnOnce() + Send + Sync>;

/// An external event source a subscription root field is bound to.
///
/// Events reach a source through
/// [`Engine::publish()`](crate::execution::Engine::publish) under the
/// source's name. Many subscriptions may be bound to the same source name;
/// the source is released (its release hooks run) once the last of them
/// unsubscribes.
pub struct SourceStream {
    name: String,
    release_hook: Option<ReleaseHook>,
}
impl SourceStream {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            release_hook: None,
        }
    }

    /// Registers a callback that tears down whatever external registration
    /// feeds this source.
    pub fn on_release(mut self, release_hook: impl FnOnce() + Send + Sync + 'static) -> Self {
        self.release_hook = Some(Box::new(release_hook));
        self
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    pub(crate) fn into_parts(self) -> (String, Option<ReleaseHook>) {
        (self.name, self.release_hook)
    }
}
impl std::fmt::Debug for SourceStream {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SourceStream")
            .field("name", &self.name)
            .field("has_release_hook", &self.release_hook.is_some())
            .finish()
    }
}
