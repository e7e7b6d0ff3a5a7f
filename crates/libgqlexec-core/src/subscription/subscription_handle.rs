/// Identifies one active subscription; pass it to
/// [`Engine::unsubscribe()`](crate::execution::Engine::unsubscribe) to end
/// it.
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub struct SubscriptionHandle {
    pub(crate) id: u64,
    pub(crate) source_name: String,
}
impl SubscriptionHandle {
    pub fn id(&self) -> u64 {
        self.id
    }

    /// The name of the source stream this subscription is bound to.
    pub fn source_name(&self) -> &str {
        self.source_name.as_str()
    }
}
