use crate::subscription::ResponseStream;
use crate::subscription::SourceStream;
use crate::subscription::SubscriptionHandle;
use crate::subscription::source_stream::ReleaseHook;
use indexmap::IndexMap;
use std::collections::HashMap;
use std::sync::Arc;
use std::sync::Mutex;
use std::sync::PoisonError;
use std::sync::atomic::AtomicU64;
use std::sync::atomic::Ordering;
use tokio::sync::RwLock;
use tokio::sync::RwLockReadGuard;

#[derive(Default)]
struct SourceState {
    /// Set once the last stream detaches and the source is released. A
    /// closed entry is no longer reachable from the hub.
    closed: bool,
    release_hooks: Vec<ReleaseHook>,
    streams: IndexMap<u64, Arc<ResponseStream>>,
}

/// The response streams bound to one source name.
///
/// Attaching and detaching take the write lock, event delivery holds the
/// read lock, so membership never changes while an event is delivered.
#[derive(Default)]
pub(crate) struct SourceEntry {
    state: RwLock<SourceState>,
}
impl SourceEntry {
    pub async fn read_streams(&self) -> RwLockReadGuard<'_, IndexMap<u64, Arc<ResponseStream>>> {
        RwLockReadGuard::map(self.state.read().await, |state| &state.streams)
    }
}

/// The per-source notification table of an engine.
#[derive(Default)]
pub(crate) struct SubscriptionHub {
    next_id: AtomicU64,
    sources: Mutex<HashMap<String, Arc<SourceEntry>>>,
}
impl SubscriptionHub {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn attach(&self, source: SourceStream, stream: ResponseStream) -> SubscriptionHandle {
        let (source_name, mut release_hook) = source.into_parts();
        let id = self.next_id.fetch_add(1, Ordering::Relaxed);
        let stream = Arc::new(stream);
        loop {
            let entry = self.sources.lock()
                .unwrap_or_else(PoisonError::into_inner)
                .entry(source_name.to_owned())
                .or_default()
                .clone();
            let mut state = entry.state.write().await;
            // Released by a concurrent detach after it was looked up.
            if state.closed {
                continue;
            }
            state.release_hooks.extend(release_hook.take());
            state.streams.insert(id, stream.clone());
            tracing::debug!(
                source = %source_name,
                subscription_id = id,
                active_streams = state.streams.len(),
                "attached response stream",
            );
            return SubscriptionHandle {
                id,
                source_name,
            };
        }
    }

    /// Detaches a response stream. Detaching the last stream of a source
    /// releases the source. Returns `false` if the handle was not attached.
    pub async fn detach(&self, handle: &SubscriptionHandle) -> bool {
        let Some(entry) = self.source(&handle.source_name) else {
            return false;
        };
        let mut state = entry.state.write().await;
        if state.streams.shift_remove(&handle.id).is_none() {
            return false;
        }
        tracing::debug!(
            source = %handle.source_name,
            subscription_id = handle.id,
            "detached response stream",
        );
        if !state.streams.is_empty() {
            return true;
        }

        state.closed = true;
        {
            let mut sources = self.sources.lock().unwrap_or_else(PoisonError::into_inner);
            let is_current = sources.get(&handle.source_name)
                .is_some_and(|current| Arc::ptr_eq(current, &entry));
            if is_current {
                sources.remove(&handle.source_name);
            }
        }
        let release_hooks = std::mem::take(&mut state.release_hooks);
        drop(state);
        for release_hook in release_hooks {
            release_hook();
        }
        tracing::debug!(source = %handle.source_name, "released source stream");
        true
    }

    pub fn source(&self, source_name: &str) -> Option<Arc<SourceEntry>> {
        self.sources.lock()
            .unwrap_or_else(PoisonError::into_inner)
            .get(source_name)
            .cloned()
    }

    pub async fn stream_count(&self, source_name: &str) -> usize {
        match self.source(source_name) {
            Some(entry) => entry.read_streams().await.len(),
            None => 0,
        }
    }
}
