//! Actor registry: explicit per-session placement with single-writer access.
//!
//! The hosting contract is that requests for the same session id are
//! processed one at a time against that session's storage. The registry
//! makes that guarantee explicit: a `DashMap` of per-session async locks,
//! plus the shared store/provider handles every actor is built from.
//!
//! `checkout` awaits the session's lock and vends an [`ActorHandle`] that
//! holds it for the duration of the operation. Same-session requests
//! serialize at the lock; different sessions proceed concurrently. Lock
//! entries are one `Arc<Mutex<()>>` apiece and are never pruned.

use std::ops::Deref;
use std::sync::Arc;

use dashmap::DashMap;
use tokio::sync::{Mutex, OwnedMutexGuard};

use clarity_types::session::SessionId;

use crate::conversation::actor::ConversationActor;
use crate::conversation::store::ConversationStore;
use crate::llm::provider::InferenceProvider;

/// Sharded per-session actor placement, keyed by session id.
pub struct ActorRegistry<S: ConversationStore, P: InferenceProvider> {
    store: Arc<S>,
    provider: Arc<P>,
    max_tokens: u32,
    /// Per-session write locks (session id -> lock).
    locks: DashMap<SessionId, Arc<Mutex<()>>>,
}

impl<S: ConversationStore, P: InferenceProvider> ActorRegistry<S, P> {
    /// Create a registry over shared collaborator handles.
    pub fn new(store: Arc<S>, provider: Arc<P>, max_tokens: u32) -> Self {
        Self {
            store,
            provider,
            max_tokens,
            locks: DashMap::new(),
        }
    }

    /// Acquire the session's lock and return an actor bound to it.
    ///
    /// The returned handle owns the lock guard; dropping it releases the
    /// session for the next request.
    pub async fn checkout(&self, session: SessionId) -> ActorHandle<S, P> {
        let lock = {
            let entry = self
                .locks
                .entry(session.clone())
                .or_insert_with(|| Arc::new(Mutex::new(())));
            Arc::clone(entry.value())
        };
        let guard = lock.lock_owned().await;

        ActorHandle {
            actor: ConversationActor::new(
                session,
                Arc::clone(&self.store),
                Arc::clone(&self.provider),
                self.max_tokens,
            ),
            _guard: guard,
        }
    }

    /// Number of distinct sessions seen by this registry.
    pub fn session_count(&self) -> usize {
        self.locks.len()
    }
}

/// A checked-out actor holding its session's write lock.
pub struct ActorHandle<S: ConversationStore, P: InferenceProvider> {
    actor: ConversationActor<S, P>,
    _guard: OwnedMutexGuard<()>,
}

impl<S: ConversationStore, P: InferenceProvider> Deref for ActorHandle<S, P> {
    type Target = ConversationActor<S, P>;

    fn deref(&self) -> &Self::Target {
        &self.actor
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::collections::HashMap;
    use std::sync::Mutex as StdMutex;
    use std::time::Duration;

    use clarity_types::chat::Conversation;
    use clarity_types::error::RepositoryError;
    use clarity_types::llm::{CompletionRequest, CompletionResponse, LlmError};

    #[derive(Default)]
    struct MemoryStore {
        data: StdMutex<HashMap<String, Conversation>>,
    }

    impl ConversationStore for MemoryStore {
        async fn get(&self, session: &SessionId) -> Result<Option<Conversation>, RepositoryError> {
            Ok(self.data.lock().unwrap().get(session.as_str()).cloned())
        }

        async fn put(
            &self,
            session: &SessionId,
            conversation: &Conversation,
        ) -> Result<(), RepositoryError> {
            self.data
                .lock()
                .unwrap()
                .insert(session.as_str().to_string(), conversation.clone());
            Ok(())
        }

        async fn delete(&self, session: &SessionId) -> Result<(), RepositoryError> {
            self.data.lock().unwrap().remove(session.as_str());
            Ok(())
        }
    }

    /// Provider that dwells before replying, to widen race windows.
    struct SlowProvider;

    impl InferenceProvider for SlowProvider {
        fn name(&self) -> &str {
            "slow"
        }

        async fn complete(
            &self,
            _request: &CompletionRequest,
        ) -> Result<CompletionResponse, LlmError> {
            tokio::time::sleep(Duration::from_millis(10)).await;
            Ok(CompletionResponse {
                response: "done".to_string(),
            })
        }
    }

    fn registry() -> Arc<ActorRegistry<MemoryStore, SlowProvider>> {
        Arc::new(ActorRegistry::new(
            Arc::new(MemoryStore::default()),
            Arc::new(SlowProvider),
            1024,
        ))
    }

    #[tokio::test]
    async fn test_same_session_requests_serialize() {
        let registry = registry();
        let session = SessionId::mint();

        // A burst of concurrent chats for one session must not interleave:
        // every turn's read-modify-write lands, so the final log holds all
        // four turns (8 messages).
        let mut handles = Vec::new();
        for i in 0..4 {
            let registry = Arc::clone(&registry);
            let session = session.clone();
            handles.push(tokio::spawn(async move {
                let actor = registry.checkout(session).await;
                actor.chat(&format!("burst {i}")).await.unwrap();
            }));
        }
        for handle in handles {
            handle.await.unwrap();
        }

        let actor = registry.checkout(session).await;
        assert_eq!(actor.history().await.unwrap().messages.len(), 8);
    }

    #[tokio::test]
    async fn test_distinct_sessions_run_concurrently() {
        let registry = registry();
        let a = SessionId::mint();
        let b = SessionId::mint();

        // Hold a's lock while checking out b; if sessions shared a lock
        // this would deadlock the test.
        let held = registry.checkout(a).await;
        let other = registry.checkout(b).await;
        other.chat("independent").await.unwrap();
        drop(held);

        assert_eq!(registry.session_count(), 2);
    }

    #[tokio::test]
    async fn test_checkout_reuses_lock_entry_per_session() {
        let registry = registry();
        let session = SessionId::mint();

        drop(registry.checkout(session.clone()).await);
        drop(registry.checkout(session).await);

        assert_eq!(registry.session_count(), 1);
    }
}
