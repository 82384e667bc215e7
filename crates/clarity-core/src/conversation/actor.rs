//! Conversation actor: exclusive owner of one session's message log.
//!
//! The actor mediates every inference call for its session: it loads the
//! stored log, appends the user message, sends the system prompt plus the
//! recent window upstream, appends the assistant reply, trims to the
//! window, and persists the whole value in one write.
//!
//! Collaborator handles (store, provider) are injected at construction;
//! the actor reads nothing from ambient scope. Serialization of same-
//! session calls is the registry's job, not the actor's -- see
//! [`super::registry::ActorRegistry`].

use std::sync::Arc;

use tracing::debug;

use clarity_types::chat::{ChatTurn, Conversation, StoredMessage};
use clarity_types::error::ChatError;
use clarity_types::llm::{CompletionRequest, Message, MessageRole};
use clarity_types::session::SessionId;

use crate::conversation::store::ConversationStore;
use crate::llm::provider::InferenceProvider;
use crate::prompt::SYSTEM_PROMPT;

/// Exclusive owner and serializer of one session's message log and
/// inference calls.
pub struct ConversationActor<S: ConversationStore, P: InferenceProvider> {
    session: SessionId,
    store: Arc<S>,
    provider: Arc<P>,
    max_tokens: u32,
}

impl<S: ConversationStore, P: InferenceProvider> ConversationActor<S, P> {
    /// Create an actor for a session with injected collaborator handles.
    pub fn new(session: SessionId, store: Arc<S>, provider: Arc<P>, max_tokens: u32) -> Self {
        Self {
            session,
            store,
            provider,
            max_tokens,
        }
    }

    /// The session this actor owns.
    pub fn session(&self) -> &SessionId {
        &self.session
    }

    /// Run one chat turn: append the user message, call the model with the
    /// recent window, append the reply, trim, persist.
    ///
    /// Exactly one durable write and one outbound call per turn. The write
    /// happens only after the inference call succeeds, so a failed turn
    /// leaves the stored log untouched.
    pub async fn chat(&self, message: &str) -> Result<ChatTurn, ChatError> {
        if message.is_empty() {
            return Err(ChatError::InvalidMessage);
        }

        let mut conversation = self
            .store
            .get(&self.session)
            .await?
            .unwrap_or_default();

        conversation.messages.push(StoredMessage::user(message));

        let request = self.build_request(&conversation);
        debug!(
            session = %self.session,
            window = request.messages.len() - 1,
            "dispatching completion"
        );
        let completion = self.provider.complete(&request).await?;

        let assistant = StoredMessage::assistant(completion.response);
        let turn = ChatTurn {
            response: assistant.content.clone(),
            timestamp: assistant.timestamp,
        };
        conversation.messages.push(assistant);

        conversation.truncate_to_window();
        self.store.put(&self.session, &conversation).await?;

        Ok(turn)
    }

    /// The full stored log (already bounded), or empty if none exists.
    pub async fn history(&self) -> Result<Conversation, ChatError> {
        Ok(self
            .store
            .get(&self.session)
            .await?
            .unwrap_or_default())
    }

    /// Delete the stored conversation entirely. Idempotent.
    pub async fn reset(&self) -> Result<(), ChatError> {
        self.store.delete(&self.session).await?;
        debug!(session = %self.session, "conversation reset");
        Ok(())
    }

    /// Model input: the fixed system instruction followed by the most
    /// recent [`CONTEXT_WINDOW`] messages, oldest first.
    fn build_request(&self, conversation: &Conversation) -> CompletionRequest {
        let window = conversation.recent_window();
        let mut messages = Vec::with_capacity(window.len() + 1);
        messages.push(Message {
            role: MessageRole::System,
            content: SYSTEM_PROMPT.to_string(),
        });
        messages.extend(window.iter().map(|m| Message {
            role: m.role.clone(),
            content: m.content.clone(),
        }));

        CompletionRequest {
            messages,
            max_tokens: self.max_tokens,
        }
    }
}
