//! Conversation ownership and persistence abstractions for Clarity Relay.
//!
//! This module defines the `ConversationStore` trait the infrastructure
//! layer implements, the `ConversationActor` that owns one session's log,
//! and the `ActorRegistry` that serializes access per session id.

pub mod actor;
pub mod registry;
pub mod store;
