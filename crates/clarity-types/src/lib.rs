//! Shared domain types for Clarity Relay.
//!
//! This crate contains the core domain types used across the relay:
//! sessions, conversations, inference request/response shapes, and their
//! associated error types.
//!
//! Zero infrastructure dependencies -- only serde, uuid, chrono, thiserror.

pub mod chat;
pub mod config;
pub mod error;
pub mod llm;
pub mod session;
