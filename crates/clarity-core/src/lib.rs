//! Business logic and collaborator trait definitions for Clarity Relay.
//!
//! This crate defines the "ports" (storage and inference traits) that the
//! infrastructure layer implements, the per-session conversation actor,
//! and the registry that guarantees single-writer access per session.
//! It depends only on `clarity-types` -- never on `clarity-infra` or any
//! database/IO crate.

pub mod conversation;
pub mod llm;
pub mod prompt;
