//! Infrastructure layer for Clarity Relay.
//!
//! Contains implementations of the collaborator traits defined in
//! `clarity-core`: SQLite conversation storage and the Workers AI
//! inference client, plus configuration loading.

pub mod config;
pub mod llm;
pub mod sqlite;
