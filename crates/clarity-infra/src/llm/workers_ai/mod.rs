//! Cloudflare Workers AI inference provider implementation.
//!
//! This module provides the [`WorkersAiProvider`] which implements the
//! [`InferenceProvider`](clarity_core::llm::provider::InferenceProvider)
//! trait against the Workers AI REST API.

pub mod client;
pub mod types;

pub use client::WorkersAiProvider;
