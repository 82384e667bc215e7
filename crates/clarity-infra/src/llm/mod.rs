//! Inference provider implementations.
//!
//! Contains concrete implementations of the [`InferenceProvider`] trait
//! defined in `clarity-core`. The single upstream is Cloudflare Workers AI.

pub mod workers_ai;
