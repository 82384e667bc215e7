//! Inference provider abstractions for Clarity Relay.
//!
//! This module defines the `InferenceProvider` trait that concrete
//! upstream clients implement.

pub mod provider;
