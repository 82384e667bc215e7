//! HTTP edge layer for Clarity Relay.
//!
//! Axum-based router at `/api/` with session-cookie routing, permissive
//! CORS, and plain-text error bodies.

pub mod error;
pub mod handlers;
pub mod router;
pub mod session;
