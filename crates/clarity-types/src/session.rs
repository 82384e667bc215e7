use serde::{Deserialize, Serialize};
use uuid::Uuid;

use std::fmt;

/// Opaque per-client key correlating requests to a conversation.
///
/// The value is read from the `session-id` cookie exactly as the client
/// sent it -- the session space is user-controlled, not authenticated, so
/// no format validation is applied. Freshly minted ids are random v4 UUIDs.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SessionId(pub String);

impl SessionId {
    /// Mint a fresh session id (cryptographically random UUID).
    pub fn mint() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    /// Wrap a client-supplied cookie value, accepted as-is.
    pub fn from_cookie(value: &str) -> Self {
        Self(value.to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SessionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mint_produces_distinct_ids() {
        let a = SessionId::mint();
        let b = SessionId::mint();
        assert_ne!(a, b);
    }

    #[test]
    fn test_mint_is_valid_uuid() {
        let id = SessionId::mint();
        assert!(Uuid::parse_str(id.as_str()).is_ok());
    }

    #[test]
    fn test_from_cookie_accepts_arbitrary_values() {
        // Malformed or attacker-supplied values are lookup keys, nothing more.
        let id = SessionId::from_cookie("not-a-uuid; definitely");
        assert_eq!(id.as_str(), "not-a-uuid; definitely");
    }

    #[test]
    fn test_display_matches_inner() {
        let id = SessionId::from_cookie("abc-123");
        assert_eq!(id.to_string(), "abc-123");
    }
}
