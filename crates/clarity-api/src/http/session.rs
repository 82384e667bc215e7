//! Session identity at the edge: cookie resolution and re-issue.
//!
//! Every API request is correlated to a session by the `session-id`
//! cookie. A request without one gets a freshly minted id. The cookie is
//! re-issued unconditionally on every API response, pinning the id for a
//! year -- HttpOnly, path-scoped, lax same-site.

use axum::extract::Request;
use axum::http::header::{COOKIE, SET_COOKIE};
use axum::http::{HeaderMap, HeaderValue};
use axum::middleware::Next;
use axum::response::Response;

use clarity_types::session::SessionId;

/// Name of the session-identifying cookie.
pub const SESSION_COOKIE: &str = "session-id";

/// One year, in seconds.
const COOKIE_MAX_AGE: u32 = 31_536_000;

/// Read the session id from the request cookies, minting one if absent.
///
/// No validation beyond presence: a malformed or attacker-supplied value
/// is accepted as-is and used purely as a lookup key.
pub fn resolve_session(headers: &HeaderMap) -> SessionId {
    for header in headers.get_all(COOKIE) {
        let Ok(raw) = header.to_str() else { continue };
        for pair in raw.split(';') {
            if let Some((name, value)) = pair.trim().split_once('=') {
                if name == SESSION_COOKIE && !value.is_empty() {
                    return SessionId::from_cookie(value);
                }
            }
        }
    }
    SessionId::mint()
}

/// Build the `Set-Cookie` value pinning a session id.
pub fn session_cookie(session: &SessionId) -> String {
    format!(
        "{SESSION_COOKIE}={}; Path=/; HttpOnly; SameSite=Lax; Max-Age={COOKIE_MAX_AGE}",
        session.as_str()
    )
}

/// Middleware: resolve the session, expose it to handlers, re-issue the
/// cookie on the way out.
pub async fn attach(mut request: Request, next: Next) -> Response {
    let session = resolve_session(request.headers());
    request.extensions_mut().insert(session.clone());

    let mut response = next.run(request).await;

    if let Ok(value) = HeaderValue::from_str(&session_cookie(&session)) {
        response.headers_mut().insert(SET_COOKIE, value);
    }
    response
}

#[cfg(test)]
mod tests {
    use super::*;

    fn headers_with_cookie(raw: &str) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(COOKIE, HeaderValue::from_str(raw).unwrap());
        headers
    }

    #[test]
    fn test_resolve_reads_existing_cookie() {
        let headers = headers_with_cookie("session-id=abc-123");
        assert_eq!(resolve_session(&headers).as_str(), "abc-123");
    }

    #[test]
    fn test_resolve_finds_cookie_among_others() {
        let headers = headers_with_cookie("theme=dark; session-id=xyz; lang=en");
        assert_eq!(resolve_session(&headers).as_str(), "xyz");
    }

    #[test]
    fn test_resolve_mints_when_absent() {
        let headers = HeaderMap::new();
        let a = resolve_session(&headers);
        let b = resolve_session(&headers);
        // Two cookie-less requests get two different fresh ids.
        assert_ne!(a, b);
    }

    #[test]
    fn test_resolve_mints_when_other_cookies_only() {
        let headers = headers_with_cookie("theme=dark");
        let id = resolve_session(&headers);
        assert!(uuid::Uuid::parse_str(id.as_str()).is_ok());
    }

    #[test]
    fn test_resolve_accepts_malformed_value_as_is() {
        let headers = headers_with_cookie("session-id=<script>alert(1)</script>");
        assert_eq!(
            resolve_session(&headers).as_str(),
            "<script>alert(1)</script>"
        );
    }

    #[test]
    fn test_session_cookie_attributes() {
        let cookie = session_cookie(&SessionId::from_cookie("abc"));
        assert_eq!(
            cookie,
            "session-id=abc; Path=/; HttpOnly; SameSite=Lax; Max-Age=31536000"
        );
    }
}
