//! Opaque session tokens and the cookie that carries them.
//!
//! Session tokens are random strings; only their SHA-256 hash is stored
//! server-side so a database leak does not compromise active sessions. The
//! plaintext token travels in an `HttpOnly` cookie.

use axum::http::{HeaderMap, HeaderValue};
use sha2::{Digest, Sha256};
use uuid::Uuid;

/// Name of the session cookie.
pub const SESSION_COOKIE: &str = "ticklist_session";

/// Default session lifetime in hours (7 days).
const DEFAULT_SESSION_TTL_HOURS: i64 = 168;

/// Configuration for session issuance and the session cookie.
#[derive(Debug, Clone)]
pub struct SessionConfig {
    /// Session lifetime in hours (default: 168).
    pub ttl_hours: i64,
    /// Whether to set the `Secure` attribute on the cookie (default: false,
    /// suitable for plain-HTTP local development).
    pub cookie_secure: bool,
}

impl SessionConfig {
    /// Load session configuration from environment variables.
    ///
    /// | Env Var                 | Default |
    /// |-------------------------|---------|
    /// | `SESSION_TTL_HOURS`     | `168`   |
    /// | `SESSION_COOKIE_SECURE` | `false` |
    pub fn from_env() -> Self {
        let ttl_hours: i64 = std::env::var("SESSION_TTL_HOURS")
            .unwrap_or_else(|_| DEFAULT_SESSION_TTL_HOURS.to_string())
            .parse()
            .expect("SESSION_TTL_HOURS must be a valid i64");

        let cookie_secure: bool = std::env::var("SESSION_COOKIE_SECURE")
            .unwrap_or_else(|_| "false".into())
            .parse()
            .expect("SESSION_COOKIE_SECURE must be true or false");

        Self {
            ttl_hours,
            cookie_secure,
        }
    }
}

/// Generate a cryptographically random session token.
///
/// Returns a tuple of `(plaintext_token, sha256_hex_hash)`. The plaintext is
/// sent to the client; only the hash should be persisted server-side.
pub fn generate_session_token() -> (String, String) {
    let plaintext = Uuid::new_v4().to_string();
    let hash = hash_session_token(&plaintext);
    (plaintext, hash)
}

/// Compute the SHA-256 hex digest of a session token.
///
/// Use this to compare an incoming cookie token against the stored hash.
pub fn hash_session_token(token: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(token.as_bytes());
    format!("{:x}", hasher.finalize())
}

/// Extract the session token from the `Cookie` request header, if present.
pub fn session_token_from_headers(headers: &HeaderMap) -> Option<String> {
    let cookie = headers.get("cookie")?;
    let s = cookie.to_str().ok()?;
    for part in s.split(';') {
        let p = part.trim();
        if let Some((name, value)) = p.split_once('=') {
            if name == SESSION_COOKIE {
                return Some(value.to_string());
            }
        }
    }
    None
}

/// Build the `Set-Cookie` value that establishes a session.
///
/// `HttpOnly` keeps scripts away from the token; `SameSite=Lax` covers the
/// plain-navigation flows this service serves.
pub fn session_cookie(token: &str, config: &SessionConfig) -> HeaderValue {
    let max_age = config.ttl_hours * 3600;
    let mut cookie = format!("{SESSION_COOKIE}={token}; HttpOnly; SameSite=Lax; Path=/; Max-Age={max_age}");
    if config.cookie_secure {
        cookie.push_str("; Secure");
    }
    HeaderValue::from_str(&cookie).expect("cookie value is valid ASCII")
}

/// Build the `Set-Cookie` value that clears the session cookie.
pub fn clear_session_cookie(config: &SessionConfig) -> HeaderValue {
    let mut cookie = format!(
        "{SESSION_COOKIE}=deleted; Expires=Thu, 01 Jan 1970 00:00:00 GMT; HttpOnly; SameSite=Lax; Path=/; Max-Age=0"
    );
    if config.cookie_secure {
        cookie.push_str("; Secure");
    }
    HeaderValue::from_str(&cookie).expect("cookie value is valid ASCII")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_config() -> SessionConfig {
        SessionConfig {
            ttl_hours: 168,
            cookie_secure: false,
        }
    }

    #[test]
    fn test_session_token_hash_matches() {
        let (plaintext, hash) = generate_session_token();

        // Re-hashing the same plaintext must produce the same digest.
        let rehashed = hash_session_token(&plaintext);
        assert_eq!(hash, rehashed, "hash of the same token must be stable");

        // Sanity: the hash should be a 64-char hex string (SHA-256).
        assert_eq!(hash.len(), 64);
    }

    #[test]
    fn test_tokens_are_unique() {
        let (a, _) = generate_session_token();
        let (b, _) = generate_session_token();
        assert_ne!(a, b);
    }

    #[test]
    fn test_cookie_roundtrip() {
        let (token, _) = generate_session_token();
        let cookie = session_cookie(&token, &test_config());

        let mut headers = HeaderMap::new();
        headers.insert("cookie", strip_attributes(&cookie));

        let parsed = session_token_from_headers(&headers).expect("token should parse back out");
        assert_eq!(parsed, token);
    }

    #[test]
    fn test_parse_among_other_cookies() {
        let mut headers = HeaderMap::new();
        headers.insert(
            "cookie",
            HeaderValue::from_static("theme=dark; ticklist_session=abc-123; lang=en"),
        );
        assert_eq!(
            session_token_from_headers(&headers).as_deref(),
            Some("abc-123")
        );
    }

    #[test]
    fn test_missing_cookie_is_none() {
        let headers = HeaderMap::new();
        assert!(session_token_from_headers(&headers).is_none());

        let mut headers = HeaderMap::new();
        headers.insert("cookie", HeaderValue::from_static("theme=dark"));
        assert!(session_token_from_headers(&headers).is_none());
    }

    #[test]
    fn test_secure_attribute_follows_config() {
        let insecure = session_cookie("tok", &test_config());
        assert!(!insecure.to_str().unwrap().contains("Secure"));

        let config = SessionConfig {
            ttl_hours: 1,
            cookie_secure: true,
        };
        let secure = session_cookie("tok", &config);
        let value = secure.to_str().unwrap();
        assert!(value.contains("Secure"));
        assert!(value.contains("Max-Age=3600"));
    }

    #[test]
    fn test_clear_cookie_expires_immediately() {
        let value = clear_session_cookie(&test_config());
        let s = value.to_str().unwrap();
        assert!(s.contains("Max-Age=0"));
        assert!(s.contains("Expires=Thu, 01 Jan 1970"));
    }

    /// Reduce a `Set-Cookie` value to its leading `name=value` pair, the way
    /// a browser would send it back.
    fn strip_attributes(cookie: &HeaderValue) -> HeaderValue {
        let s = cookie.to_str().unwrap();
        let pair = s.split(';').next().unwrap();
        HeaderValue::from_str(pair).unwrap()
    }
}
