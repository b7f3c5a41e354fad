//! Per-request CSRF token.
//!
//! A token is minted once for a request (or pulled from the request
//! extensions when some middleware already stored one) and handed to the
//! render pipeline as a lazy accessor.

use uuid::Uuid;

/// Opaque per-request CSRF token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CsrfToken(String);

impl CsrfToken {
    pub fn generate() -> Self {
        Self(Uuid::new_v4().simple().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for CsrfToken {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tokens_are_unique() {
        assert_ne!(CsrfToken::generate(), CsrfToken::generate());
    }

    #[test]
    fn token_is_hex_only() {
        let token = CsrfToken::generate();
        assert_eq!(token.as_str().len(), 32);
        assert!(token.as_str().chars().all(|c| c.is_ascii_hexdigit()));
    }
}
