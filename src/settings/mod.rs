//! Session Settings
//!
//! Holds the bearer token used for authenticated calls. The token is handed
//! to API clients through [`CredentialProvider`] instead of being read from
//! global state at call time. [`SessionStore`] keeps it encrypted on disk
//! between runs.

pub mod storage;

pub use storage::*;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::sync::{Arc, RwLock};

/// Source of the bearer token attached to authenticated requests
pub trait CredentialProvider: Send + Sync {
    fn bearer_token(&self) -> Option<String>;
}

/// Provider that never has a token
#[derive(Debug, Clone, Copy, Default)]
pub struct NoCredentials;

impl CredentialProvider for NoCredentials {
    fn bearer_token(&self) -> Option<String> {
        None
    }
}

/// Shared, replaceable in-memory token.
///
/// Clones share the same slot, so a login performed through one handle is
/// visible to every client built from another.
#[derive(Debug, Clone, Default)]
pub struct TokenCredentials {
    token: Arc<RwLock<Option<String>>>,
}

impl TokenCredentials {
    pub fn new(token: Option<String>) -> Self {
        Self {
            token: Arc::new(RwLock::new(token.filter(|t| !t.is_empty()))),
        }
    }

    pub fn set(&self, token: Option<String>) {
        if let Ok(mut slot) = self.token.write() {
            *slot = token.filter(|t| !t.is_empty());
        }
    }
}

impl CredentialProvider for TokenCredentials {
    fn bearer_token(&self) -> Option<String> {
        self.token.read().ok().and_then(|t| t.clone())
    }
}

/// Persisted login state
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Session {
    /// Bearer token (encrypted at rest, decrypted when loaded)
    pub token: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    pub saved_at: DateTime<Utc>,
}

impl Session {
    pub fn new(token: impl Into<String>, email: Option<String>) -> Self {
        Self {
            token: token.into(),
            email,
            saved_at: Utc::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn token_credentials_share_slot_between_clones() {
        let creds = TokenCredentials::new(None);
        let other = creds.clone();
        assert_eq!(other.bearer_token(), None);

        creds.set(Some("abc123".to_string()));
        assert_eq!(other.bearer_token().as_deref(), Some("abc123"));

        creds.set(None);
        assert_eq!(other.bearer_token(), None);
    }

    #[test]
    fn empty_token_counts_as_absent() {
        let creds = TokenCredentials::new(Some(String::new()));
        assert_eq!(creds.bearer_token(), None);
    }
}
