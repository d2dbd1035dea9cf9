//! Session Storage
//!
//! Keeps the login token in the data directory, encrypted with AES-256-GCM
//! under a per-installation key.

use super::Session;
use aes_gcm::{
    aead::{Aead, KeyInit},
    Aes256Gcm, Nonce,
};
use base64::{engine::general_purpose::STANDARD as BASE64, Engine as _};
use std::path::{Path, PathBuf};
use tokio::fs;
use tracing::{info, warn};

const SESSION_FILE: &str = "session.json";
const KEY_FILE: &str = ".session_key";
const NONCE_SIZE: usize = 12;

/// On-disk session persistence
#[derive(Debug, Clone)]
pub struct SessionStore {
    session_path: PathBuf,
    key_path: PathBuf,
}

impl SessionStore {
    pub fn new(data_dir: &Path) -> Self {
        Self {
            session_path: data_dir.join(SESSION_FILE),
            key_path: data_dir.join(KEY_FILE),
        }
    }

    pub fn path(&self) -> &Path {
        &self.session_path
    }

    async fn ensure_dir(&self) -> anyhow::Result<()> {
        if let Some(parent) = self.session_path.parent() {
            fs::create_dir_all(parent).await?;
        }
        Ok(())
    }

    async fn load_or_create_key(&self) -> anyhow::Result<[u8; 32]> {
        self.ensure_dir().await?;

        if fs::try_exists(&self.key_path).await? {
            let encoded = fs::read_to_string(&self.key_path).await?;
            let bytes = BASE64.decode(encoded.trim())?;
            if let Ok(key) = <[u8; 32]>::try_from(bytes.as_slice()) {
                return Ok(key);
            }
            warn!(path = ?self.key_path, "Session key has wrong length, regenerating");
        }

        let key: [u8; 32] = rand::random();
        fs::write(&self.key_path, BASE64.encode(key)).await?;

        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            fs::set_permissions(&self.key_path, std::fs::Permissions::from_mode(0o600)).await?;
        }

        info!(path = ?self.key_path, "Generated session key");
        Ok(key)
    }

    fn seal(plaintext: &str, key: &[u8; 32]) -> anyhow::Result<String> {
        let cipher = Aes256Gcm::new_from_slice(key)?;
        let nonce_bytes: [u8; NONCE_SIZE] = rand::random();
        let sealed = cipher
            .encrypt(Nonce::from_slice(&nonce_bytes), plaintext.as_bytes())
            .map_err(|e| anyhow::anyhow!("Token encryption failed: {}", e))?;

        let mut out = nonce_bytes.to_vec();
        out.extend(sealed);
        Ok(BASE64.encode(out))
    }

    fn open(sealed: &str, key: &[u8; 32]) -> anyhow::Result<String> {
        let raw = BASE64.decode(sealed)?;
        if raw.len() < NONCE_SIZE {
            anyhow::bail!("Sealed token is truncated");
        }
        let (nonce_bytes, body) = raw.split_at(NONCE_SIZE);
        let cipher = Aes256Gcm::new_from_slice(key)?;
        let plain = cipher
            .decrypt(Nonce::from_slice(nonce_bytes), body)
            .map_err(|e| anyhow::anyhow!("Token decryption failed: {}", e))?;
        Ok(String::from_utf8(plain)?)
    }

    /// Load the saved session, if any.
    ///
    /// A token that no longer decrypts (key rotated or file edited) is
    /// treated as logged out rather than an error.
    pub async fn load(&self) -> anyhow::Result<Option<Session>> {
        if !fs::try_exists(&self.session_path).await? {
            return Ok(None);
        }

        let key = self.load_or_create_key().await?;
        let content = fs::read_to_string(&self.session_path).await?;
        let mut session: Session = serde_json::from_str(&content)?;

        match Self::open(&session.token, &key) {
            Ok(token) => {
                session.token = token;
                Ok(Some(session))
            }
            Err(e) => {
                warn!(error = %e, "Discarding unreadable session token");
                Ok(None)
            }
        }
    }

    pub async fn save(&self, session: &Session) -> anyhow::Result<()> {
        let key = self.load_or_create_key().await?;

        let mut sealed = session.clone();
        sealed.token = Self::seal(&session.token, &key)?;

        fs::write(&self.session_path, serde_json::to_string_pretty(&sealed)?).await?;
        info!(path = ?self.session_path, "Session saved");
        Ok(())
    }

    /// Forget the saved session. Missing files are not an error.
    pub async fn clear(&self) -> anyhow::Result<()> {
        match fs::remove_file(&self.session_path).await {
            Ok(()) => {
                info!("Session cleared");
                Ok(())
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[tokio::test]
    async fn test_session_roundtrip() {
        let dir = TempDir::new().unwrap();
        let store = SessionStore::new(dir.path());

        assert!(store.load().await.unwrap().is_none());

        let session = Session::new("jwt-token-123", Some("hr@acme.test".to_string()));
        store.save(&session).await.unwrap();

        let loaded = store.load().await.unwrap().unwrap();
        assert_eq!(loaded.token, "jwt-token-123");
        assert_eq!(loaded.email.as_deref(), Some("hr@acme.test"));
    }

    #[tokio::test]
    async fn test_token_not_stored_in_plaintext() {
        let dir = TempDir::new().unwrap();
        let store = SessionStore::new(dir.path());
        store.save(&Session::new("very-secret-token", None)).await.unwrap();

        let on_disk = tokio::fs::read_to_string(store.path()).await.unwrap();
        assert!(!on_disk.contains("very-secret-token"));
    }

    #[tokio::test]
    async fn test_clear_is_idempotent() {
        let dir = TempDir::new().unwrap();
        let store = SessionStore::new(dir.path());
        store.save(&Session::new("t", None)).await.unwrap();

        store.clear().await.unwrap();
        store.clear().await.unwrap();
        assert!(store.load().await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_foreign_key_yields_no_session() {
        let dir = TempDir::new().unwrap();
        let store = SessionStore::new(dir.path());
        store.save(&Session::new("t", None)).await.unwrap();

        let other_key: [u8; 32] = rand::random();
        tokio::fs::write(dir.path().join(KEY_FILE), BASE64.encode(other_key))
            .await
            .unwrap();

        assert!(store.load().await.unwrap().is_none());
    }
}
