//! Session state provider
//!
//! Single source of truth for the locally persisted session: auth tokens,
//! the signed-in user blob and the last-viewed specification id. Every
//! consumer that used to poke at storage keys directly goes through this
//! provider instead, and observes changes over one watch channel instead
//! of ad hoc storage-event listening.
//!
//! Presence of the access token is the sole authentication signal. There
//! is no expiry check and no refresh flow beyond a best-effort logout.

pub mod store;

pub use store::{FileStorage, MemoryStorage, StorageBackend};

use std::sync::Arc;
use tokio::sync::watch;

/// Storage key for the bearer token.
pub const ACCESS_TOKEN_KEY: &str = "access_token";
/// Storage key for the refresh token.
pub const REFRESH_TOKEN_KEY: &str = "refresh_token";
/// Storage key for the signed-in user blob.
pub const USER_KEY: &str = "user";
/// Storage key for the last-viewed specification id.
pub const LAST_SPEC_KEY: &str = "whisk_last_spec_id";
/// Legacy key a retired page wrote the same pointer under. Read as a
/// fallback, never written.
pub const LEGACY_LAST_SPEC_KEY: &str = "erp_ai_last_spec_id";

/// Snapshot of session-derived state, published on every mutation.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SessionSnapshot {
    pub authenticated: bool,
    pub last_spec_id: Option<String>,
}

/// The session provider. Cheap to clone; all clones share state and the
/// change channel.
#[derive(Clone)]
pub struct SessionState {
    backend: Arc<dyn StorageBackend>,
    tx: Arc<watch::Sender<SessionSnapshot>>,
}

impl SessionState {
    pub fn new(backend: Arc<dyn StorageBackend>) -> Self {
        let state = Self {
            backend,
            tx: Arc::new(watch::channel(SessionSnapshot::default()).0),
        };
        state.publish();
        state
    }

    /// In-memory session, for tests and ephemeral runs.
    pub fn in_memory() -> Self {
        Self::new(Arc::new(MemoryStorage::new()))
    }

    /// Subscribe to session changes.
    pub fn subscribe(&self) -> watch::Receiver<SessionSnapshot> {
        self.tx.subscribe()
    }

    /// Current snapshot.
    pub fn snapshot(&self) -> SessionSnapshot {
        self.tx.borrow().clone()
    }

    pub fn access_token(&self) -> Option<String> {
        self.backend.get(ACCESS_TOKEN_KEY)
    }

    pub fn refresh_token(&self) -> Option<String> {
        self.backend.get(REFRESH_TOKEN_KEY)
    }

    pub fn is_authenticated(&self) -> bool {
        self.access_token().is_some()
    }

    /// Store both tokens. Two separate writes, not atomic; auth checks
    /// only look at the access token.
    pub fn store_tokens(&self, access: &str, refresh: &str) {
        self.write(ACCESS_TOKEN_KEY, access);
        self.write(REFRESH_TOKEN_KEY, refresh);
        self.publish();
    }

    /// Store the signed-in user blob.
    pub fn store_user(&self, user_json: &str) {
        self.write(USER_KEY, user_json);
        self.publish();
    }

    /// Drop every auth key. Called on logout and on any 401.
    pub fn clear_auth(&self) {
        self.erase(ACCESS_TOKEN_KEY);
        self.erase(REFRESH_TOKEN_KEY);
        self.erase(USER_KEY);
        self.publish();
    }

    /// Last-viewed specification id, falling back to the legacy key.
    pub fn last_spec_id(&self) -> Option<String> {
        self.backend
            .get(LAST_SPEC_KEY)
            .or_else(|| self.backend.get(LEGACY_LAST_SPEC_KEY))
    }

    pub fn set_last_spec_id(&self, id: &str) {
        self.write(LAST_SPEC_KEY, id);
        self.publish();
    }

    /// Clear the pointer, legacy key included.
    pub fn clear_last_spec_id(&self) {
        self.erase(LAST_SPEC_KEY);
        self.erase(LEGACY_LAST_SPEC_KEY);
        self.publish();
    }

    fn write(&self, key: &str, value: &str) {
        if let Err(e) = self.backend.set(key, value) {
            log::warn!("session write '{}' failed: {}", key, e);
        }
    }

    fn erase(&self, key: &str) {
        if let Err(e) = self.backend.remove(key) {
            log::warn!("session remove '{}' failed: {}", key, e);
        }
    }

    fn publish(&self) {
        let snapshot = SessionSnapshot {
            authenticated: self.is_authenticated(),
            last_spec_id: self.last_spec_id(),
        };
        self.tx.send_replace(snapshot);
    }
}
