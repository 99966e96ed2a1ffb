use std::fmt;
use std::sync::Arc;

use secrecy::{ExposeSecret, SecretString};
use tokio::sync::RwLock;
use tracing::{debug, info};

use super::storage::{SessionStorage, StorageError, StoredSession};
use crate::entities::SessionUser;

/// Authenticated bearer token plus the profile it belongs to.
pub struct Session {
    token: SecretString,
    user: SessionUser,
}

impl Session {
    pub fn new(token: SecretString, user: SessionUser) -> Self {
        Self { token, user }
    }

    pub fn user(&self) -> &SessionUser {
        &self.user
    }

    pub fn token(&self) -> SecretString {
        SecretString::new(self.token.expose_secret().clone())
    }

    fn to_stored(&self) -> StoredSession {
        StoredSession {
            token: self.token.expose_secret().clone(),
            user: self.user.clone(),
        }
    }

    fn from_stored(stored: StoredSession) -> Option<Self> {
        if stored.token.is_empty() {
            return None;
        }
        Some(Self::new(SecretString::new(stored.token), stored.user))
    }
}

impl fmt::Debug for Session {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Session")
            .field("token", &"[REDACTED]")
            .field("user", &self.user)
            .finish()
    }
}

/// The one session handle of a process. Cloning shares the same state; the
/// auth flow writes it, the API client and pages only read it.
#[derive(Clone)]
pub struct SessionContext {
    state: Arc<RwLock<Option<Session>>>,
    storage: Arc<dyn SessionStorage>,
}

impl SessionContext {
    /// Empty context backed by `storage`; nothing is read yet.
    pub fn new(storage: Arc<dyn SessionStorage>) -> Self {
        Self {
            state: Arc::new(RwLock::new(None)),
            storage,
        }
    }

    /// Context primed with whatever session `storage` already holds.
    pub async fn restore(storage: Arc<dyn SessionStorage>) -> Result<Self, StorageError> {
        let context = Self::new(storage);
        context.reload().await?;
        Ok(context)
    }

    /// Re-reads durable storage, dropping the in-memory session when the
    /// stored one is gone.
    pub async fn reload(&self) -> Result<bool, StorageError> {
        let stored = self
            .blocking(|storage| storage.load())
            .await?
            .and_then(Session::from_stored);
        let present = stored.is_some();
        if let Some(ref s) = stored {
            debug!(user_id = s.user.id, role = %s.user.role, "session restored from storage");
        }
        *self.state.write().await = stored;
        Ok(present)
    }

    /// Snapshot of the current session, if any.
    pub async fn get(&self) -> Option<Session> {
        self.state
            .read()
            .await
            .as_ref()
            .map(|s| Session::new(s.token(), s.user.clone()))
    }

    pub async fn user(&self) -> Option<SessionUser> {
        self.state.read().await.as_ref().map(|s| s.user.clone())
    }

    pub async fn token(&self) -> Option<SecretString> {
        self.state.read().await.as_ref().map(Session::token)
    }

    pub async fn is_authenticated(&self) -> bool {
        self.state.read().await.is_some()
    }

    /// Stores a fresh session, durable storage first.
    pub async fn set(&self, token: SecretString, user: SessionUser) -> Result<(), StorageError> {
        let session = Session::new(token, user);
        let stored = session.to_stored();
        self.blocking(move |storage| storage.save(&stored)).await?;
        info!(user_id = session.user.id, role = %session.user.role, "session started");
        *self.state.write().await = Some(session);
        Ok(())
    }

    pub async fn clear(&self) -> Result<(), StorageError> {
        let previous = self.state.write().await.take();
        self.blocking(|storage| storage.clear()).await?;
        if let Some(s) = previous {
            info!(user_id = s.user.id, "session cleared");
        }
        Ok(())
    }

    /// Runs a storage call on the blocking pool; file storage does sync I/O.
    async fn blocking<T, F>(&self, op: F) -> Result<T, StorageError>
    where
        F: FnOnce(&dyn SessionStorage) -> Result<T, StorageError> + Send + 'static,
        T: Send + 'static,
    {
        let storage = Arc::clone(&self.storage);
        tokio::task::spawn_blocking(move || op(storage.as_ref())).await?
    }
}

impl fmt::Debug for SessionContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SessionContext").finish_non_exhaustive()
    }
}
