use crate::domain::model::SessionUser;
use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

/// In-memory session context: one slot for the bearer token, one for the
/// user record. Created empty, populated on login, and cleared as a whole on
/// logout or on an unauthorized response. Clones share the same slots, so a
/// clear performed by the request wrapper is visible everywhere.
#[derive(Clone, Default)]
pub struct SessionStore {
    inner: Arc<RwLock<Slots>>,
}

#[derive(Default)]
struct Slots {
    token: Option<String>,
    user: Option<SessionUser>,
}

impl SessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores the credential issued at login together with the user record.
    pub fn store(&self, token: String, user: SessionUser) {
        let mut slots = self.write();
        slots.token = Some(token);
        slots.user = Some(user);
    }

    /// Stores a pre-issued bearer token without a user record.
    pub fn set_token(&self, token: String) {
        self.write().token = Some(token);
    }

    pub fn token(&self) -> Option<String> {
        self.read().token.clone()
    }

    pub fn user(&self) -> Option<SessionUser> {
        self.read().user.clone()
    }

    pub fn is_authenticated(&self) -> bool {
        self.read().token.is_some()
    }

    /// Clears both slots together. Idempotent, so concurrent unauthorized
    /// handlers may race on it harmlessly.
    pub fn clear(&self) {
        let mut slots = self.write();
        slots.token = None;
        slots.user = None;
    }

    fn read(&self) -> RwLockReadGuard<'_, Slots> {
        self.inner.read().expect("session store lock poisoned")
    }

    fn write(&self) -> RwLockWriteGuard<'_, Slots> {
        self.inner.write().expect("session store lock poisoned")
    }
}
