//! Auth-session state for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! Used by the route guard and user-aware views to coordinate login redirects
//! and identity-dependent rendering. The in-memory copy is authoritative; it is
//! mirrored to persistent storage through the injected [`AuthPersistence`].
//!
//! DESIGN
//! ======
//! [`AuthStore`] is a cheap `Clone` handle provided via Leptos context. Views
//! read through [`AuthStore::state`] and mutate only through `set_user`,
//! `clear_user` and `restore_user`.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use std::fmt;
use std::sync::Arc;

use leptos::prelude::*;

use crate::net::types::User;
use crate::util::storage::{AuthPersistence, PersistedAuth, StorageError};

/// Login state: the user and the two tokens issued with it.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct AuthState {
    pub user: Option<User>,
    pub access_token: Option<String>,
    pub refresh_token: Option<String>,
}

impl AuthState {
    pub fn is_logged_in(&self) -> bool {
        self.user.is_some()
    }

    /// Rebuild state from persisted values.
    ///
    /// Returns `Ok(None)` when the access token or the user is missing (or
    /// empty). The refresh token is optional.
    ///
    /// # Errors
    ///
    /// Returns the parse error if the persisted user JSON is malformed.
    pub fn from_persisted(persisted: PersistedAuth) -> Result<Option<Self>, serde_json::Error> {
        let PersistedAuth { access_token, refresh_token, user } = persisted;
        let (Some(access_token), Some(user_json)) = (non_empty(access_token), non_empty(user)) else {
            return Ok(None);
        };
        let user: User = serde_json::from_str(&user_json)?;
        Ok(Some(Self { user: Some(user), access_token: Some(access_token), refresh_token }))
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}

/// What `restore_user` found in storage.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RestoreOutcome {
    /// Token and user were present and valid; state repopulated.
    Restored,
    /// Nothing (or only part of a session) was persisted; state untouched.
    Empty,
    /// Persisted user JSON was malformed; everything was cleared.
    Discarded,
}

/// Reactive auth store backed by a persistence collaborator.
#[derive(Clone)]
pub struct AuthStore {
    state: RwSignal<AuthState>,
    ready: RwSignal<bool>,
    persistence: Arc<dyn AuthPersistence>,
}

impl fmt::Debug for AuthStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AuthStore")
            .field("state", &self.state.get_untracked())
            .field("ready", &self.ready.get_untracked())
            .finish_non_exhaustive()
    }
}

impl AuthStore {
    /// Create an empty, not-yet-restored store.
    pub fn new<P>(persistence: P) -> Self
    where
        P: AuthPersistence + 'static,
    {
        Self::with_shared(Arc::new(persistence))
    }

    pub fn with_shared(persistence: Arc<dyn AuthPersistence>) -> Self {
        Self { state: RwSignal::new(AuthState::default()), ready: RwSignal::new(false), persistence }
    }

    /// Read-only view of the current state.
    pub fn state(&self) -> ReadSignal<AuthState> {
        self.state.read_only()
    }

    /// Current state without subscribing.
    pub fn snapshot(&self) -> AuthState {
        self.state.get_untracked()
    }

    /// Reactive: whether a user is present.
    pub fn is_logged_in(&self) -> bool {
        self.state.with(AuthState::is_logged_in)
    }

    /// Reactive: whether `restore_user` has run in this process.
    pub fn is_ready(&self) -> bool {
        self.ready.get()
    }

    /// Overwrite the session and persist it.
    ///
    /// The in-memory state is replaced even if persisting fails.
    ///
    /// # Errors
    ///
    /// Returns the storage error if the user cannot be encoded or written.
    pub fn set_user(&self, user: User, access_token: String, refresh_token: String) -> Result<(), StorageError> {
        let user_json = serde_json::to_string(&user);
        self.state.set(AuthState {
            user: Some(user),
            access_token: Some(access_token.clone()),
            refresh_token: Some(refresh_token.clone()),
        });
        self.persistence.save(&user_json?, &access_token, &refresh_token)
    }

    /// Drop the session from memory and storage.
    ///
    /// # Errors
    ///
    /// Returns the storage error if a persisted key could not be removed. The
    /// in-memory state is cleared regardless.
    pub fn clear_user(&self) -> Result<(), StorageError> {
        self.state.set(AuthState::default());
        self.persistence.clear()
    }

    /// Repopulate the session from storage and mark the store ready.
    pub fn restore_user(&self) -> RestoreOutcome {
        let outcome = match AuthState::from_persisted(self.persistence.load()) {
            Ok(Some(state)) => {
                self.state.set(state);
                log::info!("auth store restored from local storage");
                RestoreOutcome::Restored
            }
            Ok(None) => RestoreOutcome::Empty,
            Err(e) => {
                log::error!("discarding persisted user, cannot parse: {e}");
                if let Err(e) = self.clear_user() {
                    log::warn!("failed to clear persisted auth state: {e}");
                }
                RestoreOutcome::Discarded
            }
        };
        self.ready.set(true);
        outcome
    }
}
