//! Persistence collaborator for the auth store.
//!
//! SYSTEM CONTEXT
//! ==============
//! The auth store never touches `window.localStorage` directly. It talks to an
//! [`AuthPersistence`] handed to it at construction, so the state logic runs
//! the same in the browser, during server rendering, and in unit tests.
//!
//! DESIGN
//! ======
//! [`KeyValueStore`] mirrors the browser Storage API. Any key/value store is
//! an [`AuthPersistence`] over the three well-known keys below.

#[cfg(test)]
#[path = "storage_test.rs"]
mod storage_test;

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

pub const ACCESS_TOKEN_KEY: &str = "access_token";
pub const REFRESH_TOKEN_KEY: &str = "refresh_token";
pub const USER_KEY: &str = "user";

#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("storage is not available")]
    Unavailable,
    #[error("failed to write {key}: {message}")]
    Write { key: &'static str, message: String },
    #[error("failed to encode user: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Raw values read back from storage. Nothing here has been parsed yet.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PersistedAuth {
    pub access_token: Option<String>,
    pub refresh_token: Option<String>,
    pub user: Option<String>,
}

/// Minimal string key/value storage, shaped like `window.localStorage`.
pub trait KeyValueStore: Send + Sync {
    /// # Errors
    ///
    /// Returns an error if the backing storage cannot be read.
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// # Errors
    ///
    /// Returns an error if the backing storage rejects the write.
    fn set_item(&self, key: &'static str, value: &str) -> Result<(), StorageError>;

    /// # Errors
    ///
    /// Returns an error if the backing storage rejects the removal.
    fn remove_item(&self, key: &'static str) -> Result<(), StorageError>;
}

/// Load/save/clear of the persisted login session.
pub trait AuthPersistence: Send + Sync {
    /// Read whatever is persisted. Unreadable values come back as `None`.
    fn load(&self) -> PersistedAuth;

    /// Persist all three values.
    ///
    /// # Errors
    ///
    /// Returns the first write that failed.
    fn save(&self, user_json: &str, access_token: &str, refresh_token: &str) -> Result<(), StorageError>;

    /// Remove all three values.
    ///
    /// # Errors
    ///
    /// Returns the first removal that failed; later keys are still attempted.
    fn clear(&self) -> Result<(), StorageError>;
}

impl<S: KeyValueStore> AuthPersistence for S {
    fn load(&self) -> PersistedAuth {
        let read = |key: &str| self.get_item(key).ok().flatten();
        PersistedAuth {
            access_token: read(ACCESS_TOKEN_KEY),
            refresh_token: read(REFRESH_TOKEN_KEY),
            user: read(USER_KEY),
        }
    }

    fn save(&self, user_json: &str, access_token: &str, refresh_token: &str) -> Result<(), StorageError> {
        self.set_item(ACCESS_TOKEN_KEY, access_token)?;
        self.set_item(REFRESH_TOKEN_KEY, refresh_token)?;
        self.set_item(USER_KEY, user_json)
    }

    fn clear(&self) -> Result<(), StorageError> {
        let mut first_err = None;
        for key in [ACCESS_TOKEN_KEY, REFRESH_TOKEN_KEY, USER_KEY] {
            if let Err(e) = self.remove_item(key) {
                first_err.get_or_insert(e);
            }
        }
        first_err.map_or(Ok(()), Err)
    }
}

/// Browser `window.localStorage`. Only backed by real storage in hydrate
/// builds; elsewhere reads are empty and writes fail with `Unavailable`.
#[derive(Clone, Copy, Debug, Default)]
pub struct LocalStorage;

#[cfg(feature = "hydrate")]
fn browser_storage() -> Result<web_sys::Storage, StorageError> {
    web_sys::window()
        .and_then(|w| w.local_storage().ok().flatten())
        .ok_or(StorageError::Unavailable)
}

impl KeyValueStore for LocalStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError> {
        #[cfg(feature = "hydrate")]
        {
            let storage = browser_storage()?;
            Ok(storage.get_item(key).ok().flatten())
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = key;
            Ok(None)
        }
    }

    fn set_item(&self, key: &'static str, value: &str) -> Result<(), StorageError> {
        #[cfg(feature = "hydrate")]
        {
            browser_storage()?
                .set_item(key, value)
                .map_err(|e| StorageError::Write { key, message: format!("{e:?}") })
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (key, value);
            Err(StorageError::Unavailable)
        }
    }

    fn remove_item(&self, key: &'static str) -> Result<(), StorageError> {
        #[cfg(feature = "hydrate")]
        {
            browser_storage()?
                .remove_item(key)
                .map_err(|e| StorageError::Write { key, message: format!("{e:?}") })
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = key;
            Err(StorageError::Unavailable)
        }
    }
}

/// Storage for this build target: `localStorage` in the browser, a fresh
/// in-process map during server rendering.
pub fn session_storage() -> Arc<dyn AuthPersistence> {
    #[cfg(feature = "hydrate")]
    {
        Arc::new(LocalStorage)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Arc::new(MemoryStore::new())
    }
}

/// In-process storage. Clones share the same map.
#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
    items: Arc<Mutex<HashMap<String, String>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of every stored key/value pair.
    pub fn entries(&self) -> HashMap<String, String> {
        self.items.lock().map(|items| items.clone()).unwrap_or_default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError> {
        let items = self.items.lock().map_err(|_| StorageError::Unavailable)?;
        Ok(items.get(key).cloned())
    }

    fn set_item(&self, key: &'static str, value: &str) -> Result<(), StorageError> {
        let mut items = self.items.lock().map_err(|_| StorageError::Unavailable)?;
        items.insert(key.to_owned(), value.to_owned());
        Ok(())
    }

    fn remove_item(&self, key: &'static str) -> Result<(), StorageError> {
        let mut items = self.items.lock().map_err(|_| StorageError::Unavailable)?;
        items.remove(key);
        Ok(())
    }
}
