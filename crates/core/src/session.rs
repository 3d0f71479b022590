//! Client-held admin session flag.
//!
//! The admin UI keeps a single boolean under [`ADMIN_FLAG_KEY`] in the
//! browser's storage and uses it to decide whether mutation controls are
//! shown. The catalog API does not consult it: any caller that can reach
//! the server can mutate the catalog unless `ADMIN_TOKEN` is configured
//! (see `folio_api::middleware::admin`).

use std::collections::HashMap;
use std::sync::{Mutex, PoisonError};

/// Storage key the admin UI writes on login.
pub const ADMIN_FLAG_KEY: &str = "adminAuthenticated";

const FLAG_SET: &str = "true";

/// Key/value storage holding the flag (browser local storage on the client).
pub trait FlagStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str);
    fn remove(&self, key: &str);
}

/// In-process [`FlagStore`], used by tests and non-browser clients.
#[derive(Debug, Default)]
pub struct MemoryFlagStore {
    values: Mutex<HashMap<String, String>>,
}

impl FlagStore for MemoryFlagStore {
    fn get(&self, key: &str) -> Option<String> {
        self.values
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .get(key)
            .cloned()
    }

    fn set(&self, key: &str, value: &str) {
        self.values
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(key.to_string(), value.to_string());
    }

    fn remove(&self, key: &str) {
        self.values
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .remove(key);
    }
}

/// The admin capability flag over some [`FlagStore`].
#[derive(Debug)]
pub struct AdminSession<S> {
    store: S,
}

impl<S: FlagStore> AdminSession<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// True only when the flag holds exactly `"true"`.
    pub fn is_authenticated(&self) -> bool {
        self.store.get(ADMIN_FLAG_KEY).as_deref() == Some(FLAG_SET)
    }

    pub fn login(&self) {
        self.store.set(ADMIN_FLAG_KEY, FLAG_SET);
    }

    pub fn logout(&self) {
        self.store.remove(ADMIN_FLAG_KEY);
    }
}
