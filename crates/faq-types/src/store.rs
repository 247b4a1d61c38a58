//! Persistence seam for the expansion set.
//!
//! A store is bound to exactly one key at construction. The list container
//! receives it as a [`SharedStore`] instead of reaching for a global, so
//! tests run against [`MemoryStore`] and the browser build plugs in
//! `localStorage`.

use crate::error::StoreError;
use parking_lot::Mutex;
use std::sync::Arc;

/// Key/value slot holding the serialized expansion set.
pub trait PanelStore: Send + Sync {
    /// Key this store reads and writes.
    fn key(&self) -> &str;

    /// Raw persisted value, `None` if nothing was ever written.
    fn read(&self) -> Result<Option<String>, StoreError>;

    /// Replace the persisted value.
    fn write(&self, value: &str) -> Result<(), StoreError>;
}

/// Store handle shared between the container and its reactions.
pub type SharedStore = Arc<dyn PanelStore>;

/// In-process store, used natively and in tests.
#[derive(Debug)]
pub struct MemoryStore {
    key: String,
    value: Mutex<Option<String>>,
    available: bool,
}

impl MemoryStore {
    pub fn new(key: impl Into<String>) -> Self {
        Self { key: key.into(), value: Mutex::new(None), available: true }
    }

    /// Store pre-populated with `value`.
    pub fn with_value(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self { key: key.into(), value: Mutex::new(Some(value.into())), available: true }
    }

    /// Store whose every operation fails with [`StoreError::Unavailable`].
    pub fn unavailable(key: impl Into<String>) -> Self {
        Self { key: key.into(), value: Mutex::new(None), available: false }
    }

    /// Current raw value, bypassing availability.
    pub fn snapshot(&self) -> Option<String> {
        self.value.lock().clone()
    }

    pub fn shared(self) -> SharedStore {
        Arc::new(self)
    }

    fn check(&self) -> Result<(), StoreError> {
        if self.available {
            Ok(())
        } else {
            Err(StoreError::Unavailable)
        }
    }
}

impl PanelStore for MemoryStore {
    fn key(&self) -> &str {
        &self.key
    }

    fn read(&self) -> Result<Option<String>, StoreError> {
        self.check()?;
        Ok(self.value.lock().clone())
    }

    fn write(&self, value: &str) -> Result<(), StoreError> {
        self.check()?;
        *self.value.lock() = Some(value.to_string());
        Ok(())
    }
}
