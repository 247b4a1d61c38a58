//! Browser `localStorage` backend for the expansion set.

use faq_types::{PanelStore, SharedStore, StoreError};
use std::sync::Arc;
use wasm_bindgen::JsValue;
use web_sys::Storage;

/// [`PanelStore`] over `window.localStorage`, bound to one key.
///
/// The `Storage` handle is looked up on every call rather than held, so the
/// store stays `Send + Sync` and picks up storage being disabled mid-session.
#[derive(Debug, Clone)]
pub struct LocalStorageStore {
    key: String,
}

impl LocalStorageStore {
    pub fn new(key: impl Into<String>) -> Self {
        Self { key: key.into() }
    }

    pub fn shared(self) -> SharedStore {
        Arc::new(self)
    }

    fn storage() -> Result<Storage, StoreError> {
        let window = web_sys::window().ok_or(StoreError::Unavailable)?;
        window.local_storage().map_err(backend_error)?.ok_or(StoreError::Unavailable)
    }
}

fn backend_error(e: JsValue) -> StoreError {
    StoreError::Backend { message: format!("{:?}", e) }
}

impl PanelStore for LocalStorageStore {
    fn key(&self) -> &str {
        &self.key
    }

    fn read(&self) -> Result<Option<String>, StoreError> {
        Self::storage()?.get_item(&self.key).map_err(backend_error)
    }

    fn write(&self, value: &str) -> Result<(), StoreError> {
        Self::storage()?.set_item(&self.key, value).map_err(backend_error)
    }
}
