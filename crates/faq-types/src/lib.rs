//! # FAQ Types
//!
//! Host-independent core of the FAQ accordion.
//!
//! - **`models`** - FAQ records and the immutable expansion set
//! - **`store`** - `PanelStore` seam for persisting the expansion set
//! - **`view`** - lazy per-item view sequence and the direction indicator
//! - **`controller`** - the list container: rehydrate, toggle, persist
//! - **`error`** - typed errors for storage and data decoding
//!
//! ## Architecture Role
//!
//! ```text
//!          faq-types (this crate)
//!                  │
//!                  ▼
//!            faq-leptos (WASM)
//!       FaqList ──► FaqItem
//!          │
//!          ▼
//!    LocalStorageStore
//! ```
//!
//! Nothing here touches the browser, so every behavior is testable natively
//! against [`MemoryStore`].

pub mod config;
pub mod controller;
pub mod error;
pub mod models;
pub mod store;
pub mod view;

pub use config::{AccordionConfig, DEFAULT_STORAGE_KEY, DEFAULT_TITLE};
pub use controller::Accordion;
pub use error::{FaqError, Result, StoreError};
pub use models::{parse_records, ExpansionSet, FaqRecord};
pub use store::{MemoryStore, PanelStore, SharedStore};
pub use view::{item_views, Indicator, ItemView, ItemViews};
