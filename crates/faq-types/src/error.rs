//! Typed error definitions for the FAQ accordion.
//!
//! None of these escape the list container: it logs them and degrades to
//! an empty expansion set. They exist so stores and decoders can say what
//! went wrong instead of silently returning defaults.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors raised by a [`crate::PanelStore`] backend.
#[derive(Debug, Clone, Error, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "type", content = "details")]
pub enum StoreError {
    /// No storage available (no window, storage disabled, private mode)
    #[error("Storage unavailable")]
    Unavailable,

    /// The backend rejected the operation (quota exceeded, security error)
    #[error("Storage backend error: {message}")]
    Backend {
        /// Description reported by the host
        message: String,
    },
}

/// Unified error type for the accordion.
#[derive(Debug, Clone, Error, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "domain", content = "error")]
pub enum FaqError {
    /// Wraps a storage error
    #[error("Store error: {0}")]
    Store(#[from] StoreError),

    /// Persisted expansion state is not a JSON array of indices
    #[error("Corrupt expansion state: {message}")]
    CorruptState {
        /// Decoder message
        message: String,
    },

    /// Expansion state could not be encoded for storage
    #[error("Failed to encode expansion state: {message}")]
    EncodeState {
        /// Encoder message
        message: String,
    },

    /// FAQ data file could not be decoded
    #[error("Invalid FAQ data: {message}")]
    InvalidData {
        /// Decoder message
        message: String,
    },
}

/// Standard Result type using FaqError.
pub type Result<T> = std::result::Result<T, FaqError>;
