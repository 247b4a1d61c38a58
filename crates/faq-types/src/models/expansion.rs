//! Expansion set: which records are currently open.

use crate::error::{FaqError, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::sync::Arc;

/// Immutable set of expanded record indices.
///
/// Every change produces a new value; the receiver is never mutated, so a
/// reactive host sees each toggle as a fresh state. Clones share storage.
/// Serialized as a JSON array in ascending order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Vec<usize>", into = "Vec<usize>")]
pub struct ExpansionSet(Arc<BTreeSet<usize>>);

impl ExpansionSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, index: usize) -> bool {
        self.0.contains(&index)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = usize> + '_ {
        self.0.iter().copied()
    }

    /// New set with `index` added if absent, removed if present.
    pub fn toggled(&self, index: usize) -> Self {
        let mut next = BTreeSet::clone(&self.0);
        if !next.remove(&index) {
            next.insert(index);
        }
        Self(Arc::new(next))
    }

    /// Drop indices that are not positions in a sequence of `len` records.
    ///
    /// Returns `self` unchanged (same allocation) when nothing is out of range.
    pub fn within(self, len: usize) -> Self {
        if self.0.iter().all(|&index| index < len) {
            return self;
        }
        self.0.iter().copied().filter(|&index| index < len).collect()
    }

    /// Whether two sets share the same allocation.
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }

    /// Encode as the persisted JSON array.
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string(self).map_err(|e| FaqError::EncodeState { message: e.to_string() })
    }

    /// Decode the persisted JSON array.
    pub fn from_json(raw: &str) -> Result<Self> {
        serde_json::from_str(raw).map_err(|e| FaqError::CorruptState { message: e.to_string() })
    }
}

impl FromIterator<usize> for ExpansionSet {
    fn from_iter<I: IntoIterator<Item = usize>>(iter: I) -> Self {
        Self(Arc::new(iter.into_iter().collect()))
    }
}

impl From<Vec<usize>> for ExpansionSet {
    fn from(indices: Vec<usize>) -> Self {
        indices.into_iter().collect()
    }
}

impl From<ExpansionSet> for Vec<usize> {
    fn from(set: ExpansionSet) -> Self {
        set.iter().collect()
    }
}
