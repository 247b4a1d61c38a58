//! List container: owns the expansion set and keeps it in sync with a store.
//!
//! The browser front end drives these functions from a signal and an
//! effect; [`Accordion`] is the host-free rendition used natively.

use crate::models::{ExpansionSet, FaqRecord};
use crate::store::{PanelStore, SharedStore};
use crate::view::{item_views, ItemViews};
use crate::FaqError;

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests;

/// Rehydrate the expansion set for `len` records from `store`.
///
/// Never fails: absent, unreadable or corrupt state yields an empty set, and
/// indices past the end of the data are dropped.
pub fn load_expansion(store: &dyn PanelStore, len: usize) -> ExpansionSet {
    let raw = match store.read() {
        Ok(Some(raw)) => raw,
        Ok(None) => return ExpansionSet::new(),
        Err(e) => {
            log::warn!("Reading '{}' failed, starting collapsed: {}", store.key(), e);
            return ExpansionSet::new();
        }
    };

    match ExpansionSet::from_json(&raw) {
        Ok(set) => {
            let set = set.within(len);
            log::debug!("Rehydrated {} open panel(s) from '{}'", set.len(), store.key());
            set
        }
        Err(e) => {
            log::warn!("Ignoring stored '{}': {}", store.key(), e);
            ExpansionSet::new()
        }
    }
}

/// Replacement set after toggling `index` in a list of `len` records.
///
/// `None` when `index` is not a record position; the caller keeps its state.
pub fn toggle(expanded: &ExpansionSet, index: usize, len: usize) -> Option<ExpansionSet> {
    if index >= len {
        log::debug!("Ignoring toggle of missing item {}", index);
        return None;
    }

    let next = expanded.toggled(index);
    log::debug!("Toggled item {} (open: {})", index, next.contains(index));
    Some(next)
}

/// Write `expanded` to `store`. Failures are logged; in-memory state stands.
pub fn persist(store: &dyn PanelStore, expanded: &ExpansionSet) {
    let result = expanded
        .to_json()
        .and_then(|json| store.write(&json).map_err(FaqError::from));
    if let Err(e) = result {
        log::warn!("Persisting '{}' failed: {}", store.key(), e);
    }
}

/// Host-free list container.
pub struct Accordion {
    records: Vec<FaqRecord>,
    store: SharedStore,
    expanded: ExpansionSet,
}

impl Accordion {
    /// Mount over `records`, rehydrating from `store`.
    pub fn mount(records: Vec<FaqRecord>, store: SharedStore) -> Self {
        let expanded = load_expansion(store.as_ref(), records.len());
        Self { records, store, expanded }
    }

    pub fn records(&self) -> &[FaqRecord] {
        &self.records
    }

    pub fn expanded(&self) -> &ExpansionSet {
        &self.expanded
    }

    /// Flip `index` and persist the replacement set.
    ///
    /// Indices outside the data are ignored and nothing is written.
    pub fn toggle(&mut self, index: usize) -> ExpansionSet {
        if let Some(next) = toggle(&self.expanded, index, self.records.len()) {
            self.expanded = next;
            persist(self.store.as_ref(), &self.expanded);
        }
        self.expanded.clone()
    }

    pub fn views(&self) -> ItemViews<'_> {
        item_views(&self.records, &self.expanded)
    }
}
