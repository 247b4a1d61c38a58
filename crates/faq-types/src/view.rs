//! Per-item view data produced by the list container.

use crate::models::{ExpansionSet, FaqRecord};

/// Direction arrow shown next to each question.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Indicator {
    /// Collapsed
    Down,
    /// Expanded
    Up,
}

impl Indicator {
    pub fn from_active(is_active: bool) -> Self {
        if is_active {
            Self::Up
        } else {
            Self::Down
        }
    }

    pub fn glyph(self) -> &'static str {
        match self {
            Self::Down => "▼",
            Self::Up => "▲",
        }
    }

    /// CSS class list for the arrow span.
    pub fn class(self) -> &'static str {
        match self {
            Self::Down => "arrow down",
            Self::Up => "arrow up",
        }
    }
}

/// What the item renderer needs for one record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ItemView<'a> {
    pub index: usize,
    pub record: &'a FaqRecord,
    pub is_active: bool,
}

impl<'a> ItemView<'a> {
    pub fn question(&self) -> &'a str {
        &self.record.question
    }

    pub fn answer(&self) -> &'a str {
        &self.record.answer
    }

    pub fn indicator(&self) -> Indicator {
        Indicator::from_active(self.is_active)
    }

    /// Answer text if the item is expanded.
    pub fn visible_answer(&self) -> Option<&'a str> {
        self.is_active.then(|| self.answer())
    }
}

/// Lazy, restartable sequence of item views in data order.
///
/// Cloning restarts from the current position without touching the data.
#[derive(Debug, Clone)]
pub struct ItemViews<'a> {
    records: std::iter::Enumerate<std::slice::Iter<'a, FaqRecord>>,
    expanded: &'a ExpansionSet,
}

impl<'a> Iterator for ItemViews<'a> {
    type Item = ItemView<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let (index, record) = self.records.next()?;
        Some(ItemView { index, record, is_active: self.expanded.contains(index) })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.records.size_hint()
    }
}

impl ExactSizeIterator for ItemViews<'_> {}

/// One view per record, flagged against `expanded`.
pub fn item_views<'a>(records: &'a [FaqRecord], expanded: &'a ExpansionSet) -> ItemViews<'a> {
    ItemViews { records: records.iter().enumerate(), expanded }
}
