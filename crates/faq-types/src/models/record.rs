//! FAQ record model and data file decoding.

use crate::error::{FaqError, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// One question/answer pair from the static data file.
///
/// Records are addressed by their position in the data sequence. `id` is
/// optional and only used as a render key when the data provides one.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct FaqRecord {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub question: String,
    pub answer: String,
}

impl FaqRecord {
    pub fn new(question: impl Into<String>, answer: impl Into<String>) -> Self {
        Self { id: None, question: question.into(), answer: answer.into() }
    }

    /// Render key: `id:<id>` if the record has one, else `pos:<index>`.
    pub fn key(&self, index: usize) -> String {
        match &self.id {
            Some(id) => format!("id:{id}"),
            None => format!("pos:{index}"),
        }
    }
}

/// Decode the FAQ data file (a JSON array of records).
///
/// Ids, where given, must be unique.
pub fn parse_records(json: &str) -> Result<Vec<FaqRecord>> {
    let records: Vec<FaqRecord> = serde_json::from_str(json)
        .map_err(|e| FaqError::InvalidData { message: e.to_string() })?;

    let mut seen = HashSet::new();
    if let Some(id) = records.iter().filter_map(|r| r.id.as_deref()).find(|id| !seen.insert(*id)) {
        return Err(FaqError::InvalidData { message: format!("duplicate id '{id}'") });
    }

    Ok(records)
}
