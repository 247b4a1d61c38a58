//! Domain models for the FAQ accordion.

mod expansion;
mod record;

pub use expansion::ExpansionSet;
pub use record::{parse_records, FaqRecord};
