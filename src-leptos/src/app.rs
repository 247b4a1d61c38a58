//! Root App component

use crate::components::FaqList;
use crate::storage::LocalStorageStore;
use faq_types::{parse_records, AccordionConfig, FaqRecord};
use leptos::prelude::*;

const FAQ_DATA: &str = include_str!("../data/faq.json");

/// Decode the bundled FAQ data, logging and rendering nothing on failure.
fn load_records() -> Vec<FaqRecord> {
    match parse_records(FAQ_DATA) {
        Ok(records) => {
            log::info!("Loaded {} FAQ record(s)", records.len());
            records
        }
        Err(e) => {
            log::error!("{}", e);
            Vec::new()
        }
    }
}

/// Root App component
#[component]
pub fn App() -> impl IntoView {
    let config = AccordionConfig::default();
    let store = LocalStorageStore::new(config.storage_key).shared();

    view! {
        <FaqList records=load_records() store=store title=config.title />
    }
}
