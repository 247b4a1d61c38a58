//! FAQ list container

use super::FaqItem;
use faq_types::controller::{self, load_expansion, persist};
use faq_types::{FaqRecord, SharedStore, DEFAULT_TITLE};
use leptos::prelude::*;

/// Owns the expansion set and mirrors every change into `store`.
#[component]
pub fn FaqList(
    records: Vec<FaqRecord>,
    store: SharedStore,
    #[prop(into, default = DEFAULT_TITLE.to_string())] title: String,
) -> impl IntoView {
    let len = records.len();
    let expanded = RwSignal::new(load_expansion(store.as_ref(), len));

    // Persist whenever the set is replaced
    Effect::new(move |_| {
        expanded.with(|set| persist(store.as_ref(), set));
    });

    let toggle = move |index: usize| {
        if let Some(next) = expanded.with_untracked(|set| controller::toggle(set, index, len)) {
            expanded.set(next);
        }
    };

    let items: Vec<(usize, FaqRecord)> = records.into_iter().enumerate().collect();

    view! {
        <div class="faq-container">
            <h2>{title}</h2>
            <For
                each=move || items.clone()
                key=|(index, record)| record.key(*index)
                children=move |(index, record)| {
                    view! {
                        <FaqItem
                            question=record.question
                            answer=record.answer
                            is_active=Signal::derive(move || expanded.with(|set| set.contains(index)))
                            on_toggle=Callback::new(move |_| toggle(index))
                        />
                    }
                }
            />
        </div>
    }
}
