//! Single collapsible question

use faq_types::Indicator;
use leptos::prelude::*;

/// Stateless item: the parent decides `is_active` and reacts to `on_toggle`.
#[component]
pub fn FaqItem(
    #[prop(into)] question: String,
    #[prop(into)] answer: String,
    #[prop(into)] is_active: Signal<bool>,
    #[prop(into)] on_toggle: Callback<()>,
) -> impl IntoView {
    let indicator = move || Indicator::from_active(is_active.get());

    view! {
        <div class="faq-item">
            <h3 class="faq-question" on:click=move |_| on_toggle.run(())>
                {question}
                <span class=move || indicator().class()>
                    {move || indicator().glyph()}
                </span>
            </h3>
            <Show when=move || is_active.get()>
                <div class="faq-answer">{answer.clone()}</div>
            </Show>
        </div>
    }
}
