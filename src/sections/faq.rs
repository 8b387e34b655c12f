use leptos::prelude::*;

use super::FAQ_DATA;
use crate::state::Accordion;

#[component]
pub fn Faq() -> impl IntoView {
    let accordion = RwSignal::new(Accordion::default());

    view! {
        <section class="section section-light">
            <div class="container">
                <h2 class="section-title">"FAQ"</h2>
                {FAQ_DATA
                    .iter()
                    .enumerate()
                    .map(|(index, entry)| {
                        view! {
                            <div
                                class=move || {
                                    if accordion.get().is_expanded(index) {
                                        "faq-item open"
                                    } else {
                                        "faq-item"
                                    }
                                }
                                on:click=move |_| accordion.update(|a| a.toggle(index))
                            >
                                <div class="faq-header">
                                    <span class="faq-question">{entry.question}</span>
                                    <span class="faq-icon">
                                        {move || {
                                            if accordion.get().expanded() == Some(index) {
                                                "-"
                                            } else {
                                                "+"
                                            }
                                        }}
                                    </span>
                                </div>
                                <Show when=move || accordion.get().is_expanded(index)>
                                    <p class="faq-answer">{entry.answer}</p>
                                </Show>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
        </section>
    }
}
