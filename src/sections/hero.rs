use std::time::Duration;

use leptos::prelude::*;

use super::{CAROUSEL_IMAGES, SLIDE_PERIOD_MS};
use crate::state::Carousel;

#[component]
pub fn Hero() -> impl IntoView {
    let carousel = RwSignal::new(Carousel::new(CAROUSEL_IMAGES.len()));

    // The slide timer is scoped to this component: cleared when the owning
    // reactive scope is disposed, so no tick can fire after teardown.
    if let Ok(handle) = set_interval_with_handle(
        move || carousel.update(|c| c.advance()),
        Duration::from_millis(SLIDE_PERIOD_MS),
    ) {
        on_cleanup(move || handle.clear());
    }

    view! {
        <section class="hero">
            <img
                class="hero-image"
                src=move || CAROUSEL_IMAGES[carousel.get().active()]
                alt="HTSI students at work"
            />
            <div class="hero-overlay">
                <h1 class="hero-title">
                    "Innovation at"
                    <br />
                    "High Technology High School"
                </h1>
                <p class="hero-subtitle">
                    "Where student research meets real-world entrepreneurship."
                </p>
            </div>
            <div class="hero-pagination">
                {CAROUSEL_IMAGES
                    .iter()
                    .enumerate()
                    .map(|(index, _)| {
                        view! {
                            <span class=move || {
                                if carousel.get().active() == index { "dot active" } else { "dot" }
                            }></span>
                        }
                    })
                    .collect_view()}
            </div>
        </section>
    }
}
