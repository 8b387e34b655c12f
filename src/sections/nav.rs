use leptos::prelude::*;

#[component]
pub fn Nav() -> impl IntoView {
    view! {
        <nav class="nav">
            <div class="nav-inner">
                <span class="nav-logo">"HTSI"</span>
                // Inert placeholder until applications open
                <button class="nav-cta">"Apply"</button>
            </div>
        </nav>
    }
}
