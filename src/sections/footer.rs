use leptos::prelude::*;

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer class="footer">
            <p class="footer-text">"© 2024 HTSI - High Tech Startup Incubator"</p>
        </footer>
    }
}
