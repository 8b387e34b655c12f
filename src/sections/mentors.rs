use leptos::prelude::*;

#[component]
pub fn Mentors() -> impl IntoView {
    view! {
        <section class="section">
            <div class="container">
                <h2 class="section-title">"Our Mentors"</h2>
                <div class="placeholder-box">
                    <h3 class="placeholder-title">"Expert Guidance"</h3>
                    <p class="placeholder-text">
                        "We connect you with industry leaders and experienced alumni."
                    </p>
                    <p class="placeholder-note">"(Mentor list coming soon)"</p>
                </div>
            </div>
        </section>
    }
}
