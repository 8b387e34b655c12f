use leptos::prelude::*;

#[component]
pub fn About() -> impl IntoView {
    view! {
        <section class="section">
            <div class="container">
                <h2 class="section-title">"Bridging the Gap"</h2>
                <p class="body-text">
                    "In a school full of entrepreneurs, HTSI is the connector. "
                    "We bridge the gap for engineers and STEM-focused students, taking "
                    "the ideas developed in the required Research class and bringing "
                    "them into reality."
                </p>
                <div class="feature-row">
                    <FeatureCard icon="🔬" title="Research" />
                    <FeatureCard icon="🤝" title="Community" />
                    <FeatureCard icon="🚀" title="Impact" />
                </div>
            </div>
        </section>
    }
}

#[component]
fn FeatureCard(icon: &'static str, title: &'static str) -> impl IntoView {
    view! {
        <article class="feature-card">
            <div class="feature-icon">{icon}</div>
            <h3 class="feature-title">{title}</h3>
        </article>
    }
}
