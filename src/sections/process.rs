use leptos::prelude::*;

#[component]
pub fn Process() -> impl IntoView {
    view! {
        <section class="section section-light">
            <div class="container">
                <h2 class="section-title">"The Process"</h2>
                <Step number="1" title="Apply" text="Submit your research concept." />
                <Step number="2" title="Interview" text="Comprehensive interview to vet viability." />
                <Step number="3" title="Incubate" text="Guidance from mentors to build." />
            </div>
        </section>
    }
}

#[component]
fn Step(number: &'static str, title: &'static str, text: &'static str) -> impl IntoView {
    view! {
        <div class="step">
            <div class="step-circle">{number}</div>
            <div class="step-content">
                <h3 class="step-title">{title}</h3>
                <p class="step-text">{text}</p>
            </div>
        </div>
    }
}
