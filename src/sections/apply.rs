use leptos::prelude::*;

#[component]
pub fn Apply() -> impl IntoView {
    view! {
        <section id="apply" class="section">
            <div class="container">
                <h2 class="section-title">"Apply Now"</h2>

                <div class="status-box">
                    <p class="status-title">"Applications Closed"</p>
                    <p class="status-text">"We are not currently accepting new cohorts."</p>
                </div>

                <p class="acceptance-rate">
                    "Current Acceptance Rate: "
                    <strong>"[TBD]%"</strong>
                </p>

                // The whole form is an inert "coming soon" state: fields accept
                // no input and the button performs no action.
                <div class="form">
                    <label class="form-label" for="project-name">"Project / Idea Name"</label>
                    <input
                        id="project-name"
                        class="form-input"
                        placeholder="Enter your project name"
                        disabled=true
                    />

                    <label class="form-label" for="project-description">"Short Description"</label>
                    <textarea
                        id="project-description"
                        class="form-input form-textarea"
                        placeholder="Describe your idea..."
                        disabled=true
                    ></textarea>

                    <button class="form-submit" disabled=true>
                        "Submit Application (Closed)"
                    </button>
                </div>
            </div>
        </section>
    }
}
