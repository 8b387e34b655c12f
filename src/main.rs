// HTSI Landing Page (Leptos 0.8 Edition)

mod sections;
mod state;

use leptos::prelude::*;
use sections::*;

fn main() {
    console_error_panic_hook::set_once();
    leptos::mount::mount_to_body(|| view! { <App/> });
}

#[component]
fn App() -> impl IntoView {
    view! {
        <ConsoleBanner />
        <Nav />
        <main>
            <Hero />
            <About />
            <Process />
            <Mentors />
            <Faq />
            <Apply />
        </main>
        <Footer />
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod dom_tests {
    use super::*;
    use leptos::prelude::document;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn mounts_with_first_slide_active_and_faq_collapsed() {
        leptos::mount::mount_to_body(|| view! { <App/> });
        let document = document();

        let dots = document.query_selector_all(".hero-pagination .dot").unwrap();
        assert_eq!(dots.length() as usize, sections::CAROUSEL_IMAGES.len());

        let active = document
            .query_selector_all(".hero-pagination .dot.active")
            .unwrap();
        assert_eq!(active.length(), 1);

        assert!(document.query_selector(".faq-answer").unwrap().is_none());
    }
}
