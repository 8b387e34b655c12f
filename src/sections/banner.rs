//! Console banner for developers who look under the hood.

use leptos::prelude::*;
use wasm_bindgen::JsValue;

use super::VERSION;

fn ascii_logo() -> String {
    format!(
        r#"
  _   _ _____ ____ ___
 | | | |_   _/ ___|_ _|
 | |_| | | | \___ \| |
 |  _  | | |  ___) | |
 |_| |_| |_| |____/|___|

  High Tech Startup Incubator
  {VERSION}
"#
    )
}

/// Render-less component that greets the browser console once on mount.
#[component]
pub fn ConsoleBanner() -> impl IntoView {
    Effect::new(move || {
        print_banner();
    });

    view! {}
}

fn print_banner() {
    if web_sys::window().is_none() {
        return;
    }

    web_sys::console::log_2(
        &JsValue::from_str(&format!("%c{}", ascii_logo())),
        &JsValue::from_str("color: #0d253f; font-family: monospace; font-size: 11px;"),
    );

    web_sys::console::log_2(
        &JsValue::from_str("%cWhere student research meets real-world entrepreneurship."),
        &JsValue::from_str("color: #888;"),
    );
}
