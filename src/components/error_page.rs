//! Error page component.
//!
//! Rendered for `#/error` and for every path the catch-all route picks
//! up. Landing here is expected behavior, not a fault: resolution is
//! total and this page is its fallback.

use leptos::prelude::*;

stylance::import_crate_style!(css, "src/components/error_page.module.css");

/// Not-found page shown for `#/error` and any unmatched path.
#[component]
pub fn ErrorPage() -> impl IntoView {
    view! {
        <main class=css::page>
            <h1 class=css::code>"404"</h1>
            <p class=css::message>"This page does not exist."</p>
            <a class=css::link href="#/">"Go home"</a>
        </main>
    }
}
