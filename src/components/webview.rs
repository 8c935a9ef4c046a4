//! WebView page component.
//!
//! Renders external content in a sandboxed iframe. The target URL is
//! fixed in [`config`](crate::config); the frame gets no script or
//! same-origin privileges beyond what it needs to display.

use leptos::prelude::*;

use crate::config::{WEBVIEW_TITLE, WEBVIEW_URL};

stylance::import_crate_style!(css, "src/components/webview.module.css");

/// Embedded web content shown at `#/webview`.
#[component]
pub fn WebView() -> impl IntoView {
    view! {
        <main class=css::page>
            <header class=css::bar>
                <a class=css::back href="#/">"< back"</a>
                <span class=css::title>{WEBVIEW_TITLE}</span>
            </header>
            <iframe
                class=css::frame
                src=WEBVIEW_URL
                title=WEBVIEW_TITLE
                sandbox="allow-scripts allow-popups"
            />
        </main>
    }
}
