//! Home page component.

use leptos::prelude::*;

use crate::config::{APP_NAME, APP_VERSION};

stylance::import_crate_style!(css, "src/components/home.module.css");

/// Landing page shown at `#/`.
#[component]
pub fn Home() -> impl IntoView {
    view! {
        <main class=css::page>
            <h1 class=css::title>{APP_NAME}</h1>
            <p class=css::subtitle>{format!("v{}", APP_VERSION)}</p>
            <nav class=css::links>
                <a class=css::link href="#/webview">"Open web view"</a>
                <a class=css::link href="#/error">"Error page"</a>
            </nav>
        </main>
    }
}
