//! Application router component.
//!
//! Handles URL-based routing with hash history.
//! Uses native hashchange events instead of leptos_router for true hash routing.
//!
//! # Architecture
//!
//! - **URL hash is the source of truth**: navigation state is derived from `#/path`
//! - **Resolution is total**: every path matches, unmatched paths render the error page
//! - **hashchange events**: browser back/forward buttons work automatically

use leptos::prelude::*;
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::Closure;

use crate::app::AppContext;
use crate::components::error_page::ErrorPage;
use crate::components::home::Home;
use crate::components::webview::WebView;
use crate::models::View;
use crate::utils::dom;

/// Main application router.
///
/// Sets up hash-based routing over the static route table:
/// - `#/` → Home
/// - `#/webview` → WebView
/// - `#/error` → ErrorPage
/// - anything else → ErrorPage (catch-all)
///
/// On every `hashchange` event the current path is resolved through the
/// table and [`NavigationState`](crate::models::NavigationState) is
/// updated; the matched view is dispatched through a single `match`.
#[component]
pub fn AppRouter() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");

    // Normalize a bare URL to #/ so the fragment always mirrors the route.
    if dom::get_hash().is_empty() {
        ctx.nav.current().replace();
    }

    // Set up hashchange event listener (runs once on mount)
    #[cfg(target_arch = "wasm32")]
    {
        use wasm_bindgen::JsCast;
        let closure = Closure::wrap(Box::new(move || {
            let route = ctx.routes.with_value(|table| *table.current());
            log::debug!("navigate: {} -> {}", dom::get_hash(), route.name);
            ctx.nav.set_current(route);
        }) as Box<dyn Fn()>);

        if let Some(window) = web_sys::window() {
            let _ = window
                .add_event_listener_with_callback("hashchange", closure.as_ref().unchecked_ref());
        }

        // Keep the closure alive for the lifetime of the app
        closure.forget();
    }

    // Convert to Memo so equal views don't re-render
    let view = Memo::new(move |_| ctx.nav.current().view);

    move || match view.get() {
        View::Home => view! { <Home /> }.into_any(),
        View::WebView => view! { <WebView /> }.into_any(),
        View::ErrorPage => view! { <ErrorPage /> }.into_any(),
    }
}
