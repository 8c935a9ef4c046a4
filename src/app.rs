//! Root application module.
//!
//! Contains the main App component, AppContext definition, and
//! application-level setup logic following Leptos conventions.

use leptos::prelude::*;

use crate::components::AppRouter;
use crate::config;
use crate::models::{NavigationState, RouteTable};

// ============================================================================
// AppContext
// ============================================================================

/// Application-wide reactive context.
///
/// Provided at the root of the component tree and accessed from any
/// child component using `use_context::<AppContext>()`.
///
/// Holds the immutable route table and the navigation state derived
/// from it. Keeping both here (instead of ambient globals) keeps
/// [`RouteTable::resolve`] pure and components testable.
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Static route table, built once at startup.
    pub routes: StoredValue<RouteTable>,

    /// Currently active resolved route.
    pub nav: NavigationState,
}

impl AppContext {
    /// Creates the application context.
    ///
    /// Builds the route table and resolves the route for the URL the
    /// page loaded on, so the first render already shows the right view.
    pub fn new() -> Self {
        let table = config::route_table();
        let initial = *table.current();
        Self {
            routes: StoredValue::new(table),
            nav: NavigationState::new(initial),
        }
    }
}

impl Default for AppContext {
    fn default() -> Self {
        Self::new()
    }
}

// ============================================================================
// App
// ============================================================================

/// Root application component with error boundary.
///
/// This component:
/// - Creates and provides the global AppContext
/// - Wraps the app in an ErrorBoundary for graceful error handling
/// - Renders the AppRouter
#[component]
pub fn App() -> impl IntoView {
    // Create and provide application context
    let ctx = AppContext::new();
    provide_context(ctx);

    view! {
        <ErrorBoundary
            fallback=|errors| view! {
                <div style="
                    display: flex;
                    flex-direction: column;
                    align-items: center;
                    justify-content: center;
                    height: 100vh;
                    padding: 2rem;
                    background: #0a0e27;
                    color: #e0e0e0;
                    font-family: 'Courier New', monospace;
                ">
                    <div style="max-width: 600px; text-align: center;">
                        <h1 style="color: #ff6b6b; margin-bottom: 1rem;">
                            "Something went wrong"
                        </h1>
                        <p style="color: #a0a0a0; margin-bottom: 2rem;">
                            "An unexpected error occurred. Please try reloading the page."
                        </p>
                        <ul style="
                            text-align: left;
                            color: #ff6b6b;
                            font-size: 0.9rem;
                            margin-bottom: 2rem;
                        ">
                            {move || errors.get()
                                .into_iter()
                                .map(|(_, e)| view! { <li>{e.to_string()}</li> })
                                .collect::<Vec<_>>()
                            }
                        </ul>
                        <button
                            on:click=move |_| {
                                if let Some(window) = web_sys::window() {
                                    let _ = window.location().reload();
                                }
                            }
                            style="
                                background: #4a90e2;
                                color: white;
                                border: none;
                                padding: 0.75rem 2rem;
                                border-radius: 4px;
                                cursor: pointer;
                                font-family: 'Courier New', monospace;
                                font-size: 1rem;
                            "
                        >
                            "Reload Page"
                        </button>
                    </div>
                </div>
            }
        >
            <AppRouter />
        </ErrorBoundary>
    }
}
