//! Application configuration.
//!
//! Centralizes all configuration constants used throughout the application.

// =============================================================================
// Application Metadata
// =============================================================================

/// Application name displayed on the home page.
pub const APP_NAME: &str = "webview-shell";

/// Application version.
pub const APP_VERSION: &str = "0.1.0";

// =============================================================================
// Mount Configuration
// =============================================================================

/// Id of the DOM element the application mounts to.
pub const MOUNT_ELEMENT_ID: &str = "app";

// =============================================================================
// WebView Configuration
// =============================================================================

/// Target URL embedded by the WebView page.
pub const WEBVIEW_URL: &str = "https://example.com/";

/// Title shown above the embedded frame.
pub const WEBVIEW_TITLE: &str = "Embedded view";

// =============================================================================
// Route Configuration
// =============================================================================

use crate::models::{Route, RouteTable, View};

/// Build the application route table.
///
/// Literal entries are matched in order, first match wins; any path
/// that matches none of them falls through to the catch-all, which
/// renders the error page. Called once at startup; the table is
/// immutable afterwards.
pub fn route_table() -> RouteTable {
    RouteTable::new(
        vec![
            Route::new("/", "Home", View::Home),
            Route::new("/webview", "WebView", View::WebView),
            Route::new("/error", "ErrorPage", View::ErrorPage),
        ],
        Route::new("*", "catch-all", View::ErrorPage),
    )
}
