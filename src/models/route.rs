//! Hash-based routing: the static route table and its resolver.
//!
//! URL format: `#/path` (e.g. `#/webview`). The URL fragment is the
//! single source of truth for navigation; browser back/forward buttons
//! work because every change arrives as a `hashchange` event.

use crate::utils::dom;

// ============================================================================
// Views
// ============================================================================

/// The closed set of renderable views.
///
/// Every route in the table points at one of these variants; the router
/// dispatches them through a single `match`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum View {
    /// Landing page: `#/`
    Home,
    /// Embedded web content: `#/webview`
    WebView,
    /// Not-found page: `#/error` and any unmatched path
    ErrorPage,
}

// ============================================================================
// Routes
// ============================================================================

/// A single entry in the route table: a literal path pattern, a stable
/// name for logging, and the view it renders.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Route {
    /// Literal path pattern (e.g. "/webview"), or "*" for the catch-all.
    pub path: &'static str,
    /// Stable identifier used in debug logs.
    pub name: &'static str,
    /// View rendered when this route is active.
    pub view: View,
}

impl Route {
    /// Create a new route entry.
    pub const fn new(path: &'static str, name: &'static str, view: View) -> Self {
        Self { path, name, view }
    }

    /// Literal-equality pattern match.
    #[inline]
    pub fn matches(&self, path: &str) -> bool {
        self.path == path
    }

    /// Convert this route to a URL hash.
    pub fn to_hash(&self) -> String {
        format!("#{}", self.path)
    }

    /// Navigate to this route without adding a history entry.
    ///
    /// Useful for redirects that should not appear in back-button history.
    pub fn replace(&self) {
        dom::replace_hash(&self.to_hash());
    }
}

// ============================================================================
// RouteTable
// ============================================================================

/// Ordered table of routes with a catch-all fallback.
///
/// Literal entries are checked in insertion order (first match wins);
/// the fallback is stored separately and sorts last by construction,
/// which is what makes [`RouteTable::resolve`] a total function.
///
/// Built once at startup and immutable thereafter.
#[derive(Clone, Debug)]
pub struct RouteTable {
    /// Literal-pattern entries, in match order.
    routes: Vec<Route>,
    /// Catch-all entry matching any otherwise-unmatched path.
    fallback: Route,
}

impl RouteTable {
    /// Create a table from literal entries and a catch-all fallback.
    ///
    /// Literal patterns must be unique; the fallback always matches and
    /// is consulted only after every literal entry has been tried.
    pub fn new(routes: Vec<Route>, fallback: Route) -> Self {
        debug_assert!(
            routes
                .iter()
                .enumerate()
                .all(|(i, r)| routes[..i].iter().all(|prev| prev.path != r.path)),
            "route patterns must be unique"
        );
        Self { routes, fallback }
    }

    /// Resolve a path to the first matching route.
    ///
    /// Total by construction: when no literal pattern matches, the
    /// catch-all fallback is returned. There is no error case.
    pub fn resolve(&self, path: &str) -> &Route {
        self.routes
            .iter()
            .find(|route| route.matches(path))
            .unwrap_or(&self.fallback)
    }

    /// Resolve the route for the browser's current URL hash.
    pub fn current(&self) -> &Route {
        self.resolve(&path_from_hash(&dom::get_hash()))
    }

    /// All entries in match order, fallback last.
    #[cfg(test)]
    pub fn all(&self) -> impl Iterator<Item = &Route> {
        self.routes.iter().chain(std::iter::once(&self.fallback))
    }
}

// ============================================================================
// Hash parsing
// ============================================================================

/// Extract the request path from a URL hash.
///
/// Accepts the fragment with or without its leading `#`. An empty or
/// bare `#` fragment normalizes to `/`, so a fresh page load without a
/// fragment lands on the root route. No other normalization happens:
/// trailing slashes and case are significant.
pub fn path_from_hash(hash: &str) -> String {
    let path = hash.trim_start_matches('#');
    if path.is_empty() {
        "/".to_string()
    } else {
        path.to_string()
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::route_table;

    #[test]
    fn test_resolve_literal_routes() {
        let table = route_table();
        assert_eq!(table.resolve("/").view, View::Home);
        assert_eq!(table.resolve("/").name, "Home");
        assert_eq!(table.resolve("/webview").view, View::WebView);
        assert_eq!(table.resolve("/webview").name, "WebView");
        assert_eq!(table.resolve("/error").view, View::ErrorPage);
        assert_eq!(table.resolve("/error").name, "ErrorPage");
    }

    #[test]
    fn test_resolve_unmatched_falls_through() {
        let table = route_table();
        assert_eq!(table.resolve("/anything/else").view, View::ErrorPage);
        assert_eq!(table.resolve("/anything/else").name, "catch-all");
        assert_eq!(table.resolve("/webview/extra").view, View::ErrorPage);
        // Patterns are literal: trailing slash and case matter.
        assert_eq!(table.resolve("/webview/").view, View::ErrorPage);
        assert_eq!(table.resolve("/WebView").view, View::ErrorPage);
    }

    #[test]
    fn test_resolve_empty_path_is_not_root() {
        // "" has no exact match, so the wildcard applies.
        let table = route_table();
        assert_eq!(table.resolve("").view, View::ErrorPage);
        assert_eq!(table.resolve("").name, "catch-all");
    }

    #[test]
    fn test_resolve_is_idempotent() {
        let table = route_table();
        for path in ["/", "/webview", "/error", "/nope", ""] {
            assert_eq!(table.resolve(path), table.resolve(path));
        }
    }

    #[test]
    fn test_literal_entries_win_over_fallback() {
        // "/error" resolves to its named entry, not the catch-all,
        // even though both render the same view.
        let table = route_table();
        assert_eq!(table.resolve("/error").name, "ErrorPage");
    }

    #[test]
    fn test_table_order_and_uniqueness() {
        let table = route_table();
        let entries: Vec<&Route> = table.all().collect();
        assert_eq!(entries.len(), 4);
        assert_eq!(entries.last().unwrap().path, "*");

        let literal: Vec<&str> = entries[..entries.len() - 1]
            .iter()
            .map(|r| r.path)
            .collect();
        let mut deduped = literal.clone();
        deduped.sort_unstable();
        deduped.dedup();
        assert_eq!(deduped.len(), literal.len());
    }

    #[test]
    fn test_path_from_hash() {
        assert_eq!(path_from_hash(""), "/");
        assert_eq!(path_from_hash("#"), "/");
        assert_eq!(path_from_hash("#/"), "/");
        assert_eq!(path_from_hash("#/webview"), "/webview");
        assert_eq!(path_from_hash("/webview"), "/webview");
        assert_eq!(path_from_hash("#/blog/post"), "/blog/post");
    }

    #[test]
    fn test_route_to_hash() {
        assert_eq!(Route::new("/", "Home", View::Home).to_hash(), "#/");
        assert_eq!(
            Route::new("/webview", "WebView", View::WebView).to_hash(),
            "#/webview"
        );
    }
}
