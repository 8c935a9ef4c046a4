//! Data models and types for the application.
//!
//! Contains domain types for:
//! - [`Route`], [`RouteTable`], [`View`] - Hash-based navigation
//! - [`NavigationState`] - The currently active resolved route

mod navigation;
mod route;

pub use navigation::NavigationState;
pub use route::{path_from_hash, Route, RouteTable, View};
