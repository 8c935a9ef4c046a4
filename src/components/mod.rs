//! UI components built with Leptos.
//!
//! - [`router`] - Application routing (main entry point)
//! - [`home`] - Landing page
//! - [`webview`] - Embedded web content page
//! - [`error_page`] - Not-found page

pub mod error_page;
pub mod home;
pub mod router;
pub mod webview;

pub use router::AppRouter;
