//! Utility modules for browser access.
//!
//! Provides:
//! - [`dom`] - Safe access to window, location, and history APIs

pub mod dom;
