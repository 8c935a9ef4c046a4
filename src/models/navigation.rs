//! Navigation state: the currently active resolved route.

use leptos::prelude::*;

use crate::models::Route;

/// Reactive cell holding the currently resolved route.
///
/// Held in [`AppContext`](crate::app::AppContext) rather than as ambient
/// global state, so resolution itself stays pure and components observe
/// navigation through an explicit handle. Mutated only from the UI event
/// loop, once per navigation event.
///
/// # Note
///
/// `Copy` because the only field is a Leptos signal, which is just a
/// pointer to the underlying reactive state.
#[derive(Clone, Copy)]
pub struct NavigationState {
    /// The route the last navigation event resolved to.
    current: RwSignal<Route>,
}

impl NavigationState {
    /// Create navigation state starting at the given route.
    pub fn new(initial: Route) -> Self {
        Self {
            current: RwSignal::new(initial),
        }
    }

    /// The currently active route (reactive read).
    pub fn current(&self) -> Route {
        self.current.get()
    }

    /// Record the outcome of a navigation event.
    pub fn set_current(&self, route: Route) {
        self.current.set(route);
    }
}
