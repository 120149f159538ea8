//! Navigation-time state carried from the coin list to the detail page.

use leptos::prelude::*;
use lib_core::view::RouteState;

#[derive(Clone, Copy)]
pub struct RouteStateContext {
    pub state: RwSignal<Option<RouteState>>,
}

impl RouteStateContext {
    pub fn new() -> Self {
        Self { state: RwSignal::new(None) }
    }

    /// Remember the display name for the page about to be opened.
    pub fn carry(&self, state: RouteState) {
        self.state.set(Some(state));
    }

    /// Current carried state, read once at mount.
    pub fn snapshot(&self) -> Option<RouteState> {
        self.state.get_untracked()
    }
}

pub fn provide_route_state() -> RouteStateContext {
    let context = RouteStateContext::new();
    provide_context(context);
    context
}

pub fn use_route_state() -> RouteStateContext {
    expect_context::<RouteStateContext>()
}
