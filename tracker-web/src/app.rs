//! Top-level component and route switch.

use leptos::prelude::*;
use leptos_router::components::Router;
use leptos_router::hooks::use_location;
use lib_core::config::core_config;
use lib_core::route::Route;

use crate::pages::{CoinPage, CoinsPage};
use crate::state::route_state::provide_route_state;

#[component]
pub fn App() -> impl IntoView {
    provide_route_state();

    view! {
        <Router>
            <main class="container">
                <RouteSwitch/>
            </main>
        </Router>
    }
}

/// Renders exactly one page for the current path.
///
/// The detail page is only remounted when the coin changes; switching between
/// its price and chart tabs flows through the `route` memo.
#[component]
fn RouteSwitch() -> impl IntoView {
    let location = use_location();
    let base_path = core_config().base_path.clone();

    let route = Memo::new(move |_| Route::parse(&location.pathname.get(), &base_path));
    let coin_id = Memo::new(move |_| route.get().coin_id().map(str::to_string));

    Effect::new(move |_| log::debug!("Route: {}", route.get()));

    move || match coin_id.get() {
        None => view! { <CoinsPage/> }.into_any(),
        Some(coin_id) => view! { <CoinPage coin_id=coin_id route=route/> }.into_any(),
    }
}
