//! Coin List Page

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::components::A;
use lib_core::config::core_config;
use lib_core::route::with_base;
use lib_core::view::{coin_list, CoinListBody, CoinRow, COINS_TITLE};

use crate::components::{Header, Loader};
use crate::services::queries::queries;
use crate::state::route_state::use_route_state;

#[component]
pub fn CoinsPage() -> impl IntoView {
    let queries = queries();
    let coins = RwSignal::new(queries.initial_coins());

    spawn_local(async move {
        let state = queries.coins().await;
        let _ = coins.try_set(state);
    });

    let limit = core_config().coin_list_limit;
    let body = Memo::new(move |_| coin_list(coins.get(), limit));

    view! {
        <div>
            <Header title=Signal::derive(|| COINS_TITLE.to_string())/>
            {move || match body.get() {
                CoinListBody::Loading => view! { <Loader/> }.into_any(),
                CoinListBody::Failed { message } => view! { <p class="error">{message}</p> }.into_any(),
                CoinListBody::Ready(rows) => view! {
                    <ul class="coin-list">
                        {rows.into_iter().map(|row| view! { <CoinListItem row=row/> }).collect_view()}
                    </ul>
                }.into_any(),
            }}
        </div>
    }
}

#[component]
fn CoinListItem(row: CoinRow) -> impl IntoView {
    let route_state = use_route_state();
    let carried = row.route_state.clone();
    let href = with_base(&core_config().base_path, &row.href);

    view! {
        <li on:click=move |_| route_state.carry(carried.clone())>
            <A href=href>
                <img class="coin-icon" src=row.icon_url alt=row.symbol/>
                {row.name}" →"
            </A>
        </li>
    }
}
