//! Coin Detail Page
//!
//! Issues the info and tickers queries for one coin and renders whatever
//! [`CoinDetail`] derives from them and the current route.

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::components::A;
use lib_core::config::core_config;
use lib_core::route::{with_base, Route};
use lib_core::view::{CoinDetail, DetailBody, DetailContent, Panel};

use super::{ChartPanel, PricePanelView};
use crate::components::{Header, Loader};
use crate::services::queries::queries;
use crate::state::route_state::use_route_state;

#[component]
pub fn CoinPage(coin_id: String, route: Memo<Route>) -> impl IntoView {
    let queries = queries();
    let carried = use_route_state().snapshot();

    let info = RwSignal::new(queries.initial_info(&coin_id));
    let tickers = RwSignal::new(queries.initial_tickers(&coin_id));

    // independent requests; neither waits for the other
    {
        let queries = queries.clone();
        let coin_id = coin_id.clone();
        spawn_local(async move {
            let state = queries.coin_info(&coin_id).await;
            let _ = info.try_set(state);
        });
    }
    {
        let coin_id = coin_id.clone();
        spawn_local(async move {
            let state = queries.coin_tickers(&coin_id).await;
            let _ = tickers.try_set(state);
        });
    }

    let detail = Memo::new(move |_| {
        CoinDetail::build(&coin_id, route.get().tab(), carried.as_ref(), info.get(), tickers.get())
    });
    let title = Signal::derive(move || detail.with(|d| d.title.clone()));

    view! {
        <div>
            <Header title=title back=true/>
            {move || match detail.get().body {
                DetailBody::Loading => view! { <Loader/> }.into_any(),
                DetailBody::Failed { message } => view! { <p class="error">{message}</p> }.into_any(),
                DetailBody::Ready(content) => view! { <CoinContent content=*content/> }.into_any(),
            }}
        </div>
    }
}

#[component]
fn CoinContent(content: DetailContent) -> impl IntoView {
    let base_path = core_config().base_path.clone();

    let tabs = content
        .tabs
        .into_iter()
        .map(|tab| {
            let class = if tab.active { "tab active" } else { "tab" };
            let href = with_base(&base_path, &tab.href);
            view! {
                <div class=class>
                    <A href=href>{tab.label}</A>
                </div>
            }
        })
        .collect_view();

    let panel = content.panel.map(|panel| match panel {
        Panel::Price { coin_id, ticker } => view! { <PricePanelView coin_id=coin_id ticker=ticker/> }.into_any(),
        Panel::Chart { coin_id } => view! { <ChartPanel coin_id=coin_id/> }.into_any(),
    });

    view! {
        <div class="overview">
            {content.overview.into_iter().map(|item| view! {
                <div class="overview-item">
                    <span class="label">{item.label}</span>
                    <span class="value">{item.value}</span>
                </div>
            }).collect_view()}
        </div>
        <p class="description">{content.description}</p>
        <div class="overview">
            {content.supply.into_iter().map(|item| view! {
                <div class="overview-item">
                    <span class="label">{item.label}</span>
                    <span class="value">{item.value}</span>
                </div>
            }).collect_view()}
        </div>
        <nav class="tabs">{tabs}</nav>
        {panel}
    }
}
