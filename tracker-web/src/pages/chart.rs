//! Price history chart panel (`/:coinId/chart`).
//!
//! Receives only the coin id and runs its own history query.

use leptos::prelude::*;
use leptos::task::spawn_local;
use lib_core::view::chart::{CHART_HEIGHT, CHART_WIDTH};
use lib_core::view::ChartBody;

use crate::services::queries::queries;

#[component]
pub fn ChartPanel(coin_id: String) -> impl IntoView {
    let queries = queries();
    let history = RwSignal::new(queries.initial_history(&coin_id));

    spawn_local(async move {
        let state = queries.coin_history(&coin_id).await;
        let _ = history.try_set(state);
    });

    let body = Memo::new(move |_| ChartBody::from_state(history.get()));

    move || match body.get() {
        ChartBody::Ready(chart) => view! {
            <section class="chart-panel">
                <div class="chart-labels">
                    <span>"High " {chart.high_label}</span>
                    <span class=chart.trend.class()>{chart.change_label}</span>
                </div>
                <svg class="chart" viewBox=format!("0 0 {} {}", CHART_WIDTH, CHART_HEIGHT)>
                    <polyline
                        points=chart.polyline
                        fill="none"
                        stroke="currentColor"
                        stroke-width="2"
                    />
                </svg>
                <div class="chart-labels">
                    <span>"Low " {chart.low_label}</span>
                    <span>{chart.range_label}</span>
                </div>
            </section>
        }
        .into_any(),
        other => {
            let text = other.placeholder().unwrap_or_default().to_string();
            view! { <span class="loader">{text}</span> }.into_any()
        }
    }
}
