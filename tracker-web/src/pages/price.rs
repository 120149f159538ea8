//! Price statistics panel (`/:coinId/price`).

use leptos::prelude::*;
use lib_core::view::PricePanel;
use shared::dto::CoinTicker;

#[component]
pub fn PricePanelView(coin_id: String, ticker: CoinTicker) -> impl IntoView {
    let panel = PricePanel::new(&coin_id, &ticker);

    view! {
        <section class="price-panel">
            <table class="price-table">
                <tbody>
                    {panel.rows.into_iter().map(|row| {
                        let class = match row.trend {
                            Some(trend) => format!("value {}", trend.class()),
                            None => "value".to_string(),
                        };
                        let arrow = row.trend.map(|t| t.arrow()).unwrap_or_default();
                        view! {
                            <tr>
                                <td>{row.label}</td>
                                <td class=class>{row.value}" "{arrow}</td>
                            </tr>
                        }
                    }).collect_view()}
                </tbody>
            </table>
            {panel.last_updated.map(|when| view! { <p class="updated">"Updated " {when}</p> })}
        </section>
    }
}
