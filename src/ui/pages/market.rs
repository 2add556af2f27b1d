//! Market page — per-island prices and the best buy/sell spots.

use dioxus::prelude::*;

use crate::domain::{best_prices, commodity_meta, price_table, AppState};
use crate::ui::components::{format_price, CommoditySelect, KpiCard, Legend, PriceTable};

#[component]
pub fn MarketPage() -> Element {
    let state = use_context::<Signal<AppState>>();

    if let Some(error) = state.with(|s| s.load_error.clone()) {
        return rsx! {
            div {
                class: "panel error-panel",
                h3 { "❌ Failed to load island data" }
                p { "{error}" }
                p { class: "empty-note", "Fix the dataset and hit Refresh on the Routes page." }
            }
        };
    }

    let Some(commodity) = state.with(|s| s.effective_commodity()) else {
        return rsx! {
            p { class: "empty-note", "No commodity data available." }
        };
    };

    let label = commodity_meta(&commodity)
        .map(|meta| meta.display())
        .unwrap_or_else(|| commodity.clone());

    let (rows, best) = state.with(|s| {
        (
            price_table(&s.islands, &commodity),
            best_prices(&s.islands, &commodity),
        )
    });

    let best_buy_value = best
        .best_buy
        .as_ref()
        .map(|entry| format_price(entry.price))
        .unwrap_or_else(|| "—".to_string());
    let best_buy_caption = best
        .best_buy
        .as_ref()
        .map(|entry| format!("🏝️ {}", entry.island))
        .unwrap_or_else(|| "No island buys this side".to_string());
    let best_sell_value = best
        .best_sell
        .as_ref()
        .map(|entry| format_price(entry.price))
        .unwrap_or_else(|| "—".to_string());
    let best_sell_caption = best
        .best_sell
        .as_ref()
        .map(|entry| format!("🏝️ {}", entry.island))
        .unwrap_or_else(|| "No island sells this side".to_string());

    rsx! {
        section {
            class: "page",
            div {
                class: "page-controls",
                CommoditySelect {}
                span { class: "page-subtitle", "Showing {label}" }
            }
            div {
                class: "kpi-grid",
                KpiCard {
                    title: "Cheapest Buy".to_string(),
                    value: best_buy_value,
                    caption: Some(best_buy_caption),
                }
                KpiCard {
                    title: "Best Sell".to_string(),
                    value: best_sell_value,
                    caption: Some(best_sell_caption),
                }
            }
            PriceTable { rows, best }
            Legend {}
        }
    }
}
