use dioxus::prelude::*;

use crate::domain::{BestPrices, PriceRow};
use crate::ui::components::format_price;

/// Per-island price table for the selected commodity.
///
/// Rows arrive in dataset order and stay that way; islands not trading the
/// commodity render an em dash on both sides so "no offer" never reads as a
/// price of zero. Rows matching the best buy / best sell get a highlight.
#[component]
pub fn PriceTable(rows: Vec<PriceRow>, best: BestPrices) -> Element {
    let count = rows.len();
    let best_buy_island = best.best_buy.as_ref().map(|entry| entry.island.clone());
    let best_sell_island = best.best_sell.as_ref().map(|entry| entry.island.clone());

    rsx! {
        div {
            class: "panel",
            header {
                class: "panel-header",
                h3 { "Prices by Island" }
                span { class: "panel-note", "{count} islands" }
            }
            if rows.is_empty() {
                p { class: "empty-note", "No islands in the dataset." }
            } else {
                table {
                    class: "price-table",
                    thead {
                        tr {
                            th { "Island" }
                            th { "Buy (island → boat)" }
                            th { "Sell (boat → island)" }
                        }
                    }
                    tbody {
                        for row in rows {
                            PriceTableRow {
                                is_best_buy: best_buy_island.as_deref() == Some(row.island.as_str()),
                                is_best_sell: best_sell_island.as_deref() == Some(row.island.as_str()),
                                row,
                            }
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn PriceTableRow(row: PriceRow, is_best_buy: bool, is_best_sell: bool) -> Element {
    let buy = row.buy.map(format_price).unwrap_or_else(|| "—".to_string());
    let sell = row.sell.map(format_price).unwrap_or_else(|| "—".to_string());
    let buy_class = if is_best_buy { "price-cell best-buy" } else { "price-cell" };
    let sell_class = if is_best_sell { "price-cell best-sell" } else { "price-cell" };

    rsx! {
        tr {
            td { class: "island-name", "{row.island}" }
            td { class: buy_class, "{buy}" }
            td { class: sell_class, "{sell}" }
        }
    }
}
