//! Routes page — profitable buy-here-sell-there pairings.

use dioxus::prelude::*;

use crate::app::persist_user_state;
use crate::domain::{commodity_meta, parse_min_profit, profitable_routes, AppState};
use crate::ui::components::{format_price, CommoditySelect, RouteCard};

#[component]
pub fn RoutesPage() -> Element {
    let state = use_context::<Signal<AppState>>();
    let mut reload_tick = use_context::<Signal<u32>>();

    if let Some(error) = state.with(|s| s.load_error.clone()) {
        return rsx! {
            div {
                class: "panel error-panel",
                h3 { "❌ Failed to load island data" }
                p { "{error}" }
                button {
                    class: "button",
                    onclick: move |_| reload_tick += 1,
                    "🔄 Retry"
                }
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

    let min_profit_input = state.with(|s| s.min_profit_input.clone());
    let min_profit = parse_min_profit(&min_profit_input);
    let routes = state.with(|s| profitable_routes(&s.islands, &commodity, min_profit));
    let route_count = routes.len();
    let threshold_label = format_price(min_profit);

    let mut state_mut = state;
    rsx! {
        section {
            class: "page",
            div {
                class: "page-controls",
                CommoditySelect {}
                label {
                    class: "field",
                    span { class: "field-label", "Min profit" }
                    input {
                        class: "field-input",
                        r#type: "number",
                        min: "0",
                        value: "{min_profit_input}",
                        oninput: move |event| {
                            state_mut.with_mut(|s| s.min_profit_input = event.value());
                            persist_user_state(&state_mut);
                        },
                    }
                }
                button {
                    class: "button",
                    onclick: move |_| reload_tick += 1,
                    "🔄 Refresh"
                }
            }
            header {
                class: "panel-header",
                h3 { "Routes for {label}" }
                span { class: "panel-note", "{route_count} profitable" }
            }
            if routes.is_empty() {
                p { class: "empty-note", "No route with profit ≥ {threshold_label} gold." }
            } else {
                div {
                    class: "route-list",
                    for route in routes {
                        RouteCard { route }
                    }
                }
            }
        }
    }
}
