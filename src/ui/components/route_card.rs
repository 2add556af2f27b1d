use dioxus::prelude::*;

use crate::domain::Route;
use crate::ui::components::format_price;

#[component]
pub fn RouteCard(route: Route) -> Element {
    let buy = format_price(route.buy_price);
    let sell = format_price(route.sell_price);
    let profit = format_price(route.profit);

    rsx! {
        div {
            class: "route-card",
            div {
                class: "route-legs",
                span { "🚢 " }
                strong { "{route.origin}" }
                span { class: "route-price", " (buy {buy}) → " }
                strong { "{route.destination}" }
                span { class: "route-price", " (sell {sell})" }
            }
            div { class: "route-profit", "Profit: +{profit} gold" }
        }
    }
}
