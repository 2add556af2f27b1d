use dioxus::prelude::*;

use crate::domain::CATALOG;

/// The full commodity catalog with icons and dataset keys, catalog order.
#[component]
pub fn Legend() -> Element {
    rsx! {
        div {
            class: "panel legend",
            header {
                class: "panel-header",
                h3 { "Commodities" }
            }
            ul {
                for meta in CATALOG.iter() {
                    li {
                        class: "legend-entry",
                        span { class: "legend-icon", "{meta.icon}" }
                        strong { "{meta.label}" }
                        span { class: "legend-key", " ({meta.key})" }
                    }
                }
            }
        }
    }
}
