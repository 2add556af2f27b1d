use dioxus::prelude::*;

#[component]
pub fn KpiCard(title: String, value: String, caption: Option<String>) -> Element {
    rsx! {
        div {
            class: "kpi-card",
            h3 { class: "kpi-title", "{title}" }
            p { class: "kpi-value", "{value}" }
            if let Some(caption) = caption {
                p { class: "kpi-caption", "{caption}" }
            }
        }
    }
}
