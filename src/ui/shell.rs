use dioxus::prelude::*;
use time::{format_description, OffsetDateTime};

use crate::app::Route;
use crate::domain::AppState;
use crate::util::version::{version_label, APP_NAME};

#[component]
pub fn Shell(children: Element) -> Element {
    let state = use_context::<Signal<AppState>>();
    let current_route = use_route::<Route>();
    let nav = use_navigator();

    let island_count = state.with(|s| s.islands.len());
    let dataset_note = state.with(|s| {
        match (&s.dataset_origin, s.loaded_at) {
            (Some(origin), Some(at)) => {
                format!("{} islands · {} · loaded {}", island_count, origin, format_clock(at))
            }
            (Some(origin), None) => format!("{island_count} islands · {origin}"),
            _ => "loading dataset…".to_string(),
        }
    });

    rsx! {
        div { class: "app-shell",
            header {
                class: "app-header",
                div { class: "app-brand",
                    span { class: "app-logo", "🏝️" }
                    h1 { "{APP_NAME}" }
                }
                nav { class: "app-nav",
                    NavButton {
                        active: matches!(current_route, Route::Market {}),
                        onclick: move |_| { nav.push(Route::Market {}); },
                        label: "📊 Market",
                    }
                    NavButton {
                        active: matches!(current_route, Route::Routes {}),
                        onclick: move |_| { nav.push(Route::Routes {}); },
                        label: "🚢 Routes",
                    }
                }
            }
            main { class: "app-main",
                {children}
            }
            footer { class: "app-footer",
                span { "{dataset_note}" }
                span { "{version_label()}" }
            }
        }
    }
}

#[component]
fn NavButton(active: bool, onclick: EventHandler<()>, label: &'static str) -> Element {
    let class = if active { "nav-button nav-active" } else { "nav-button" };
    rsx! {
        button {
            class: class,
            onclick: move |_| onclick.call(()),
            "{label}"
        }
    }
}

fn format_clock(at: std::time::SystemTime) -> String {
    let formatted = format_description::parse("[hour]:[minute]")
        .ok()
        .and_then(|format| OffsetDateTime::from(at).format(&format).ok());
    formatted.unwrap_or_else(|| "just now".to_string())
}
