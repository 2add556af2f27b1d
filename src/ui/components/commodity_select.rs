use dioxus::prelude::*;

use crate::app::persist_user_state;
use crate::domain::{traded_commodities, AppState};

/// Selector over the commodities that are actually traded somewhere,
/// in catalog order. Writes the pick back into shared state and persists it.
#[component]
pub fn CommoditySelect() -> Element {
    let state = use_context::<Signal<AppState>>();
    let traded = state.with(|s| {
        traded_commodities(&s.islands)
            .into_iter()
            .map(|meta| (meta.key, meta.display()))
            .collect::<Vec<_>>()
    });
    let selected = state.with(|s| s.effective_commodity()).unwrap_or_default();

    if traded.is_empty() {
        return rsx! {
            p { class: "empty-note", "No traded commodities in the dataset." }
        };
    }

    let mut state_mut = state;
    rsx! {
        label {
            class: "field",
            span { class: "field-label", "Commodity" }
            select {
                class: "field-input",
                value: "{selected}",
                onchange: move |event| {
                    state_mut.with_mut(|s| s.selected_commodity = Some(event.value()));
                    persist_user_state(&state_mut);
                },
                for (key, display) in traded {
                    option { value: "{key}", selected: key == selected, "{display}" }
                }
            }
        }
    }
}
