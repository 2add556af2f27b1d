#![allow(dead_code)]

use std::time::SystemTime;

use serde::{Deserialize, Serialize};

use super::entities::TradingPost;

/// Shared session state behind the UI.
///
/// The island list is written exactly once per (re)load and read-only
/// afterwards; every page derives its view from it on render.
#[derive(Clone, Debug, Default)]
pub struct AppState {
    pub islands: Vec<TradingPost>,
    /// Where the current dataset came from, for the footer.
    pub dataset_origin: Option<String>,
    pub loaded_at: Option<SystemTime>,
    /// Set when the dataset load failed; fatal for the session until a
    /// manual refresh succeeds.
    pub load_error: Option<String>,
    pub selected_commodity: Option<String>,
    /// Raw text of the minimum-profit input. Parsed on every use so garbage
    /// degrades to 0 instead of erroring.
    pub min_profit_input: String,
}

impl AppState {
    pub fn has_data(&self) -> bool {
        !self.islands.is_empty() && self.load_error.is_none()
    }

    /// The commodity the pages should show: the user's pick when it is still
    /// traded, otherwise the first traded commodity in catalog order.
    pub fn effective_commodity(&self) -> Option<String> {
        let traded = super::pricing::traded_commodities(&self.islands);
        if let Some(selected) = &self.selected_commodity {
            if traded.iter().any(|meta| meta.key == selected) {
                return Some(selected.clone());
            }
        }
        traded.first().map(|meta| meta.key.to_string())
    }

    pub fn apply_persisted(&mut self, persisted: PersistedState) {
        self.selected_commodity = persisted.selected_commodity;
        self.min_profit_input = persisted.min_profit_input;
    }

    pub fn to_persisted(&self) -> PersistedState {
        PersistedState {
            selected_commodity: self.selected_commodity.clone(),
            min_profit_input: self.min_profit_input.clone(),
        }
    }
}

/// The slice of state worth keeping across sessions.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct PersistedState {
    #[serde(default)]
    pub selected_commodity: Option<String>,
    #[serde(default)]
    pub min_profit_input: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn persisted_round_trip() {
        let mut state = AppState::default();
        state.selected_commodity = Some("vang".to_string());
        state.min_profit_input = "5".to_string();

        let mut restored = AppState::default();
        restored.apply_persisted(state.to_persisted());
        assert_eq!(restored.selected_commodity.as_deref(), Some("vang"));
        assert_eq!(restored.min_profit_input, "5");
    }

    #[test]
    fn empty_state_has_no_data() {
        assert!(!AppState::default().has_data());
        assert_eq!(AppState::default().effective_commodity(), None);
    }

    #[test]
    fn effective_commodity_falls_back_to_first_traded() {
        use crate::domain::entities::{PriceQuote, TradingPost};

        let mut state = AppState::default();
        state.islands = vec![TradingPost {
            name: "A".to_string(),
            items: [(
                "go".to_string(),
                PriceQuote {
                    buy: Some(1.0),
                    sell: None,
                },
            )]
            .into_iter()
            .collect(),
        }];

        // Nothing selected: first traded commodity wins.
        assert_eq!(state.effective_commodity().as_deref(), Some("go"));
        // A stale selection for an untraded commodity falls back too.
        state.selected_commodity = Some("kimcuong".to_string());
        assert_eq!(state.effective_commodity().as_deref(), Some("go"));
        // A valid selection sticks.
        state.selected_commodity = Some("go".to_string());
        assert_eq!(state.effective_commodity().as_deref(), Some("go"));
    }
}
