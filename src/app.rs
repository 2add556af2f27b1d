use std::time::SystemTime;

use dioxus::{prelude::*, signals::Signal};

use crate::{
    domain::AppState,
    infra::dataset::{DatasetClient, DatasetSource},
    ui::{
        components::toast::{push_toast, Toast, ToastKind, ToastMessage},
        pages::{MarketPage, RoutesPage},
        shell::Shell,
    },
    util::{
        assets,
        persistence::{load_persisted_state, save_persisted_state},
    },
};

#[derive(Routable, Clone, PartialEq)]
pub enum Route {
    #[route("/")]
    Market {},
    #[route("/routes")]
    Routes {},
}

#[component]
pub fn App() -> Element {
    let state = use_signal(AppState::default);
    use_hook({
        let mut state = state.clone();
        move || {
            if let Some(saved) = load_persisted_state() {
                state.with_mut(|st| st.apply_persisted(saved));
            }
        }
    });
    use_context_provider(|| state.clone());

    let toasts = use_signal(Vec::<ToastMessage>::new);
    use_context_provider(|| toasts.clone());

    // Manual refresh trigger shared across routes; bumping it re-runs the load.
    let reload_tick = use_signal(|| 0u32);
    use_context_provider(|| reload_tick.clone());

    let _dataset = use_resource({
        let state = state.clone();
        let toasts = toasts.clone();
        let reload_tick = reload_tick.clone();
        move || {
            let tick = reload_tick();
            async move { load_dataset(state.clone(), toasts.clone(), tick).await }
        }
    });

    rsx! {
        document::Link { rel: "icon", href: assets::favicon_data_uri() }
        document::Style { "{assets::main_css()}" }
        Router::<Route> {}
        Toast {}
    }
}

pub fn persist_user_state(state: &Signal<AppState>) {
    let snapshot = state.with(|st| st.to_persisted());
    if let Err(err) = save_persisted_state(&snapshot) {
        println!("Failed to persist user state: {err}");
    }
}

/// Load the dataset once at startup and again on every manual refresh.
/// A failed load is fatal for the session: the pages show the error until a
/// later refresh succeeds.
async fn load_dataset(
    mut state: Signal<AppState>,
    toasts: Signal<Vec<ToastMessage>>,
    tick: u32,
) -> bool {
    let source = match DatasetSource::from_env() {
        Ok(source) => source,
        Err(err) => {
            record_load_failure(&mut state, toasts, format!("{err}"));
            return false;
        }
    };

    let client = match DatasetClient::new() {
        Ok(client) => client,
        Err(err) => {
            record_load_failure(&mut state, toasts, format!("{err}"));
            return false;
        }
    };

    match client.load(&source).await {
        Ok(islands) => {
            let count = islands.len();
            state.with_mut(|st| {
                st.islands = islands;
                st.dataset_origin = Some(source.describe());
                st.loaded_at = Some(SystemTime::now());
                st.load_error = None;
            });
            if count == 0 {
                push_toast(toasts, ToastKind::Warning, "Dataset contains no islands.");
            } else if tick > 0 {
                push_toast(
                    toasts,
                    ToastKind::Info,
                    format!("Reloaded {count} islands."),
                );
            }
            true
        }
        Err(err) => {
            record_load_failure(&mut state, toasts, format!("{err}"));
            false
        }
    }
}

fn record_load_failure(
    state: &mut Signal<AppState>,
    toasts: Signal<Vec<ToastMessage>>,
    message: String,
) {
    println!("Dataset load failed: {message}");
    state.with_mut(|st| {
        st.islands.clear();
        st.load_error = Some(message.clone());
    });
    push_toast(toasts, ToastKind::Error, message);
}

#[component]
pub fn Market() -> Element {
    rsx! { Shell { MarketPage {} } }
}

#[component]
pub fn Routes() -> Element {
    rsx! { Shell { RoutesPage {} } }
}
