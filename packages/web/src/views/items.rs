use dioxus::prelude::*;

use api::ItemClient;
use ui::{
    dispatch_event, EditToolbar, ErrorBanner, ErrorBannerState, ItemGrid, RowEvent, RowSet,
};

/// Base URL for the item API: the page's own origin in the browser, an
/// overridable localhost default elsewhere.
fn api_base() -> String {
    #[cfg(target_arch = "wasm32")]
    {
        web_sys::window()
            .and_then(|w| w.location().origin().ok())
            .unwrap_or_default()
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        std::env::var("API_BASE_URL").unwrap_or_else(|_| "http://localhost:8080".to_string())
    }
}

#[component]
pub fn Items() -> Element {
    let client = use_context_provider(|| ItemClient::new(api_base()));
    let rows = use_context_provider(|| Signal::new(RowSet::default()));
    let banner = use_context_provider(|| Signal::new(ErrorBannerState::default()));

    // Load the list once on mount.
    let loader_client = client.clone();
    let _loader = use_resource(move || {
        let client = loader_client.clone();
        async move {
            ui::refresh(client, rows, banner).await;
        }
    });

    let on_event = EventHandler::new(move |event: RowEvent| {
        dispatch_event(client.clone(), rows, banner, event);
    });

    rsx! {
        div {
            class: "items-page",
            h3 { class: "items-title", "Shopping List" }
            ErrorBanner {}
            div {
                class: "items-grid-wrap",
                EditToolbar { on_event }
                ItemGrid { rows: rows(), on_event }
            }
        }
    }
}
