use dioxus::prelude::*;

/// Blocking error notification shown above the grid.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ErrorBannerState {
    pub message: Option<String>,
}

impl ErrorBannerState {
    pub fn show(&mut self, message: impl Into<String>) {
        self.message = Some(message.into());
    }

    pub fn dismiss(&mut self) {
        self.message = None;
    }
}

/// Consume the `Signal<ErrorBannerState>` from context.
pub fn use_error_banner() -> Signal<ErrorBannerState> {
    use_context::<Signal<ErrorBannerState>>()
}

/// Renders the current error, if any, with a dismiss button.
#[component]
pub fn ErrorBanner() -> Element {
    let mut banner = use_error_banner();

    rsx! {
        if let Some(message) = banner().message {
            div {
                class: "error-banner",
                span { class: "error-banner-text", "⚠️ {message}" }
                button {
                    class: "error-banner-dismiss",
                    onclick: move |_| banner.write().dismiss(),
                    "Dismiss"
                }
            }
        }
    }
}
