use dioxus::prelude::*;

use crate::components::error_boundary::ComponentErrorBoundary;

#[component]
pub fn SuspendWrapper(children: Element) -> Element {
    rsx! {
        SuspenseBoundary {
            fallback: |_s: SuspenseContext| rsx! {
                LoadingIndicator { label: "Loading...".to_string() }
            },
            ComponentErrorBoundary {
                children
            }
        }
    }
}

/// Placeholder shown while a catalog is still being fetched.
#[component]
pub fn LoadingIndicator(label: ReadSignal<String>) -> Element {
    rsx! {
        div {
            class: "x-loading-indicator",
            div { class: "x-loading-spinner" }
            span { "{label}" }
        }
    }
}
