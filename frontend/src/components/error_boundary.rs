//! Error boundary components for rendering failures.

use dioxus::prelude::*;

#[component]
pub fn GlobalErrorBoundary(boundary_name: ReadSignal<String>, children: Element) -> Element {
    rsx! {
        ErrorBoundary {
            handle_error: move |err: ErrorContext| {
                rsx! {
                    div {
                        class: "x-error-panel",
                        h1 { class: "x-error-title", "Something went wrong" }
                        p { class: "x-error-subtitle", "Boundary: {boundary_name}" }
                        // plain link: the App-level boundary sits outside the router
                        a { href: "/", class: "x-error-link", "Return to Home Page" }
                        pre { class: "x-error-details", "{err:#?}" }
                    }
                }
            },
            children
        }
    }
}

#[component]
pub fn ComponentErrorBoundary(children: Element) -> Element {
    rsx! {
        ErrorBoundary {
            handle_error: |err: ErrorContext| {
                let error_txt = match err.error() {
                    Some(e) => format!("{:#?}", e.0),
                    None => "Unknown error".to_string(),
                };
                rsx! {
                    ComponentErrorDisplay {
                        error_txt,
                        button {
                            class: "x-pill-button",
                            onclick: move |_| {
                                err.clear_errors();
                            },
                            "Try Again"
                        }
                    }
                }
            },
            div {
                width: "100%",
                {children}
            }
        }
    }
}

#[component]
pub fn ComponentErrorDisplay(error_txt: ReadSignal<String>, children: Element) -> Element {
    rsx! {
        div {
            class: "x-error-panel",
            h2 { class: "x-error-title", "Component Error" }
            pre { class: "x-error-details", "{error_txt}" }
            {children}
        }
    }
}
