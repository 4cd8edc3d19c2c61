//! Error boundaries and the inline error panel shared by the portal pages.

use dioxus::{logger::tracing, prelude::*};

use crate::routes::Route;

const ACTION_STYLE: &str = "color: #1C4E9C; background: white; font-size: 16px; border: 1px solid #1C4E9C; padding: 6px 14px; border-radius: 5px; cursor: pointer;";

fn captured_message(err: &ErrorContext) -> String {
    match err.error() {
        Some(e) => e.0.to_string(),
        None => "Unknown error".to_string(),
    }
}

/// Mounted above the router, so recovery is a full reload of the home page.
#[component]
pub fn GlobalErrorBoundary(boundary_name: ReadSignal<String>, children: Element) -> Element {
    rsx! {
        ErrorBoundary {
            handle_error: move |err: ErrorContext| {
                let error_txt = captured_message(&err);
                tracing::error!("{} failed to render: {}", boundary_name.read(), error_txt);
                rsx! {
                    ComponentErrorDisplay {
                        error_txt,
                        a { href: "/", style: ACTION_STYLE, "Reload the portal" }
                    }
                }
            },
            children
        }
    }
}

/// Wraps the routed page; recovering clears the error and goes back home.
#[component]
pub fn PageErrorBoundary(children: Element) -> Element {
    rsx! {
        ErrorBoundary {
            handle_error: move |err: ErrorContext| {
                let error_txt = captured_message(&err);
                tracing::error!("page failed to render: {}", error_txt);
                rsx! {
                    ComponentErrorDisplay {
                        error_txt,
                        button {
                            style: ACTION_STYLE,
                            onclick: move |_| {
                                err.clear_errors();
                                navigator().push(Route::HomePage {});
                            },
                            "Return to Home Page"
                        }
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
            handle_error: move |err: ErrorContext| {
                let error_txt = captured_message(&err);
                rsx! {
                    ComponentErrorDisplay {
                        error_txt,
                        button {
                            style: ACTION_STYLE,
                            onclick: move |_| err.clear_errors(),
                            "Try again"
                        }
                    }
                }
            },
            children
        }
    }
}

/// One readable message, with optional recovery actions below it.
#[component]
pub fn ComponentErrorDisplay(error_txt: ReadSignal<String>, children: Element) -> Element {
    rsx! {
        div {
            role: "alert",
            style: "
                display: flex;
                flex-direction: column;
                align-items: flex-start;
                gap: 10px;
                margin: 12px;
                padding: 12px 16px;
                background: #FFF5F5;
                border: 1px solid #F3B4B4;
                border-left: 4px solid #C62828;
                border-radius: 6px;
            ",
            span { style: "color: #8B1A1A; font-size: 17px; line-height: 1.5;", "{error_txt}" }
            {children}
        }
    }
}
