use dioxus::prelude::*;

use crate::components::error_boundary::ComponentErrorBoundary;

/// Suspense plus error boundary around a registry-backed view. `what` names
/// the thing being loaded in the placeholder.
#[component]
pub fn SuspendWrapper(#[props(into, default)] what: String, children: Element) -> Element {
    rsx! {
        SuspenseBoundary {
            fallback: move |_s: SuspenseContext| rsx! { LoadingIndicator { what: what.clone() } },
            ComponentErrorBoundary { children }
        }
    }
}

#[component]
pub fn LoadingIndicator(#[props(into, default)] what: String) -> Element {
    let text = if what.is_empty() { "Loading...".to_string() } else { format!("Loading {what}...") };
    rsx! {
        div {
            class: "x-loading-indicator",
            style: "color: rgba(0,0,0,0.6); font-size: 18px; font-style: italic; padding: 12px 16px;",
            "{text}"
        }
    }
}
