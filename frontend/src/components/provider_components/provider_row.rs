//! One provider of the admin list with its approval actions.

use common::provider::{ProviderBundle, ProviderStatus};
use dioxus::prelude::*;

#[component]
pub fn ProviderRow(
    bundle: ReadSignal<ProviderBundle>,
    #[props(!optional)] first_service_link: Option<String>,
    #[props(!optional)] edit_first_service_link: Option<String>,
    on_approve: Callback<ProviderBundle>,
    on_reject: Callback<ProviderBundle>,
) -> Element {
    let ProviderBundle { provider, status, active, .. } = bundle.read().clone();
    let can_approve = status.next().is_some();
    let can_reject = !matches!(status, ProviderStatus::Rejected | ProviderStatus::Approved);
    let status_color = match status {
        ProviderStatus::Approved => "#0B7A2B",
        ProviderStatus::Rejected | ProviderStatus::RejectedTemplate => "#B91C1C",
        _ => "#B45309",
    };

    rsx! {
        tr {
            style: "border-bottom: 1px solid #E5E7EB;",
            td {
                style: "padding: 10px; font-size: 17px;",
                "{provider.name}"
                if !provider.abbreviation.is_empty() {
                    span { style: "color: rgba(0,0,0,0.5);", " ({provider.abbreviation})" }
                }
            }
            td {
                style: "padding: 10px; font-size: 15px; color: {status_color};",
                "{status}"
            }
            td {
                style: "padding: 10px; font-size: 15px;",
                if active { "active" } else { "inactive" }
            }
            td {
                style: "padding: 10px; font-size: 15px;",
                if let Some(link) = first_service_link {
                    a { href: "{link}", "View first service" }
                }
                if let Some(link) = edit_first_service_link {
                    a { href: "{link}", style: "margin-left: 10px;", "Edit" }
                }
            }
            td {
                style: "padding: 10px; display: flex; gap: 8px;",
                button {
                    disabled: !can_approve,
                    style: "padding: 4px 12px; border-radius: 6px; border: 1px solid #0B7A2B; background: white; color: #0B7A2B; cursor: pointer;",
                    onclick: move |_| on_approve.call(bundle.read().clone()),
                    "Approve"
                }
                button {
                    disabled: !can_reject,
                    style: "padding: 4px 12px; border-radius: 6px; border: 1px solid #B91C1C; background: white; color: #B91C1C; cursor: pointer;",
                    onclick: move |_| on_reject.call(bundle.read().clone()),
                    "Reject"
                }
            }
        }
    }
}
