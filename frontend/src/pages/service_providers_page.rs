use dioxus::{logger::tracing, prelude::*};

use common::{
    provider::{ProviderBundle, ProviderStatus, ProviderStatusUpdate},
    provider_list::ProviderListState,
    search_const::PROVIDERS_PER_PAGE,
};

use crate::{
    api::provider_api::{pending_services_of_provider, provider_bundles, update_provider_status, verify_provider},
    components::{
        error_boundary::ComponentErrorDisplay,
        provider_components::{provider_pagination::ProviderPagination, provider_row::ProviderRow},
        suspend_boundary::LoadingIndicator,
    },
};

#[component]
pub fn ServiceProvidersPage() -> Element {
    let mut list = use_signal(ProviderListState::new);
    let mut from = use_signal(|| 0_u64);
    let mut action_error = use_signal(|| None::<String>);

    let page = use_resource(move || {
        let from = from();
        async move {
            let outcome = provider_bundles(from, PROVIDERS_PER_PAGE).await;
            list.write().complete_page(outcome);

            let needing = list.peek().providers_needing_first_service();
            for provider_id in needing {
                match pending_services_of_provider(provider_id.clone()).await {
                    Ok(pending) => {
                        if let Some(first) = pending.first() {
                            list.write().record_first_service(provider_id, first.id.clone());
                        }
                    }
                    Err(e) => tracing::error!("pending services of {} failed: {}", provider_id, e),
                }
            }
        }
    });

    let on_approve = Callback::new(move |bundle: ProviderBundle| {
        let Some(update) = ProviderStatusUpdate::approval_of(&bundle) else { return };
        spawn(async move {
            match update_provider_status(update).await {
                Ok(updated) => {
                    action_error.set(None);
                    list.write().replace_provider(updated);
                }
                Err(e) => {
                    tracing::error!("approving {} failed: {}", bundle.id, e);
                    action_error.set(Some(format!("Could not update {}: {}", bundle.provider.name, e)));
                }
            }
        });
    });
    let on_reject = Callback::new(move |bundle: ProviderBundle| {
        let new_status = match bundle.status {
            ProviderStatus::PendingTemplateApproval => ProviderStatus::RejectedTemplate,
            _ => ProviderStatus::Rejected,
        };
        let update = ProviderStatusUpdate::verify(bundle.id.clone(), new_status, false);
        spawn(async move {
            match verify_provider(update).await {
                Ok(updated) => {
                    action_error.set(None);
                    list.write().replace_provider(updated);
                }
                Err(e) => {
                    tracing::error!("rejecting {} failed: {}", bundle.id, e);
                    action_error.set(Some(format!("Could not update {}: {}", bundle.provider.name, e)));
                }
            }
        });
    });

    let on_previous = Callback::new(move |_: ()| {
        let next_from = list.write().previous_page();
        if let Some(next_from) = next_from {
            from.set(next_from);
        }
    });
    let on_next = Callback::new(move |_: ()| {
        let next_from = list.write().next_page();
        if let Some(next_from) = next_from {
            from.set(next_from);
        }
    });
    let on_page = Callback::new(move |page: u64| {
        let next_from = list.write().go_to_page(page);
        from.set(next_from);
    });

    let state = list.read();
    let body = if page.read().is_none() && state.providers.is_empty() && state.error_message.is_none() {
        rsx! { LoadingIndicator { what: "providers" } }
    } else {
        rsx! {
            table {
                style: "width: 100%; border-collapse: collapse; background: white; border-radius: 8px;",
                thead {
                    tr {
                        style: "text-align: left; border-bottom: 2px solid #D1D5DB;",
                        th { style: "padding: 10px;", "Provider" }
                        th { style: "padding: 10px;", "Status" }
                        th { style: "padding: 10px;", "State" }
                        th { style: "padding: 10px;", "First service" }
                        th { style: "padding: 10px;", "Actions" }
                    }
                }
                tbody {
                    for bundle in state.providers.iter() {
                        ProviderRow {
                            key: "{bundle.id}",
                            first_service_link: state.link_to_first_service(&bundle.id),
                            edit_first_service_link: state.link_to_edit_first_service(&bundle.id),
                            bundle: bundle.clone(),
                            on_approve,
                            on_reject,
                        }
                    }
                }
            }
            ProviderPagination {
                pages: state.pages.clone(),
                current_page: state.current_page,
                on_previous,
                on_next,
                on_page,
            }
        }
    };

    rsx! {
        Title { "EOSC Portal - Service Providers" }
        div {
            style: "
                display: flex;
                flex-direction: column;
                gap: 16px;
                padding: 36px 40px;
            ",
            h1 { style: "font-size: 36px; font-weight: 500; margin: 0;", "Service providers" }
            div { style: "font-size: 16px; color: rgba(0,0,0,0.6);", "{state.total} registered providers" }
            if let Some(error_txt) = state.error_message.clone() {
                ComponentErrorDisplay { error_txt }
            }
            if let Some(error_txt) = action_error() {
                ComponentErrorDisplay { error_txt }
            }
            {body}
        }
    }
}
