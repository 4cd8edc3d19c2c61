use dioxus::{logger::tracing, prelude::*};

use common::service::{RichService, SERVICE_LOAD_ERROR, related_service_ids};

use crate::{
    api::{error_code, service_api::{rich_service, selected_services}},
    components::{error_boundary::ComponentErrorDisplay, suspend_boundary::SuspendWrapper},
    routes::Route,
};

#[component]
pub fn ServiceLandingPage(id: String) -> Element {
    rsx! {
        Title { "EOSC Portal - Service" }
        SuspendWrapper { what: "service", ServiceLandingView { id } }
    }
}

#[component]
fn ServiceLandingView(id: ReadSignal<String>) -> Element {
    let service = use_resource(move || rich_service(id.read().clone())).suspend()?.cloned();
    let RichService { service, .. } = match service {
        Err(e) if error_code(&e) == Some(404) => {
            return rsx! { NotFoundRedirect { segments: vec!["service".to_string(), id.read().clone()] } };
        }
        Err(e) => {
            tracing::error!("service {} failed to load: {}", id.read(), e);
            return rsx! { ComponentErrorDisplay { error_txt: format!("{SERVICE_LOAD_ERROR}{e}") } };
        }
        Ok(s) => s,
    };
    let related = related_service_ids(&service);
    let availability = service.geographical_availabilities.join(", ");

    rsx! {
        Title { "EOSC Portal - {service.name}" }
        div {
            style: "
                display: flex;
                flex-direction: column;
                gap: 16px;
                padding: 36px 40px;
                max-width: 1100px;
            ",
            div {
                style: "display: flex; flex-direction: row; align-items: center; gap: 16px;",
                if let Some(logo) = service.logo.clone() {
                    img { src: "{logo}", alt: "{service.name}", style: "width: 64px; height: 64px; object-fit: contain;" }
                }
                div {
                    h1 { style: "font-size: 36px; font-weight: 500; margin: 0;", "{service.name}" }
                    if let Some(tagline) = service.tagline.clone() {
                        div { style: "font-size: 18px; color: rgba(0,0,0,0.6);", "{tagline}" }
                    }
                }
            }
            if let Some(webpage) = service.webpage.clone() {
                a { href: "{webpage}", target: "_blank", "{webpage}" }
            }
            p { style: "font-size: 17px; line-height: 1.6; white-space: pre-wrap;", "{service.description}" }
            if !availability.is_empty() {
                div {
                    style: "font-size: 16px;",
                    b { "Available in: " }
                    "{availability}"
                }
            }
            if !related.is_empty() {
                h2 { style: "font-size: 24px; font-weight: 500; margin: 12px 0 0 0;", "Related services" }
                SuspendWrapper { what: "related services", RelatedServices { service_ids: related.clone() } }
            }
        }
    }
}

#[component]
fn RelatedServices(service_ids: ReadSignal<Vec<String>>) -> Element {
    let services = use_resource(move || selected_services(service_ids.read().clone())).suspend()?.cloned();
    let services = match services {
        Err(e) => {
            tracing::error!("related services failed to load: {}", e);
            return rsx! { ComponentErrorDisplay { error_txt: format!("{SERVICE_LOAD_ERROR}{e}") } };
        }
        Ok(s) => s,
    };

    rsx! {
        ul {
            for related in services {
                li {
                    key: "{related.service.id}",
                    Link {
                        to: Route::ServiceLandingPage { id: related.service.id.clone() },
                        "{related.service.name}"
                    }
                }
            }
        }
    }
}

/// Replaces the current history entry with the not-found page.
#[component]
fn NotFoundRedirect(segments: Vec<String>) -> Element {
    use_effect(move || {
        navigator().replace(Route::PageNotFound { segments: segments.clone() });
    });
    rsx! {}
}
