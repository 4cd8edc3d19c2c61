use dioxus::{logger::tracing, prelude::*};

use crate::{
    api::service_api::{portfolio_services, portfolio_vocabulary},
    components::{error_boundary::ComponentErrorDisplay, suspend_boundary::SuspendWrapper},
    routes::Route,
};

const PORTFOLIO_LOAD_ERROR: &str = "An error occurred while retrieving this portfolio. ";

#[component]
pub fn PortfolioItemPage(name: String) -> Element {
    rsx! {
        Title { "EOSC Portal - {name}" }
        div {
            style: "
                display: flex;
                flex-direction: column;
                gap: 16px;
                padding: 36px 40px;
                max-width: 1100px;
            ",
            // the header and the list load independently; either may fail alone
            SuspendWrapper { what: "portfolio", PortfolioHeader { name: name.clone() } }
            h2 { style: "font-size: 24px; font-weight: 500; margin: 0;", "Services in this portfolio" }
            SuspendWrapper { what: "services", PortfolioServices { name } }
        }
    }
}

#[component]
fn PortfolioHeader(name: ReadSignal<String>) -> Element {
    let vocabulary = use_resource(move || portfolio_vocabulary(name.read().clone())).suspend()?.cloned();
    let vocabulary = match vocabulary {
        Err(e) => {
            tracing::error!("portfolio {} vocabulary failed to load: {}", name.read(), e);
            None
        }
        Ok(v) => v,
    };
    let title = vocabulary.as_ref().map(|v| v.name.clone()).unwrap_or_else(|| name.read().clone());

    rsx! {
        h1 { style: "font-size: 36px; font-weight: 500; margin: 0;", "{title}" }
        if let Some(description) = vocabulary.and_then(|v| v.description) {
            p { style: "font-size: 18px; line-height: 1.6;", "{description}" }
        }
    }
}

#[component]
fn PortfolioServices(name: ReadSignal<String>) -> Element {
    let services = use_resource(move || portfolio_services(name.read().clone())).suspend()?.cloned();
    let services = match services {
        Err(e) => {
            tracing::error!("services of portfolio {} failed to load: {}", name.read(), e);
            return rsx! { ComponentErrorDisplay { error_txt: format!("{PORTFOLIO_LOAD_ERROR}{e}") } };
        }
        Ok(s) => s,
    };

    rsx! {
        if services.is_empty() {
            div { style: "font-size: 18px; color: rgba(0,0,0,0.6);", "No services are registered under this portfolio yet." }
        }
        ul {
            for item in services {
                li {
                    key: "{item.service.id}",
                    style: "margin: 6px 0;",
                    Link {
                        to: Route::ServiceLandingPage { id: item.service.id.clone() },
                        "{item.service.name}"
                    }
                    if let Some(tagline) = item.service.tagline.clone() {
                        span { style: "color: rgba(0,0,0,0.6);", " - {tagline}" }
                    }
                }
            }
        }
    }
}
