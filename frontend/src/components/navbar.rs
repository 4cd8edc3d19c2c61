//! Side navigation bar component.

use common::query_params::QueryParams;
use dioxus::prelude::*;
use dioxus_free_icons::icons::md_action_icons::{MdHome, MdSearch, MdSupervisorAccount};
use dioxus_free_icons::{Icon, IconShape};

use crate::components::error_boundary::PageErrorBoundary;
use crate::routes::Route;

/// Shared navbar component.
#[component]
pub fn Navbar() -> Element {
    rsx! {
        div {
            id:"x-nav-container",
            style:"
                display:flex;
                flex-direction: row;
                width: 100%;
                height: 100%;
            ",

            div {
                id:"x-nav-sidebar",
                style:"
                    display:flex;
                    flex-direction: column;
                    gap: 40px;
                    width: 70px;
                    height: 100%;
                    background-color: #1C212D;
                    border: 1px solid #000000;
                    padding: 16px;
                ",
                NavbarTopLogo {},
                NavbarIconLinks {},
            },

            div {
                id:"x-page-container",
                style: "flex-grow:1; min-width: 100px; height: 100%; overflow: auto;",
                PageErrorBoundary {
                    Outlet::<Route> {}
                }
            }
        }
    }
}

#[component]
fn NavbarTopLogo() -> Element {
    rsx! {
        Link {
            to: Route::HomePage {},
            span {
                style: "color: white; font-size: 16px; font-weight: 700; letter-spacing: 0.05em;",
                "EOSC"
            }
        }
    }
}

#[component]
fn NavbarIconLinks() -> Element {
    rsx! {
        div {
            style: "
                display:flex;
                flex-direction: column;
                gap: 24px;
                width: 38px;
                align-items: center;
                justify-content: center;
            ",
            IconLink { to: Route::HomePage {}, icon: MdHome, label: "Home" }
            IconLink { to: Route::datasource_search(QueryParams::new()), icon: MdSearch, label: "Datasources" }
            IconLink { to: Route::ServiceProvidersPage {}, icon: MdSupervisorAccount, label: "Service Providers" }
        }
    }
}

#[component]
fn IconLink<T: IconShape + Clone + PartialEq + 'static>(to: Route, icon: T, label: String) -> Element {
    rsx! {
        Link {
            to: to,
            span {
                title: "{label}",
                style: "color:white;",
                Icon { icon: icon, style: "width: 26px; height: 26px;" }
            }
        }
    }
}
