use dioxus::prelude::*;
use dioxus_free_icons::icons::md_action_icons::MdSearch;
use dioxus_free_icons::Icon;

use common::{query_params::QueryParams, search_const::KEY_QUERY};
use crate::routes::Route;

/// Home page
#[component]
pub fn HomePage() -> Element {
    rsx! {
        Title { "EOSC Portal - Home" }
        div {
            id: "x-home-container",
            style: "
                display:flex;
                flex-direction: column;
                gap: 20px;
                width: 100%;
                height: 100%;
                padding: 36px 40px;
                background: #F5F6F8;
                overflow: auto;
            ",

            div {
                style: "
                    color: #0F172A;
                    font-size: 46px;
                    font-weight: 500;
                    letter-spacing: -0.02em;
                ",
                "EOSC Portal"
            }
            div {
                style: "
                    color: #111827;
                    font-size: 26px;
                    line-height: 1.6;
                    max-width: 620px;
                    font-weight: 500;
                ",
                "Find research datasources and services registered in the European Open Science Cloud."
            }

            div {
                style: "
                    display:flex;
                    flex-direction: row;
                    gap: 20px;
                    flex-wrap: wrap;
                    align-items: stretch;
                    margin-top: 10px;
                ",
                DatasourceSearchCard {}
                ProvidersCard {}
            }
        }
    }
}

#[component]
fn DatasourceSearchCard() -> Element {
    rsx! {
        div {
            id: "x-card-datasource-search",
            style: "
                display:flex;
                flex-direction: column;
                gap: 14px;
                width: 520px;
                min-height: 240px;
                border-radius: 22px;
                padding: 22px 22px 26px 22px;
                background: linear-gradient(135deg, #2D208A 0%, #5B3DF5 100%);
                color: white;
                box-shadow: 0 8px 24px rgba(0,0,0,0.12);
            ",
            div { style: "font-size: 30px; font-weight: 500;", "Datasources" }
            div {
                style: "
                    font-size: 20px;
                    font-weight: 500;
                    line-height: 1.5;
                    color: rgba(255,255,255,0.92);
                ",
                "Browse repositories and data archives, filter them by portfolio, user group or readiness level."
            }
            div { style: "height: 8px; padding-top: 7px; margin-top:7px; border-top: 1px solid white; width: 100%; " }
            SearchCardInput {}
        }
    }
}

#[component]
fn SearchCardInput() -> Element {
    let n2 = navigator();
    let mut search_q = use_signal(|| "".to_string());
    rsx! {
        div {
            style: "
                display:flex;
                align-items:center;
                gap: 10px;
                background-color: white;
                border-radius: 9999px;
                padding: 10px 14px;
                height: 42px;
                color: #111827;
            ",
            Icon { icon: MdSearch, style: "width: 20px; height: 20px; color:#6B7280;" }
            input {
                r#type: "text",
                placeholder: "Search datasources",
                style: "
                    flex:1;
                    border: none;
                    outline: none;
                    background: transparent;
                    color: #111827;
                    font-size: 14px;
                ",
                oninput: move |e| {
                    *search_q.write() = e.value();
                },
                onkeypress: move |e| {
                    if e.key() == Key::Enter {
                        e.prevent_default();
                        let mut query = QueryParams::new();
                        let text = search_q.read().trim().to_string();
                        if !text.is_empty() {
                            query.insert(KEY_QUERY, text);
                        }
                        n2.push(Route::datasource_search(query));
                    }
                },
            }
        }
    }
}

#[component]
fn ProvidersCard() -> Element {
    rsx! {
        div {
            id: "x-card-providers",
            style: "
                display:flex;
                flex-direction: column;
                gap: 12px;
                width: 520px;
                min-height: 240px;
                border-radius: 22px;
                padding: 22px 22px 26px 22px;
                background: linear-gradient(135deg, #0B7A2B 0%, #23A340 60%, #178E35 100%);
                color: white;
                box-shadow: 0 8px 24px rgba(0,0,0,0.12);
            ",
            div { style: "font-size: 26px; font-weight: 500;", "Service providers" }
            div {
                style: "
                    font-size: 20px;
                    font-weight: 500;
                    line-height: 1.6;
                    color: rgba(255,255,255,0.96);
                ",
                "Review provider registrations and move them through the onboarding steps."
            }
            Link {
                to: Route::ServiceProvidersPage {},
                span {
                    style: "color: white; font-size: 18px; text-decoration: underline;",
                    "Open the provider list"
                }
            }
        }
    }
}
