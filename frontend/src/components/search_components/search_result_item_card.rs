//! Search result item card component.

use common::datasource::DatasourceDetails;
use dioxus::prelude::*;
use dioxus_free_icons::{Icon, icons::{go_icons::GoDatabase, md_action_icons::MdOpenInNew}};

use crate::routes::Route;

#[component]
pub fn DatasourceResultCard(datasource: ReadSignal<DatasourceDetails>, position: u64, #[props(!optional)] type_label: Option<String>) -> Element {
    let DatasourceDetails { id, name, abbreviation, description, logo, webpage, portfolios, .. } = datasource.read().clone();

    rsx! {
        div {
            style: "
                display: flex;
                flex-direction: column;
                gap: 7px;
                background: white;
                border: 3px solid #AAAAAA33;
                border-radius: 8px;
                padding: 12px 16px;
                margin: 8px 8px;
                width: calc(100% - 16px);
            ",
            div {
                style: "
                    display: flex;
                    flex-direction: row;
                    align-items: center;
                    gap: 12px;
                    width: 100%;
                ",
                span {
                    style: "font-size: 20px; font-weight: 200; color: rgba(0, 0, 0, 0.5);",
                    "{position}."
                }
                if let Some(logo) = logo {
                    img { src: "{logo}", alt: "{abbreviation}", style: "width: 32px; height: 32px; object-fit: contain;" }
                } else {
                    Icon { icon: GoDatabase, style: "width: 24px; height: 24px; color: rgba(0, 0, 0, 0.5);" }
                }
                Link {
                    to: Route::ServiceLandingPage { id: id.clone() },
                    span {
                        style: "font-size: 20px; line-height: 28px; font-weight: 400;",
                        "{name}"
                    }
                }
                if !abbreviation.is_empty() && abbreviation != name {
                    span { style: "font-size: 16px; color: rgba(0, 0, 0, 0.5);", "({abbreviation})" }
                }
                div { style: "flex: 1 1 auto;" }
                if let Some(type_label) = type_label {
                    span {
                        style: "font-size: 16px; font-style: italic; color: rgba(0, 0, 0, 0.5);",
                        "{type_label}"
                    }
                }
                if let Some(webpage) = webpage {
                    a {
                        href: "{webpage}",
                        target: "_blank",
                        title: "Open website",
                        Icon { icon: MdOpenInNew, style: "width: 20px; height: 20px; color: rgb(28, 33, 45);" }
                    }
                }
            }
            div {
                style: "
                    font-size: 16px;
                    line-height: 23px;
                    overflow: hidden;
                    display: -webkit-box;
                    -webkit-line-clamp: 3;
                    -webkit-box-orient: vertical;
                ",
                "{description}"
            }
            if !portfolios.is_empty() {
                div {
                    style: "display: flex; flex-direction: row; gap: 6px; flex-wrap: wrap;",
                    for portfolio in portfolios {
                        span {
                            key: "{portfolio}",
                            style: "font-size: 13px; padding: 2px 8px; border-radius: 9999px; background: #EEF2FF; border: 1px solid #C7D2FE;",
                            "{portfolio}"
                        }
                    }
                }
            }
        }
    }
}
