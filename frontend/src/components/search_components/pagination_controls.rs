use dioxus::prelude::*;
use dioxus_free_icons::{Icon, IconShape, icons::md_navigation_icons::{MdArrowBack, MdArrowForward}};

use crate::pages::datasource_search_page::DatasourceSearchContext;

#[component]
pub fn PaginationControls() -> Element {
    let ctx = use_context::<DatasourceSearchContext>();
    let pagination = ctx.state.read().pagination.clone();
    if pagination.total_pages == 0 {
        return rsx! {};
    }

    rsx! {
        div {
            style: "
                display: flex;
                flex-direction: row;
                align-items: center;
                gap: 6px;
            ",
            NavigationButton {
                icon: MdArrowBack,
                label: "Previous Page",
                disabled: !pagination.has_previous(),
                onclick: move |_| ctx.commit_if(|state| state.previous_page()),
            }
            for page in pagination.pages.iter().copied() {
                button {
                    key: "{page}",
                    class: if page == pagination.current_page { "x-page-number-current" } else { "" },
                    style: "
                        min-width: 32px;
                        height: 32px;
                        border-radius: 6px;
                        border: 1px solid rgba(0,0,0,0.2);
                        cursor: pointer;
                        font-size: 15px;
                    ",
                    onclick: move |_| ctx.commit(move |state| state.go_to_page(page - 1)),
                    "{page}"
                }
            }
            NavigationButton {
                icon: MdArrowForward,
                label: "Next Page",
                disabled: !pagination.has_next(),
                onclick: move |_| ctx.commit_if(|state| state.next_page()),
            }
            span {
                style: "font-size: 15px; color: rgba(0,0,0,0.6);",
                "{pagination.current_page} / {pagination.total_pages}"
            }
        }
    }
}

#[component]
fn NavigationButton<I: IconShape + Clone + PartialEq + 'static>(icon: I, label: String, disabled: bool, onclick: EventHandler<MouseEvent>) -> Element {
    rsx! {
        button {
            title: "{label}",
            disabled,
            style: "
                border: none;
                background: none;
                cursor: pointer;
                display: flex;
                align-items: center;
            ",
            onclick: move |e| onclick.call(e),
            Icon { icon, style: "width: 22px; height: 22px; color: rgb(28, 33, 45);" }
        }
    }
}
