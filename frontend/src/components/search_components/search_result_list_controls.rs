//! Result count, ordering and pagination above the result list.

use common::search_const::{KEY_ORDER, KEY_ORDER_FIELD};
use dioxus::prelude::*;

use crate::{components::search_components::pagination_controls::PaginationControls, pages::datasource_search_page::DatasourceSearchContext};

const ORDER_FIELDS: [(&str, &str); 2] = [("registrationdate", "Registration date"), ("name", "Name")];
const ORDERS: [(&str, &str); 2] = [("desc", "Descending"), ("asc", "Ascending")];

#[component]
pub fn SearchResultListControls() -> Element {
    rsx! {
        div {
            id: "x-search-result-list-controls",
            style: "
                display: flex;
                flex-direction: row;
                align-items: center;
                gap: 12px;
                padding: 7px 14px;
                min-height: 56px;
                width: 100%;
                flex-shrink: 0;
            ",
            h1 {
                style: "font-size: 20px; font-weight: 300; color:rgb(75, 87, 112); border-bottom: 1px solid rgb(75, 87, 112); margin: 0;",
                HitCountString {}
            }
            OrderSelects {}
            div { style: "flex-grow: 1;" }
            PaginationControls {}
        }
    }
}

#[component]
fn HitCountString() -> Element {
    let ctx = use_context::<DatasourceSearchContext>();
    let state = ctx.state.read();
    match state.search_results.as_ref() {
        Some(results) => rsx! { "{results.total} datasources" },
        None => rsx! { "-" },
    }
}

#[component]
fn OrderSelects() -> Element {
    let ctx = use_context::<DatasourceSearchContext>();
    let order_field = ctx.state.read().order_field.clone();
    let order = ctx.state.read().order.clone();

    rsx! {
        select {
            value: "{order_field}",
            onchange: move |event: Event<FormData>| ctx.select(KEY_ORDER_FIELD, event.value()),
            for (value, label) in ORDER_FIELDS {
                option { key: "{value}", value: "{value}", selected: value == order_field, "{label}" }
            }
        }
        select {
            value: "{order}",
            onchange: move |event: Event<FormData>| ctx.select(KEY_ORDER, event.value()),
            for (value, label) in ORDERS {
                option { key: "{value}", value: "{value}", selected: value == order, "{label}" }
            }
        }
    }
}
