//! Left panel: datasource type filter and facets.

use dioxus::prelude::*;

use common::search_const::KEY_DATASOURCE_TYPE;

use crate::{components::search_components::search_facets::SearchFacets, pages::datasource_search_page::DatasourceSearchContext};

#[component]
pub fn SearchPanelLeftView() -> Element {
    rsx! {
        div {
            id: "x-search-panel-left-wrapper",
            style: "
                display: flex;
                flex-direction: column;
                gap: 12px;
                padding: 12px;
            ",
            DatasourceTypeSelect {}
            SearchFacets {}
        }
    }
}

#[component]
fn DatasourceTypeSelect() -> Element {
    let ctx = use_context::<DatasourceSearchContext>();
    let state = ctx.state.read();
    let selected = state.eosc_datasource_type.clone();
    let types = state.datasource_types.clone().unwrap_or_default();

    rsx! {
        label {
            style: "display: flex; flex-direction: column; gap: 4px; font-size: 15px;",
            "Datasource type"
            select {
                value: "{selected}",
                onchange: move |event: Event<FormData>| {
                    let value = event.value();
                    if value.is_empty() {
                        ctx.commit(|state| state.clear(KEY_DATASOURCE_TYPE));
                    } else {
                        ctx.select(KEY_DATASOURCE_TYPE, value);
                    }
                },
                option { value: "", selected: selected.is_empty(), "All types" }
                for (id, label) in types.0.iter() {
                    option { key: "{id}", value: "{id}", selected: *id == selected, "{label}" }
                }
            }
        }
    }
}
