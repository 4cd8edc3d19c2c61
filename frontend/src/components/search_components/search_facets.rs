use dioxus::prelude::*;
use dioxus_free_icons::{Icon, icons::md_toggle_icons::{MdCheckBox, MdCheckBoxOutlineBlank}};

use common::{paging::{Facet, FacetValue}, search_const::KEY_QUERY};

use crate::pages::datasource_search_page::DatasourceSearchContext;

#[component]
pub fn SearchFacets() -> Element {
    let ctx = use_context::<DatasourceSearchContext>();
    let facets = use_memo(move || {
        let state = ctx.state.read();
        let Some(results) = state.search_results.as_ref() else { return Vec::new() };
        results.facets.iter().filter(|f| f.field != KEY_QUERY && !f.values.is_empty()).cloned().collect::<Vec<_>>()
    });

    rsx! {
        div {
            id: "x-search-facets",
            style: "
                display: flex;
                flex-direction: column;
                gap: 12px;
            ",
            for facet in facets() {
                FacetGroup { key: "{facet.field}", facet: facet.clone() }
            }
        }
    }
}

#[component]
fn FacetGroup(facet: ReadSignal<Facet>) -> Element {
    let ctx = use_context::<DatasourceSearchContext>();
    let title = use_memo(move || {
        let facet = facet.read();
        facet.label.clone().unwrap_or(facet.field.clone())
    });
    let is_filtered = use_memo(move || facet.read().values.iter().any(|v| v.is_checked));
    let border_color = use_memo(move || if is_filtered() { "rgba(0,0,255,0.9)" } else { "rgba(0,0,0,0.2)" });

    rsx! {
        div {
            style: "
                background: white;
                border: 2px solid {border_color()};
                border-radius: 10px;
                padding: 10px;
                box-shadow: 0 0 10px 0 rgba(0, 0, 0, 0.1);
            ",
            div {
                style: "
                    display: flex;
                    flex-direction: row;
                    align-items: center;
                    gap: 8px;
                ",
                span { style: "font-size: 18px; font-weight: 500;", "{title}" }
                div { style: "flex: 1 1 auto;" }
                if is_filtered() {
                    button {
                        style: "
                            border: none;
                            background: none;
                            color: #1F4FB8;
                            cursor: pointer;
                            font-size: 14px;
                        ",
                        onclick: move |_| {
                            let field = facet.read().field.clone();
                            ctx.commit(move |state| state.clear(&field));
                        },
                        "Clear"
                    }
                }
            }
            ul {
                style: "list-style: none; padding: 0; margin: 4px 0 0 0;",
                for value in facet.read().values.iter() {
                    li {
                        key: "{value.value}-{value.count}-{value.is_checked}",
                        FacetCheckbox { field: facet.read().field.clone(), value: value.clone() }
                    }
                }
            }
        }
    }
}

#[component]
fn FacetCheckbox(field: ReadSignal<String>, value: ReadSignal<FacetValue>) -> Element {
    let ctx = use_context::<DatasourceSearchContext>();
    let FacetValue { is_checked, count, .. } = value.read().clone();
    let display_string = value.read().display_string().to_string();

    rsx! {
        div {
            class: "x-facet-list-item",
            style: "
                display: flex;
                flex-direction: row;
                gap: 10px;
                cursor: pointer;
                padding: 4px;
                align-items: center;
            ",
            onclick: move |_| {
                let field = field.read().clone();
                let raw_value = value.read().value.clone();
                ctx.commit(move |state| state.toggle_value(&field, &raw_value, !is_checked));
            },

            if is_checked {
                Icon { icon: MdCheckBox, style: "width: 22px; height: 22px; color: rgb(28, 33, 45); flex-shrink: 0;" }
            } else {
                Icon { icon: MdCheckBoxOutlineBlank, style: "width: 22px; height: 22px; color: black; flex-shrink: 0;" }
            }
            div {
                style: "
                    font-size: 16px;
                    overflow: hidden;
                    text-overflow: ellipsis;
                    white-space: nowrap;
                    min-width: 0;
                ",
                "{display_string}"
            }
            div { style: "flex: 1 1 auto;" }
            div {
                style: "font-size: 16px; color: rgba(28, 33, 45, 0.7); flex-shrink: 0;",
                "{count}"
            }
        }
    }
}
