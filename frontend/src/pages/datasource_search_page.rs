use dioxus::prelude::*;

use common::{catalogue::DatasourceCatalogue, datasource_search::DatasourceSearchState, query_params::QueryParams};

use crate::{
    components::{
        error_boundary::ComponentErrorDisplay,
        search_components::{
            search_input_top_bar::SearchInputTopBar, search_panel_left_view::SearchPanelLeftView,
            search_result_item_card::DatasourceResultCard, search_result_list_controls::SearchResultListControls,
        },
        suspend_boundary::LoadingIndicator,
    },
    data_definitions::{router_navigator::RouterNavigator, server_catalogue::ServerCatalogue},
};

/// Page state shared with the search components.
#[derive(Clone, Copy)]
pub struct DatasourceSearchContext {
    pub state: Signal<DatasourceSearchState>,
}

impl DatasourceSearchContext {
    /// Edits the parameters and navigates to the resulting query.
    pub fn commit(self, edit: impl FnOnce(&mut DatasourceSearchState)) {
        self.commit_if(move |state| {
            edit(state);
            true
        });
    }

    /// Navigates only when `edit` reports a change.
    pub fn commit_if(self, edit: impl FnOnce(&mut DatasourceSearchState) -> bool) {
        let mut state = self.state;
        let changed = {
            let mut state = state.write();
            edit(&mut *state)
        };
        if changed {
            state.peek().commit(&RouterNavigator);
        }
    }

    pub fn select(self, key: &'static str, value: String) {
        let mut state = self.state;
        state.write().select(key, value, &RouterNavigator);
    }
}

#[component]
pub fn DatasourceSearchPage(query: QueryParams) -> Element {
    rsx! {
        Title { "EOSC Portal - Datasources" }
        DatasourceSearchRoot { query }
    }
}

#[component]
fn DatasourceSearchRoot(query: ReadSignal<QueryParams>) -> Element {
    let mut state = use_signal(DatasourceSearchState::new);
    use_context_provider(move || DatasourceSearchContext { state });

    // every route emission restarts the search and drops the one in flight
    let _search = use_resource(move || {
        let raw = query.read().clone();
        async move {
            let parameters = state.write().ingest(&raw);
            let outcome = ServerCatalogue.get_datasources(&parameters).await;
            state.write().complete_search(outcome);
        }
    });
    let _types = use_resource(move || async move {
        let outcome = ServerCatalogue.get_datasource_types().await;
        state.write().complete_datasource_types(outcome);
    });

    rsx! {
        div {
            id: "x-datasource-search-root",
            style: "
                height: 100%;
                width: 100%;
                display: flex;
                flex-direction: column;
            ",
            div {
                id: "x-search-input-top-bar",
                style: "
                    border-bottom: 1px solid rgb(164, 164, 164);
                    background-color: #F8FCFF;
                    flex-shrink: 0;
                    display: flex;
                    flex-direction: row;
                    align-items: center;
                    height: 76px;
                    width: 100%;
                ",
                SearchInputTopBar {}
            }
            div {
                id: "x-search-results-bottom-space",
                style: "
                    width: 100%;
                    display: flex;
                    flex-direction: row;
                    flex-grow: 1;
                    max-height: calc(100% - 76px);
                ",
                div {
                    id: "x-search-results-left-panel",
                    style: "
                        height: 100%;
                        width: 320px;
                        flex-shrink: 0;
                        overflow-y: auto;
                        background-color: #ECEEF2;
                    ",
                    SearchPanelLeftView {}
                }
                div {
                    id: "x-search-results-right-panel",
                    style: "
                        height: 100%;
                        flex-grow: 1;
                        min-width: 300px;
                        display: flex;
                        flex-direction: column;
                    ",
                    SearchResultListControls {}
                    DatasourceResultsView {}
                }
            }
        }
    }
}

#[component]
fn DatasourceResultsView() -> Element {
    let ctx = use_context::<DatasourceSearchContext>();
    let state = ctx.state.read();

    let error = state.error_message.clone().map(|error_txt| rsx! { ComponentErrorDisplay { error_txt } });
    let Some(results) = state.search_results.as_ref() else {
        return rsx! {
            {error}
            if state.error_message.is_none() {
                LoadingIndicator { what: "datasources" }
            }
        };
    };
    let types = state.datasource_types.clone().unwrap_or_default();
    let opacity = if state.loading { "0.5" } else { "1" };

    rsx! {
        {error}
        div {
            style: "
                flex-grow: 1;
                overflow-y: auto;
                padding: 7px;
                opacity: {opacity};
            ",
            if results.results.is_empty() {
                div {
                    style: "font-size: 20px; color: rgba(0,0,0,0.6); padding: 16px;",
                    "No datasources match the selected filters."
                }
            }
            for (index, datasource) in results.results.iter().enumerate() {
                DatasourceResultCard {
                    key: "{datasource.id}",
                    position: results.from + index as u64 + 1,
                    type_label: datasource.eosc_datasource_type.as_deref().map(|t| types.label(t).to_string()),
                    datasource: datasource.clone(),
                }
            }
        }
    }
}
