use dioxus::prelude::*;

use common::query_params::QueryParams;

use crate::components::navbar::Navbar;
use crate::pages::datasource_search_page::DatasourceSearchPage;
use crate::pages::home_page::HomePage;
use crate::pages::page_not_found::PageNotFound;
use crate::pages::portfolio_item_page::PortfolioItemPage;
use crate::pages::service_landing_page::ServiceLandingPage;
use crate::pages::service_providers_page::ServiceProvidersPage;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(Navbar)]


    #[route("/")]
    HomePage {},


    #[route("/datasources/search?:..query")]
    DatasourceSearchPage { query: QueryParams },


    #[route("/admin/service-providers")]
    ServiceProvidersPage {},


    #[route("/service/:id")]
    ServiceLandingPage { id: String },


    #[route("/portfolio/:name")]
    PortfolioItemPage { name: String },

    #[end_layout]

    #[route("/:..segments")]
    PageNotFound { segments: Vec<String> },
}

impl Route {
    pub fn datasource_search(query: QueryParams) -> Self {
        Self::DatasourceSearchPage { query }
    }
}
