//! Collaborators the page state machines talk to.

use std::fmt::Display;
use std::future::Future;

use crate::datasource::{DatasourceDetails, DatasourceTypes};
use crate::paging::Paging;
use crate::query_params::QueryParams;
use crate::url_parameter::UrlParameters;

/// Search backend for the datasource listing.
pub trait DatasourceCatalogue {
    type Error: Display;

    fn get_datasources(
        &self,
        parameters: &UrlParameters,
    ) -> impl Future<Output = Result<Paging<DatasourceDetails>, Self::Error>>;

    fn get_datasource_types(&self) -> impl Future<Output = Result<DatasourceTypes, Self::Error>>;
}

/// Performs a navigation to the current page with a new query map.
pub trait QueryNavigator {
    fn navigate(&self, query: QueryParams);
}
