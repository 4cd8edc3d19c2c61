//! Pushes query map changes onto the router history.

use common::{catalogue::QueryNavigator, query_params::QueryParams};
use dioxus::prelude::*;

use crate::routes::Route;

/// Navigates to the datasource search page. Must be used from inside the router.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct RouterNavigator;

impl QueryNavigator for RouterNavigator {
    fn navigate(&self, query: QueryParams) {
        navigator().push(Route::datasource_search(query));
    }
}
