//! Common library shared between frontend and backend.

extern crate serde;


pub mod search_const;
pub mod query_params;
pub mod url_parameter;
pub mod paging;
pub mod pagination;
pub mod debounce;
pub mod catalogue;
pub mod datasource;
pub mod datasource_search;
pub mod provider;
pub mod provider_list;
pub mod service;
pub mod vocabulary;
