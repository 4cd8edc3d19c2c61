//! Datasource search and type vocabulary.

mod get_datasources;
pub use get_datasources::get_datasources;

mod get_datasource_types;
pub use get_datasource_types::get_datasource_types;
