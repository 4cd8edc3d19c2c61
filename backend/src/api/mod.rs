//! Registry calls, one module per resource.

pub mod datasources;
pub mod providers;
pub mod services;
pub mod vocabularies;
