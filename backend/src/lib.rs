//! Server side access to the EOSC resource registry.

pub mod api;
pub mod registry_utils;
