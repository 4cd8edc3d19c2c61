//! Server functions over the registry client.

pub mod datasource_api;
pub mod provider_api;
pub mod service_api;

/// Keeps a registry 404 visible to the page, anything else is a 500.
#[cfg(feature = "server")]
pub(crate) fn server_error(error: anyhow::Error) -> dioxus::prelude::ServerFnError {
    let code = match backend::registry_utils::registry_client::registry_status(&error) {
        Some(404) => 404,
        _ => 500,
    };
    dioxus::prelude::ServerFnError::ServerError { message: error.to_string(), code, details: None }
}

/// Status code carried by a failed server function call.
pub(crate) fn error_code(error: &dioxus::prelude::ServerFnError) -> Option<u16> {
    match error {
        dioxus::prelude::ServerFnError::ServerError { code, .. } => Some(*code),
        _ => None,
    }
}
