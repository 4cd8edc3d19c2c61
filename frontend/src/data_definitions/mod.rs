pub mod server_catalogue;
pub mod router_navigator;
