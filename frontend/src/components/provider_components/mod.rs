pub mod provider_row;
pub mod provider_pagination;
