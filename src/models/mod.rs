pub mod action;
pub mod address;
pub mod api_response;
pub mod discovery;
pub mod network_config;
pub mod network_snapshot;
pub mod transaction;
pub mod transfer;
