pub mod blockchain_service;
pub mod discovery_service;
pub mod network_config;
pub mod transaction_service;
pub mod validation_service;
pub mod wallet_service;
