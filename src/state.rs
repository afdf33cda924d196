use std::sync::Arc;

use crate::{
    models::{discovery::DiscoveryConfig, transfer::SolAmount},
    services::{blockchain_service::NetworkState, wallet_service::RecipientResolver},
};

/// Read-only collaborators shared by every request handler
pub struct AppState {
    pub network: Arc<dyn NetworkState>,
    pub recipients: Arc<dyn RecipientResolver>,
    pub discovery: DiscoveryConfig,
    pub default_amount: SolAmount,
}
