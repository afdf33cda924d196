use std::env;
use std::time::Duration;

use crate::{
    errors::ConfigError,
    models::{
        address::Address, discovery::DiscoveryConfig, network_config::NetworkConfig,
        transfer::SolAmount,
    },
    services::{network_config::get_network_config, validation_service::ValidationService},
};

pub const DEFAULT_SOL_AMOUNT: &str = "1";
const DEFAULT_CLUSTER: &str = "devnet";

pub struct Config {
    pub host: String,
    pub port: u16,
    pub network: NetworkConfig,
    pub default_recipient: Address,
    pub default_amount: SolAmount,
    pub rpc_timeout: Option<Duration>,
    pub discovery: DiscoveryConfig,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    fn from_lookup(var: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let host = var("HOST").unwrap_or_else(|| "127.0.0.1".to_string());
        let port = match var("PORT") {
            Some(raw) => raw.parse().map_err(|_| ConfigError::InvalidVar {
                name: "PORT",
                value: raw,
            })?,
            None => 8080,
        };

        let cluster = var("SOLANA_CLUSTER").unwrap_or_else(|| DEFAULT_CLUSTER.to_string());
        let mut network = get_network_config(&cluster)?;
        // a dedicated RPC provider overrides the public endpoint
        if let Some(rpc_url) = var("SOLANA_RPC").filter(|url| !url.is_empty()) {
            network.rpc_url = rpc_url;
        }

        let raw_recipient =
            var("DEFAULT_RECIPIENT").ok_or(ConfigError::MissingVar("DEFAULT_RECIPIENT"))?;
        let default_recipient = raw_recipient.parse().map_err(|_| ConfigError::InvalidVar {
            name: "DEFAULT_RECIPIENT",
            value: raw_recipient.clone(),
        })?;

        let raw_amount =
            var("DEFAULT_SOL_AMOUNT").unwrap_or_else(|| DEFAULT_SOL_AMOUNT.to_string());
        let default_amount = ValidationService::parse_amount(&raw_amount).map_err(|_| {
            ConfigError::InvalidVar {
                name: "DEFAULT_SOL_AMOUNT",
                value: raw_amount.clone(),
            }
        })?;

        let rpc_timeout = match var("RPC_TIMEOUT_SECS") {
            Some(raw) => {
                let secs: u64 = raw.parse().map_err(|_| ConfigError::InvalidVar {
                    name: "RPC_TIMEOUT_SECS",
                    value: raw,
                })?;
                Some(Duration::from_secs(secs))
            }
            None => None,
        };

        let mut discovery = DiscoveryConfig::default();
        if let Some(icon) = var("ACTION_ICON") {
            discovery.icon = icon;
        }

        Ok(Self {
            host,
            port,
            network,
            default_recipient,
            default_amount,
            rpc_timeout,
            discovery,
        })
    }
}
