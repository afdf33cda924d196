use crate::{errors::ConfigError, models::network_config::NetworkConfig};

/// Get network configuration based on cluster name
pub fn get_network_config(cluster: &str) -> Result<NetworkConfig, ConfigError> {
    match cluster {
        "mainnet-beta" | "mainnet" => Ok(NetworkConfig {
            cluster: "mainnet-beta".to_string(),
            rpc_url: "https://api.mainnet-beta.solana.com".to_string(),
            blockchain_id: "solana:5eykt4UsFv8P8NJdTREpY1vzqKqZKvdp".to_string(),
        }),
        "devnet" => Ok(NetworkConfig {
            cluster: "devnet".to_string(),
            rpc_url: "https://api.devnet.solana.com".to_string(),
            blockchain_id: "solana:EtWTRABZaYq6iMfeYKouRu166VU2xqa1".to_string(),
        }),
        "testnet" => Ok(NetworkConfig {
            cluster: "testnet".to_string(),
            rpc_url: "https://api.testnet.solana.com".to_string(),
            blockchain_id: "solana:4uhcVJyU9pJkvQyS88uRDiswHXSCkY3z".to_string(),
        }),
        // a local test validator has a fresh genesis every run
        "localnet" | "localhost" => Ok(NetworkConfig {
            cluster: "localnet".to_string(),
            rpc_url: "http://127.0.0.1:8899".to_string(),
            blockchain_id: "solana:localnet".to_string(),
        }),
        _ => Err(ConfigError::UnsupportedCluster(cluster.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn devnet_is_the_public_test_cluster() {
        let config = get_network_config("devnet").unwrap();
        assert_eq!(config.rpc_url, "https://api.devnet.solana.com");
        assert!(config.blockchain_id.starts_with("solana:"));
    }

    #[test]
    fn mainnet_alias_resolves_to_mainnet_beta() {
        let config = get_network_config("mainnet").unwrap();
        assert_eq!(config.cluster, "mainnet-beta");
    }

    #[test]
    fn unknown_cluster_is_rejected() {
        assert!(matches!(
            get_network_config("goerli"),
            Err(ConfigError::UnsupportedCluster(name)) if name == "goerli"
        ));
    }
}
