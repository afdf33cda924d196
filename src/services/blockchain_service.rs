use std::time::Duration;

use async_trait::async_trait;
use chrono::Utc;
use log::debug;
use solana_client::nonblocking::rpc_client::RpcClient;

use crate::{
    errors::CustomError,
    models::network_snapshot::{LatestBlockhash, NetworkSnapshot},
};

/// Accounts that only hold native SOL carry no data
pub const SYSTEM_ACCOUNT_DATA_LEN: usize = 0;

/// Read-only view of the cluster the transaction builder depends on
#[async_trait]
pub trait NetworkState: Send + Sync {
    async fn latest_blockhash(&self) -> Result<LatestBlockhash, CustomError>;

    async fn minimum_balance_for_rent_exemption(
        &self,
        data_len: usize,
    ) -> Result<u64, CustomError>;
}

/// Read both values the builder needs, issuing the two requests concurrently
pub async fn fetch_snapshot(network: &dyn NetworkState) -> Result<NetworkSnapshot, CustomError> {
    let (latest, min_rent_exempt_lamports) = futures::try_join!(
        network.latest_blockhash(),
        network.minimum_balance_for_rent_exemption(SYSTEM_ACCOUNT_DATA_LEN)
    )?;

    Ok(NetworkSnapshot {
        blockhash: latest.blockhash,
        last_valid_block_height: latest.last_valid_block_height,
        min_rent_exempt_lamports,
        fetched_at: Utc::now(),
    })
}

/// Solana cluster reached over JSON-RPC
pub struct SolanaRpcClient {
    client: RpcClient,
}

impl SolanaRpcClient {
    /// Without a timeout the client keeps the library default
    pub fn new(rpc_url: &str, timeout: Option<Duration>) -> Self {
        let client = match timeout {
            Some(timeout) => RpcClient::new_with_timeout(rpc_url.to_string(), timeout),
            None => RpcClient::new(rpc_url.to_string()),
        };
        Self { client }
    }

    pub fn rpc_url(&self) -> String {
        self.client.url()
    }
}

#[async_trait]
impl NetworkState for SolanaRpcClient {
    async fn latest_blockhash(&self) -> Result<LatestBlockhash, CustomError> {
        debug!("getLatestBlockhash -> {}", self.client.url());
        let (blockhash, last_valid_block_height) = self
            .client
            .get_latest_blockhash_with_commitment(self.client.commitment())
            .await
            .map_err(|e| {
                CustomError::NetworkUnavailable(format!("getLatestBlockhash failed: {}", e))
            })?;

        Ok(LatestBlockhash {
            blockhash: blockhash.into(),
            last_valid_block_height,
        })
    }

    async fn minimum_balance_for_rent_exemption(
        &self,
        data_len: usize,
    ) -> Result<u64, CustomError> {
        debug!("getMinimumBalanceForRentExemption -> {}", self.client.url());
        self.client
            .get_minimum_balance_for_rent_exemption(data_len)
            .await
            .map_err(|e| {
                CustomError::NetworkUnavailable(format!(
                    "getMinimumBalanceForRentExemption failed: {}",
                    e
                ))
            })
    }
}
