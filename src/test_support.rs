//! Fakes for the external collaborators, shared by unit tests.

use async_trait::async_trait;

use crate::{
    errors::CustomError,
    models::{
        address::{Address, Blockhash},
        network_snapshot::LatestBlockhash,
    },
    services::{blockchain_service::NetworkState, wallet_service::RecipientResolver},
};

pub fn address(byte: u8) -> Address {
    Address::from([byte; 32])
}

/// Cluster that answers every read with the same values
pub struct FixedNetwork {
    pub blockhash: Blockhash,
    pub last_valid_block_height: u64,
    pub min_rent_exempt_lamports: u64,
    pub reachable: bool,
}

impl FixedNetwork {
    pub fn new(min_rent_exempt_lamports: u64) -> Self {
        Self {
            blockhash: Blockhash::from([0xcdu8; 32]),
            last_valid_block_height: 312_400_118,
            min_rent_exempt_lamports,
            reachable: true,
        }
    }

    pub fn unreachable() -> Self {
        Self {
            reachable: false,
            ..Self::new(0)
        }
    }

    fn check(&self) -> Result<(), CustomError> {
        if self.reachable {
            Ok(())
        } else {
            Err(CustomError::NetworkUnavailable("connection refused".to_string()))
        }
    }
}

#[async_trait]
impl NetworkState for FixedNetwork {
    async fn latest_blockhash(&self) -> Result<LatestBlockhash, CustomError> {
        self.check()?;
        Ok(LatestBlockhash {
            blockhash: self.blockhash,
            last_valid_block_height: self.last_valid_block_height,
        })
    }

    async fn minimum_balance_for_rent_exemption(
        &self,
        _data_len: usize,
    ) -> Result<u64, CustomError> {
        self.check()?;
        Ok(self.min_rent_exempt_lamports)
    }
}

/// Resolver standing in for a failed session or database lookup
pub struct NoRecipient;

#[async_trait]
impl RecipientResolver for NoRecipient {
    async fn default_recipient(&self) -> Result<Address, CustomError> {
        Err(CustomError::UnknownError)
    }
}
