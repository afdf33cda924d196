use chrono::{DateTime, Utc};

use crate::models::address::Blockhash;

/// Cluster state read for a single transaction build; never cached
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NetworkSnapshot {
    pub blockhash: Blockhash,
    pub last_valid_block_height: u64,
    pub min_rent_exempt_lamports: u64,
    pub fetched_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LatestBlockhash {
    pub blockhash: Blockhash,
    pub last_valid_block_height: u64,
}
