use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct NetworkConfig {
    pub cluster: String,
    pub rpc_url: String,
    /// CAIP-2 id advertised to wallets in `X-Blockchain-Ids`
    pub blockchain_id: String,
}
