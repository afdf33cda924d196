use async_trait::async_trait;

use crate::{errors::CustomError, models::address::Address};

/// Supplies the recipient used when a request names none
#[async_trait]
pub trait RecipientResolver: Send + Sync {
    async fn default_recipient(&self) -> Result<Address, CustomError>;
}

/// Always resolves to one configured wallet
#[derive(Debug, Clone, Copy)]
pub struct StaticRecipient(pub Address);

#[async_trait]
impl RecipientResolver for StaticRecipient {
    async fn default_recipient(&self) -> Result<Address, CustomError> {
        Ok(self.0)
    }
}
