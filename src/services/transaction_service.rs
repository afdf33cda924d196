use base64::{engine::general_purpose::STANDARD, Engine as _};
use log::{debug, info};

use crate::{
    errors::CustomError,
    models::{
        action::ActionPostResponse,
        network_snapshot::NetworkSnapshot,
        transaction::{TransferInstruction, UnsignedTransaction},
        transfer::TransferRequest,
    },
};

pub struct TransactionService;

impl TransactionService {
    /// Build the unsigned transfer for `req` against a fresh snapshot.
    ///
    /// The recipient may be a brand new account, so the transfer alone has
    /// to reach the rent-exempt minimum or the cluster rejects it.
    pub fn build(
        req: &TransferRequest,
        snapshot: &NetworkSnapshot,
    ) -> Result<UnsignedTransaction, CustomError> {
        let lamports = req.amount.lamports();

        if lamports < snapshot.min_rent_exempt_lamports {
            info!(
                "transfer of {} lamports to {} is below the rent-exempt minimum of {}",
                lamports, req.recipient, snapshot.min_rent_exempt_lamports
            );
            return Err(CustomError::BelowRentExemption(req.recipient));
        }

        let transfer = TransferInstruction {
            from: req.sender,
            to: req.recipient,
            lamports,
        };

        Ok(UnsignedTransaction {
            fee_payer: req.sender,
            instructions: vec![transfer],
            recent_blockhash: snapshot.blockhash,
            last_valid_block_height: snapshot.last_valid_block_height,
        })
    }

    /// Wrap a built transaction in the envelope wallets expect
    pub fn serialize(
        tx: UnsignedTransaction,
        message: String,
    ) -> Result<ActionPostResponse, CustomError> {
        let wire = tx.to_wire_bytes()?;
        debug!("transaction size: {} bytes", wire.len());

        Ok(ActionPostResponse {
            transaction: STANDARD.encode(wire),
            message,
        })
    }
}
