use log::error;
use solana_sdk::{
    hash::Hash, instruction::Instruction, message::Message, pubkey::Pubkey, system_instruction,
    transaction::Transaction,
};

use crate::{
    errors::CustomError,
    models::address::{Address, Blockhash},
};

/// Native SOL transfer from one account to another
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TransferInstruction {
    pub from: Address,
    pub to: Address,
    pub lamports: u64,
}

impl From<&TransferInstruction> for Instruction {
    fn from(transfer: &TransferInstruction) -> Self {
        system_instruction::transfer(
            &Pubkey::from(transfer.from),
            &Pubkey::from(transfer.to),
            transfer.lamports,
        )
    }
}

/// A transfer awaiting the sender's signature.
///
/// `last_valid_block_height` bounds how long the blockhash stays usable; it is
/// not part of the wire encoding.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnsignedTransaction {
    pub fee_payer: Address,
    pub instructions: Vec<TransferInstruction>,
    pub recent_blockhash: Blockhash,
    pub last_valid_block_height: u64,
}

impl UnsignedTransaction {
    /// Legacy transaction with a zeroed signature slot for every required signer
    pub fn to_transaction(&self) -> Transaction {
        let instructions: Vec<Instruction> =
            self.instructions.iter().map(Instruction::from).collect();
        let message = Message::new_with_blockhash(
            &instructions,
            Some(&Pubkey::from(self.fee_payer)),
            &Hash::from(self.recent_blockhash),
        );
        Transaction::new_unsigned(message)
    }

    /// The bytes each required signer signs
    pub fn message_bytes(&self) -> Vec<u8> {
        self.to_transaction().message_data()
    }

    pub fn to_wire_bytes(&self) -> Result<Vec<u8>, CustomError> {
        bincode::serialize(&self.to_transaction()).map_err(|e| {
            error!("failed to encode transaction: {}", e);
            CustomError::UnknownError
        })
    }
}

#[cfg(test)]
mod tests {
    use solana_sdk::{message::MessageHeader, signature::Signature, system_program};

    use super::*;

    fn transfer_tx(from: Address, to: Address, lamports: u64) -> UnsignedTransaction {
        UnsignedTransaction {
            fee_payer: from,
            instructions: vec![TransferInstruction { from, to, lamports }],
            recent_blockhash: Blockhash::from([0xabu8; 32]),
            last_valid_block_height: 1_000,
        }
    }

    #[test]
    fn transfer_message_layout() {
        let from = Address::from([1u8; 32]);
        let to = Address::from([2u8; 32]);
        let message = transfer_tx(from, to, 5_000).to_transaction().message;

        assert_eq!(
            message.header,
            MessageHeader {
                num_required_signatures: 1,
                num_readonly_signed_accounts: 0,
                num_readonly_unsigned_accounts: 1,
            }
        );
        assert_eq!(
            message.account_keys,
            vec![Pubkey::from(from), Pubkey::from(to), system_program::id()]
        );
        assert_eq!(message.recent_blockhash, Hash::new_from_array([0xab; 32]));
        assert_eq!(message.instructions.len(), 1);

        let ix = &message.instructions[0];
        assert_eq!(ix.program_id_index, 2);
        assert_eq!(ix.accounts, vec![0, 1]);
        assert_eq!(&ix.data[..4], &[2, 0, 0, 0]);
        assert_eq!(&ix.data[4..], &5_000u64.to_le_bytes());
    }

    #[test]
    fn wire_bytes_have_one_empty_signature_slot() {
        let from = Address::from([1u8; 32]);
        let to = Address::from([2u8; 32]);
        let tx = transfer_tx(from, to, 7);
        let wire = tx.to_wire_bytes().unwrap();

        // 1 + 64 signature, 3 header, 1 + 96 keys, 32 blockhash, 1 + 17 instruction
        assert_eq!(wire.len(), 215);
        assert_eq!(wire[0], 1);
        assert!(wire[1..65].iter().all(|b| *b == 0));
        assert_eq!(&wire[65..], tx.message_bytes().as_slice());
        assert_eq!(&wire[69..101], from.as_bytes());
        assert_eq!(&wire[165..197], &[0xab; 32]);
    }

    #[test]
    fn wire_bytes_decode_as_an_unsigned_transaction() {
        let tx = transfer_tx(Address::from([1u8; 32]), Address::from([2u8; 32]), 7);
        let decoded: Transaction = bincode::deserialize(&tx.to_wire_bytes().unwrap()).unwrap();

        assert_eq!(decoded, tx.to_transaction());
        assert_eq!(decoded.signatures, vec![Signature::default()]);
    }

    #[test]
    fn self_transfer_merges_duplicate_keys() {
        let from = Address::from([1u8; 32]);
        let message = transfer_tx(from, from, 7).to_transaction().message;

        assert_eq!(message.account_keys, vec![Pubkey::from(from), system_program::id()]);
        assert_eq!(message.header.num_required_signatures, 1);
        assert_eq!(message.instructions[0].accounts, vec![0, 0]);
        assert_eq!(message.instructions[0].program_id_index, 1);
    }
}
