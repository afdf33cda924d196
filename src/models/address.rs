use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use solana_sdk::{hash::Hash, pubkey::Pubkey};
use thiserror::Error;

/// Length in bytes of an account public key and of a blockhash
pub const KEY_LENGTH: usize = 32;

/// Base-58 text of a 32-byte key is never longer than 44 characters
const MAX_BASE58_LEN: usize = 44;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseKeyError {
    #[error("encoded key is {0} characters long")]
    TooLong(usize),
    #[error("invalid base58: {0}")]
    InvalidBase58(String),
    #[error("decoded key is {0} bytes, expected {}", KEY_LENGTH)]
    WrongSize(usize),
}

fn decode_key(s: &str) -> Result<[u8; KEY_LENGTH], ParseKeyError> {
    if s.len() > MAX_BASE58_LEN {
        return Err(ParseKeyError::TooLong(s.len()));
    }
    let bytes = bs58::decode(s)
        .into_vec()
        .map_err(|e| ParseKeyError::InvalidBase58(e.to_string()))?;
    let len = bytes.len();
    bytes
        .try_into()
        .map_err(|_| ParseKeyError::WrongSize(len))
}

/// An account public key on the ledger.
///
/// Only structurally valid keys can be constructed, so code holding an
/// `Address` never re-checks it.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Address([u8; KEY_LENGTH]);

impl Address {
    pub const fn new(bytes: [u8; KEY_LENGTH]) -> Self {
        Self(bytes)
    }

    pub fn as_bytes(&self) -> &[u8; KEY_LENGTH] {
        &self.0
    }
}

impl From<[u8; KEY_LENGTH]> for Address {
    fn from(bytes: [u8; KEY_LENGTH]) -> Self {
        Self(bytes)
    }
}

impl From<Address> for Pubkey {
    fn from(address: Address) -> Self {
        Pubkey::new_from_array(address.0)
    }
}

impl From<Pubkey> for Address {
    fn from(pubkey: Pubkey) -> Self {
        Self(pubkey.to_bytes())
    }
}

impl FromStr for Address {
    type Err = ParseKeyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        decode_key(s).map(Self)
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&bs58::encode(self.0).into_string())
    }
}

impl fmt::Debug for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Address({})", self)
    }
}

impl Serialize for Address {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Address {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

/// Recent blockhash returned by the cluster, copied into the message verbatim
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Blockhash([u8; KEY_LENGTH]);

impl Blockhash {
    pub fn as_bytes(&self) -> &[u8; KEY_LENGTH] {
        &self.0
    }
}

impl From<[u8; KEY_LENGTH]> for Blockhash {
    fn from(bytes: [u8; KEY_LENGTH]) -> Self {
        Self(bytes)
    }
}

impl From<Blockhash> for Hash {
    fn from(blockhash: Blockhash) -> Self {
        Hash::new_from_array(blockhash.0)
    }
}

impl From<Hash> for Blockhash {
    fn from(hash: Hash) -> Self {
        Self(hash.to_bytes())
    }
}

impl FromStr for Blockhash {
    type Err = ParseKeyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        decode_key(s).map(Self)
    }
}

impl fmt::Display for Blockhash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&bs58::encode(self.0).into_string())
    }
}

impl fmt::Debug for Blockhash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Blockhash({})", self)
    }
}
