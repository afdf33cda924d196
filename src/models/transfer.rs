use std::fmt;
use std::iter;
use std::str::FromStr;

use crate::{errors::CustomError, models::address::Address};

pub const LAMPORTS_PER_SOL: u64 = 1_000_000_000;

/// Decimal places of SOL that map onto whole lamports
const LAMPORT_DECIMALS: usize = 9;

/// A positive amount of SOL, held exactly as lamports
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SolAmount(u64);

impl SolAmount {
    pub fn from_lamports(lamports: u64) -> Result<Self, CustomError> {
        if lamports == 0 {
            return Err(CustomError::InvalidAmount("amount is too small".to_string()));
        }
        Ok(Self(lamports))
    }

    pub fn lamports(&self) -> u64 {
        self.0
    }
}

impl FromStr for SolAmount {
    type Err = CustomError;

    /// Parses decimal SOL text such as `2`, `0.5` or `.25`. Digits past the
    /// ninth decimal place are dropped, so the lamport value is truncated
    /// toward zero.
    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let text = raw.trim();
        let text = text.strip_prefix('+').unwrap_or(text);
        let (whole, fraction) = text.split_once('.').unwrap_or((text, ""));

        let all_digits = |s: &str| s.bytes().all(|b| b.is_ascii_digit());
        let empty = whole.is_empty() && fraction.is_empty();
        if empty || !all_digits(whole) || !all_digits(fraction) {
            return Err(CustomError::InvalidAmount(format!(
                "{:?} is not a decimal number",
                raw
            )));
        }

        let unrepresentable = || {
            CustomError::InvalidAmount(format!("{} SOL does not fit in a lamport balance", text))
        };
        let whole: u64 = match whole {
            "" => 0,
            digits => digits.parse().map_err(|_| unrepresentable())?,
        };
        let fraction = fraction
            .bytes()
            .chain(iter::repeat(b'0'))
            .take(LAMPORT_DECIMALS)
            .fold(0u64, |acc, digit| acc * 10 + u64::from(digit - b'0'));

        let lamports = whole
            .checked_mul(LAMPORTS_PER_SOL)
            .and_then(|lamports| lamports.checked_add(fraction))
            .ok_or_else(unrepresentable)?;
        Self::from_lamports(lamports)
    }
}

impl fmt::Display for SolAmount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let whole = self.0 / LAMPORTS_PER_SOL;
        let fraction = self.0 % LAMPORTS_PER_SOL;
        if fraction == 0 {
            return write!(f, "{}", whole);
        }
        let digits = format!("{:0width$}", fraction, width = LAMPORT_DECIMALS);
        write!(f, "{}.{}", whole, digits.trim_end_matches('0'))
    }
}

/// Recipient and amount taken from the action query string
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct QueryParams {
    pub recipient: Address,
    pub amount: SolAmount,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TransferRequest {
    pub sender: Address,
    pub recipient: Address,
    pub amount: SolAmount,
}

impl TransferRequest {
    pub fn new(sender: Address, params: QueryParams) -> Self {
        Self {
            sender,
            recipient: params.recipient,
            amount: params.amount,
        }
    }

    /// Text shown by the wallet next to the signing prompt
    pub fn describe(&self) -> String {
        format!("Send {} SOL to {}", self.amount, self.recipient)
    }
}
