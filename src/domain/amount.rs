use crate::error::{NiagaError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A transaction amount in whole Rupiah.
///
/// QRIS dynamic codes encode the amount as decimal digits behind a 2-digit
/// length prefix. The accepted range keeps that prefix well-formed and
/// matches what acquirers accept for a single QRIS transaction: 1 up to
/// 99,999,999 inclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u64", into = "u64")]
pub struct Amount(u64);

impl Amount {
    pub const MIN: u64 = 1;
    pub const MAX: u64 = 99_999_999;

    pub fn new(value: u64) -> Result<Self> {
        if value < Self::MIN {
            return Err(NiagaError::Amount("amount must be positive".to_string()));
        }
        if value > Self::MAX {
            return Err(NiagaError::Amount(format!(
                "amount {value} exceeds maximum {}",
                Self::MAX
            )));
        }
        Ok(Self(value))
    }

    pub fn value(&self) -> u64 {
        self.0
    }
}

impl TryFrom<u64> for Amount {
    type Error = NiagaError;

    fn try_from(value: u64) -> Result<Self> {
        Self::new(value)
    }
}

impl From<Amount> for u64 {
    fn from(amount: Amount) -> Self {
        amount.0
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}
