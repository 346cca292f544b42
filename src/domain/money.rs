use crate::error::BillingError;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A currency-agnostic monetary value.
///
/// Wraps `rust_decimal::Decimal` so prices and outstanding balances never go
/// through floating point.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Money(pub Decimal);

/// A strictly positive amount, such as a cycle price.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(try_from = "Decimal", into = "Decimal")]
pub struct Amount(Decimal);

impl Amount {
    pub fn new(value: Decimal) -> Result<Self, BillingError> {
        if value > Decimal::ZERO {
            Ok(Self(value))
        } else {
            Err(BillingError::ValidationError(
                "Amount must be positive".to_string(),
            ))
        }
    }

    pub fn value(&self) -> Decimal {
        self.0
    }
}

impl TryFrom<Decimal> for Amount {
    type Error = BillingError;

    fn try_from(value: Decimal) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Amount> for Decimal {
    fn from(amount: Amount) -> Self {
        amount.0
    }
}

impl Money {
    pub const ZERO: Self = Self(Decimal::ZERO);

    pub fn new(amount: Decimal) -> Self {
        Self(amount)
    }

    /// `self * times`, or `None` when the product leaves `Decimal`'s range.
    pub fn checked_mul(self, times: u32) -> Option<Self> {
        self.0.checked_mul(Decimal::from(times)).map(Self)
    }
}
