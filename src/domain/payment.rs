use super::money::Amount;
use chrono::NaiveDate;
use serde::Deserialize;

/// A payment made by a member on a calendar date.
#[derive(Debug, Deserialize, PartialEq, Clone)]
pub struct PaymentEvent {
    pub member: u32,
    #[serde(rename = "paid_on", alias = "date", alias = "paidOn")]
    pub paid_on: NaiveDate,
    /// Only consulted when lump payments may cover several cycles.
    #[serde(rename = "amount", default)]
    pub amount_paid: Option<Amount>,
}

impl PaymentEvent {
    pub fn new(member: u32, paid_on: NaiveDate) -> Self {
        Self {
            member,
            paid_on,
            amount_paid: None,
        }
    }

    pub fn with_amount(mut self, amount: Amount) -> Self {
        self.amount_paid = Some(amount);
        self
    }
}
