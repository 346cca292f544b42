use crate::domain::payment::PaymentEvent;
use crate::error::{BillingError, Result};
use std::io::Read;

/// Reads payment events from a CSV source with header `member,paid_on,amount`.
///
/// Rows are yielded in file order, which is the order payments are applied.
pub struct PaymentReader<R: Read> {
    reader: csv::Reader<R>,
}

impl<R: Read> PaymentReader<R> {
    pub fn new(source: R) -> Self {
        let reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .flexible(true)
            .from_reader(source);
        Self { reader }
    }

    pub fn payments(self) -> impl Iterator<Item = Result<PaymentEvent>> {
        self.reader
            .into_deserialize()
            .map(|result| result.map_err(BillingError::from))
    }
}
