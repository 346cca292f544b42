use crate::domain::member::MemberBillingRecord;
use crate::error::{BillingError, Result};
use std::io::Read;

/// Reads member billing records from a CSV source.
///
/// Expected header: `member,enrolled,last_due,cycle_days,grace_days,anchor`.
/// Only `member` and `cycle_days` are required; legacy due-date column names
/// are accepted and normalized by `MemberBillingRecord` itself.
pub struct MemberReader<R: Read> {
    reader: csv::Reader<R>,
}

impl<R: Read> MemberReader<R> {
    /// Creates a new `MemberReader` from any `Read` source (e.g., File, Stdin).
    pub fn new(source: R) -> Self {
        let reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .flexible(true)
            .from_reader(source);
        Self { reader }
    }

    /// Returns an iterator that lazily reads and deserializes members.
    pub fn members(self) -> impl Iterator<Item = Result<MemberBillingRecord>> {
        self.reader
            .into_deserialize()
            .map(|result| result.map_err(BillingError::from))
    }
}
