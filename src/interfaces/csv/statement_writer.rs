use crate::application::engine::MemberStatement;
use crate::error::Result;
use std::io::Write;

const HEADER: [&str; 6] = [
    "member",
    "due_date",
    "status",
    "days_until_due",
    "cycles_outstanding",
    "amount_outstanding",
];

/// Writes member statements as CSV, header first even when there are no rows.
pub struct StatementWriter<W: Write> {
    writer: csv::Writer<W>,
}

impl<W: Write> StatementWriter<W> {
    pub fn new(sink: W) -> Self {
        let writer = csv::WriterBuilder::new()
            .has_headers(false)
            .from_writer(sink);
        Self { writer }
    }

    pub fn write_statements<I>(&mut self, statements: I) -> Result<()>
    where
        I: IntoIterator<Item = MemberStatement>,
    {
        self.writer.write_record(HEADER)?;
        for statement in statements {
            self.writer.serialize(statement)?;
        }
        self.writer.flush()?;
        Ok(())
    }
}
