#![allow(dead_code)]

use std::fs::File;
use std::io::Error;
use std::path::Path;

pub const MEMBER_HEADER: [&str; 6] = [
    "member",
    "enrolled",
    "last_due",
    "cycle_days",
    "grace_days",
    "anchor",
];

/// Writes `rows` anchored members, enrolled on consecutive days from 2025-01-01.
pub fn generate_members_csv(path: &Path, rows: u32) -> Result<(), Error> {
    let file = File::create(path)?;
    let mut wtr = csv::WriterBuilder::new().from_writer(file);
    wtr.write_record(MEMBER_HEADER)?;

    let start = chrono::NaiveDate::from_ymd_opt(2025, 1, 1).unwrap();
    for i in 1..=rows {
        let enrolled = start + chrono::Days::new(u64::from(i % 365));
        wtr.write_record([
            i.to_string(),
            enrolled.to_string(),
            String::new(),
            "30".to_string(),
            (i % 7).to_string(),
            "anchored".to_string(),
        ])?;
    }

    wtr.flush()?;
    Ok(())
}

/// Writes one payment per member, all on `paid_on`.
pub fn generate_payments_csv(path: &Path, rows: u32, paid_on: &str) -> Result<(), Error> {
    let file = File::create(path)?;
    let mut wtr = csv::WriterBuilder::new().from_writer(file);
    wtr.write_record(["member", "paid_on", "amount"])?;

    for i in 1..=rows {
        wtr.write_record([i.to_string().as_str(), paid_on, "50"])?;
    }

    wtr.flush()?;
    Ok(())
}
