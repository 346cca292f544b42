//! Billing-cycle arithmetic.
//!
//! Every function here is a pure function of its arguments. Dates are
//! `NaiveDate` calendar days and all offsets are whole days, so the host time
//! zone never enters the computation.

use super::member::{CycleAnchorMode, MemberBillingRecord};
use super::payment::PaymentEvent;
use crate::error::{BillingError, Result};
use chrono::{Days, NaiveDate};
use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;

fn add_days(date: NaiveDate, days: u64) -> Result<NaiveDate> {
    date.checked_add_days(Days::new(days))
        .ok_or(BillingError::DateOutOfRange)
}

fn cycle_length(record: &MemberBillingRecord) -> Result<u64> {
    match record.cycle_length_days {
        0 => Err(BillingError::InvalidCycleConfiguration {
            cycle_length_days: record.cycle_length_days,
        }),
        days => Ok(u64::from(days)),
    }
}

/// The due date `record` is currently scheduled for.
///
/// This is `last_due_date` when one was recorded, otherwise the last day of
/// the first cycle: `enrollment_date + (cycle_length_days - 1)`.
pub fn current_due_date(record: &MemberBillingRecord) -> Result<NaiveDate> {
    let length = cycle_length(record)?;
    if let Some(last_due) = record.last_due_date {
        return Ok(last_due);
    }
    let enrolled = record
        .enrollment_date
        .ok_or(BillingError::MissingAnchor {
            member: record.member,
        })?;
    add_days(enrolled, length - 1)
}

/// Computes the due date that follows `payment`.
///
/// In [`CycleAnchorMode::FromPayment`] the cycle restarts on the payment date.
/// In [`CycleAnchorMode::Anchored`] a payment on or before `anchor + grace_days`
/// advances the schedule by exactly one cycle. A later payment rolls the anchor
/// forward by whole cycles to the first due date strictly after the payment.
pub fn compute_next_due_date(
    record: &MemberBillingRecord,
    payment: &PaymentEvent,
) -> Result<NaiveDate> {
    let length = cycle_length(record)?;

    match record.cycle_anchor_mode {
        CycleAnchorMode::FromPayment => add_days(payment.paid_on, length),
        CycleAnchorMode::Anchored => {
            let anchor = current_due_date(record)?;
            let grace_limit = add_days(anchor, u64::from(record.grace_days))?;

            if payment.paid_on <= grace_limit {
                return add_days(anchor, length);
            }

            // paid_on > grace_limit >= anchor, so the gap is positive
            let late_by = u64::try_from((payment.paid_on - anchor).num_days())
                .map_err(|_| BillingError::DateOutOfRange)?;
            let cycles = late_by / length + 1;
            let offset = cycles
                .checked_mul(length)
                .ok_or(BillingError::DateOutOfRange)?;
            add_days(anchor, offset)
        }
    }
}

/// Due date after a payment that covers `cycles` billing cycles.
///
/// Same as applying [`compute_next_due_date`] `cycles` times, feeding each
/// result back in as the last due date. The first application settles the
/// schedule and each further cycle adds one cycle length. Zero is treated as
/// one cycle.
pub fn next_due_date_for_cycles(
    record: &MemberBillingRecord,
    payment: &PaymentEvent,
    cycles: u32,
) -> Result<NaiveDate> {
    let length = cycle_length(record)?;
    let settled = compute_next_due_date(record, payment)?;
    let extra = u64::from(cycles.max(1) - 1) * length;
    add_days(settled, extra)
}

/// Number of cycles a lump payment pays for: `max(1, floor(amount / price))`.
///
/// A missing, zero or negative price counts as one cycle, as does a
/// non-positive amount.
pub fn cycles_covered_by_payment(amount_paid: Decimal, cycle_price: Option<Decimal>) -> u32 {
    let price = match cycle_price {
        Some(price) if price > Decimal::ZERO => price,
        _ => return 1,
    };
    if amount_paid <= Decimal::ZERO {
        return 1;
    }

    amount_paid
        .checked_div(price)
        .and_then(|cycles| cycles.floor().to_u32())
        .unwrap_or(u32::MAX)
        .max(1)
}

/// Signed distance from `today` to `due`; negative once the date has passed.
pub fn days_until_due(due: NaiveDate, today: NaiveDate) -> i64 {
    (due - today).num_days()
}

/// Number of scheduled due dates strictly before `today` that have not been
/// paid, counting from the record's current due date.
pub fn cycles_overdue(record: &MemberBillingRecord, today: NaiveDate) -> Result<u32> {
    let length = cycle_length(record)?;
    let due = current_due_date(record)?;
    if due >= today {
        return Ok(0);
    }

    let overdue_by = u64::try_from((today - due).num_days())
        .map_err(|_| BillingError::DateOutOfRange)?;
    let missed = (overdue_by - 1) / length + 1;
    Ok(u32::try_from(missed).unwrap_or(u32::MAX))
}
