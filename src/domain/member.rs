use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serialize};

/// How due dates relate to payments.
#[derive(Debug, Serialize, Deserialize, PartialEq, Eq, Clone, Copy, Default)]
#[serde(rename_all = "snake_case")]
pub enum CycleAnchorMode {
    /// Due dates are fixed offsets from enrollment, whenever the payment lands.
    #[default]
    Anchored,
    /// Every payment restarts the cycle from the payment date.
    FromPayment,
}

/// The canonical billing schema for one member.
///
/// Older exports name the due-date column `nextDue`, `dueDate` or
/// `next_payment_date`. Those are folded into `last_due_date` here, once, when
/// the record is deserialized.
#[derive(Debug, Serialize, Deserialize, PartialEq, Clone)]
pub struct MemberBillingRecord {
    pub member: u32,
    #[serde(rename = "enrolled", alias = "enrollment_date", alias = "joinDate", default)]
    pub enrollment_date: Option<NaiveDate>,
    #[serde(
        rename = "last_due",
        alias = "last_due_date",
        alias = "nextDue",
        alias = "dueDate",
        alias = "next_payment_date",
        default
    )]
    pub last_due_date: Option<NaiveDate>,
    #[serde(rename = "cycle_days", alias = "cycle_length_days")]
    pub cycle_length_days: u32,
    #[serde(default, deserialize_with = "blank_as_default")]
    pub grace_days: u32,
    #[serde(
        rename = "anchor",
        alias = "cycle_anchor_mode",
        default,
        deserialize_with = "blank_as_default"
    )]
    pub cycle_anchor_mode: CycleAnchorMode,
}

/// Reads an optional column whose blank cell means "use the default".
fn blank_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

impl MemberBillingRecord {
    /// An anchored record with no grace period and no recorded due date.
    pub fn new(member: u32, enrollment_date: NaiveDate, cycle_length_days: u32) -> Self {
        Self {
            member,
            enrollment_date: Some(enrollment_date),
            last_due_date: None,
            cycle_length_days,
            grace_days: 0,
            cycle_anchor_mode: CycleAnchorMode::Anchored,
        }
    }

    pub fn with_grace_days(mut self, grace_days: u32) -> Self {
        self.grace_days = grace_days;
        self
    }

    pub fn with_last_due_date(mut self, last_due_date: NaiveDate) -> Self {
        self.last_due_date = Some(last_due_date);
        self
    }

    pub fn with_anchor_mode(mut self, mode: CycleAnchorMode) -> Self {
        self.cycle_anchor_mode = mode;
        self
    }
}
