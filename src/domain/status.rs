use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Where a due date stands relative to a given day.
#[derive(Debug, Serialize, Deserialize, PartialEq, Eq, Clone, Copy, Hash)]
#[serde(rename_all = "snake_case")]
pub enum PaymentStatus {
    Overdue,
    DueToday,
    DueSoon,
    Active,
}

/// Classifies `due` as seen on `today`.
///
/// `DueSoon` covers `1..=due_soon_window_days` days ahead; zero days ahead is
/// `DueToday`. `today` is always supplied by the caller, never read from the
/// clock.
pub fn classify_status(
    due: NaiveDate,
    today: NaiveDate,
    due_soon_window_days: u32,
) -> PaymentStatus {
    let days_ahead = (due - today).num_days();
    if days_ahead < 0 {
        PaymentStatus::Overdue
    } else if days_ahead == 0 {
        PaymentStatus::DueToday
    } else if days_ahead <= i64::from(due_soon_window_days) {
        PaymentStatus::DueSoon
    } else {
        PaymentStatus::Active
    }
}
