use crate::domain::money::Money;
use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::path::Path;

pub const DEFAULT_DUE_SOON_WINDOW_DAYS: u32 = 3;

/// Billing settings shared by every member.
///
/// Always passed in explicitly; nothing in the crate reads settings from
/// global state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct BillingPolicy {
    /// Days before a due date during which a member is flagged due soon.
    pub due_soon_window_days: u32,
    /// Price of one cycle. Drives lump-payment coverage and outstanding amounts.
    pub cycle_price: Option<Money>,
    /// Whether a payment worth several cycles moves the due date that many
    /// cycles ahead.
    pub multi_cycle_payments: bool,
}

impl Default for BillingPolicy {
    fn default() -> Self {
        Self {
            due_soon_window_days: DEFAULT_DUE_SOON_WINDOW_DAYS,
            cycle_price: None,
            multi_cycle_payments: false,
        }
    }
}

impl BillingPolicy {
    pub fn from_toml_str(source: &str) -> Result<Self> {
        Ok(toml::from_str(source)?)
    }

    /// Reads a policy from a TOML file. Missing keys keep their defaults.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let source = std::fs::read_to_string(path)?;
        Self::from_toml_str(&source)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::BillingError;
    use rust_decimal_macros::dec;
    use std::io::Write;

    #[test]
    fn test_empty_policy_uses_defaults() {
        let policy = BillingPolicy::from_toml_str("").unwrap();
        assert_eq!(policy, BillingPolicy::default());
        assert_eq!(policy.due_soon_window_days, 3);
    }

    #[test]
    fn test_full_policy() {
        let policy = BillingPolicy::from_toml_str(
            "due_soon_window_days = 7\ncycle_price = \"49.50\"\nmulti_cycle_payments = true\n",
        )
        .unwrap();

        assert_eq!(policy.due_soon_window_days, 7);
        assert_eq!(policy.cycle_price, Some(Money::new(dec!(49.50))));
        assert!(policy.multi_cycle_payments);
    }

    #[test]
    fn test_unknown_key_is_rejected() {
        let result = BillingPolicy::from_toml_str("reminder_pin = 1234\n");
        assert!(matches!(result, Err(BillingError::ConfigError(_))));
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "due_soon_window_days = 1").unwrap();

        let policy = BillingPolicy::load(file.path()).unwrap();
        assert_eq!(policy.due_soon_window_days, 1);
        assert_eq!(policy.cycle_price, None);
    }

    #[test]
    fn test_load_missing_file() {
        let result = BillingPolicy::load("does/not/exist.toml");
        assert!(matches!(result, Err(BillingError::IoError(_))));
    }
}
