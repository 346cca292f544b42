//! Application layer orchestrating the billing rules over stored members.
//!
//! This module defines the `BillingService`, the entry point used by the CLI
//! to register members, apply payments in order and build statements as of a
//! caller-supplied day.

pub mod engine;
