//! Domain layer: the member billing schema and the due-date rules.

pub mod cycle;
pub mod member;
pub mod money;
pub mod payment;
pub mod ports;
pub mod status;
