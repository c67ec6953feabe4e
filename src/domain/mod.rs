//! Business entities and pure decision logic.

pub mod availability;
pub mod booking;
pub mod pricing;
pub mod space;
pub mod types;
