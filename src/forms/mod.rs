//! Request forms and their conversions into validated payloads.

pub mod booking;
pub mod filter;
