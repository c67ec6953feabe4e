//! Diesel row structs and their conversions into domain entities.

pub mod availability;
pub mod booking;
pub mod config;
pub mod space;
