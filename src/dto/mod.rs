//! Response shapes returned by the HTTP layer.

pub mod booking;
pub mod filter;
pub mod locations;
