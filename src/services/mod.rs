pub use self::errors::{ServiceError, ServiceResult};

pub mod availability;
pub mod booking;
pub mod errors;
pub mod filter;
pub mod locations;
