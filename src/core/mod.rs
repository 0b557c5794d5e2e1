//! Core rate abstractions

pub mod config;
pub mod currency;
pub mod error;
pub mod log;
pub mod rate;

// Re-export main types for cleaner imports
pub use currency::{CurrencyCode, RateSource};
pub use error::RateError;
pub use rate::{Precision, RATE_PRECISION, Rate};
