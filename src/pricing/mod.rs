//! Pricing engine for hourly space rentals.
//!
//! Turns a booking form snapshot into a guest payment and a platform-fee /
//! host-revenue split. Everything except `routes` is pure and synchronous.

pub mod calculators;
pub mod export;
pub mod format;
pub mod models;
pub mod options;
pub mod requests;
pub mod responses;
pub mod routes;
pub mod season;

// Re-export commonly used items
pub use calculators::{compute, CalculationResult, PLATFORM_FEE_RATE, VAT_RATE};
pub use format::{format_amount, format_currency, parse_amount};
pub use models::BookingInput;
pub use options::{OptionLedger, OptionUpdate};
pub use routes::router;
pub use season::SeasonType;
