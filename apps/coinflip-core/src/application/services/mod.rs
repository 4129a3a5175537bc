//! Application services.

mod order_watch_service;
mod valuation_service;

pub use order_watch_service::{OrderWatchConfig, OrderWatchHandle, OrderWatchService};
pub use valuation_service::{ValuationService, ValuationSettings};
