//! Application layer.
//!
//! Services orchestrating the domain against the abstract exchange surface:
//! explicit-settings valuation and the periodic order-watch tick.

pub mod services;
