//! Strongly-typed identifiers for domain entities.
//!
//! These prevent mixing up identifiers from different contexts.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Name of an exchange ("Binance", "Kraken").
///
/// Stored verbatim (no case normalization): the name must round-trip through
/// a bot's persisted settings document and match the model's exchange set
/// exactly.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ExchangeName(String);

impl ExchangeName {
    /// Create a new exchange name.
    #[must_use]
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// Get the inner string value.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consume and return the inner string.
    #[must_use]
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for ExchangeName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl AsRef<str> for ExchangeName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<String> for ExchangeName {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl From<&str> for ExchangeName {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

/// An exchange-assigned order identifier.
///
/// Exchanges hand these out as 64-bit integers; the newtype keeps them from
/// being confused with amounts or other counters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OrderId(i64);

impl OrderId {
    /// Create a new order id.
    #[must_use]
    pub const fn new(value: i64) -> Self {
        Self(value)
    }

    /// Get the inner integer value.
    #[must_use]
    pub const fn value(&self) -> i64 {
        self.0
    }
}

impl fmt::Display for OrderId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<i64> for OrderId {
    fn from(value: i64) -> Self {
        Self(value)
    }
}

impl From<OrderId> for i64 {
    fn from(value: OrderId) -> Self {
        value.0
    }
}
