//! The observed fate of a monitored order.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::shared::{ExchangeName, OrderId};

/// How a monitored order left the exchange's open-order set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OutcomeKind {
    /// The order appears in the exchange's trade history.
    Filled,
    /// The order vanished without a matching historic trade.
    Cancelled,
}

impl fmt::Display for OutcomeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Filled => write!(f, "FILLED"),
            Self::Cancelled => write!(f, "CANCELLED"),
        }
    }
}

/// The result of one monitored order reaching a terminal state.
///
/// Returned from the reconciliation poll; exactly one outcome is produced
/// per order, and by the time the caller sees it the order has already been
/// removed from the monitored collection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderOutcome {
    /// The exchange the order was placed on.
    pub exchange: ExchangeName,
    /// Exchange-assigned order id.
    pub order_id: OrderId,
    /// Filled or cancelled.
    pub kind: OutcomeKind,
    /// When the outcome was observed (RFC3339).
    pub detected_at: String,
}

impl OrderOutcome {
    /// An order observed filled, stamped with the current time.
    #[must_use]
    pub fn filled(exchange: ExchangeName, order_id: OrderId) -> Self {
        Self {
            exchange,
            order_id,
            kind: OutcomeKind::Filled,
            detected_at: chrono::Utc::now().to_rfc3339(),
        }
    }

    /// An order observed cancelled, stamped with the current time.
    #[must_use]
    pub fn cancelled(exchange: ExchangeName, order_id: OrderId) -> Self {
        Self {
            exchange,
            order_id,
            kind: OutcomeKind::Cancelled,
            detected_at: chrono::Utc::now().to_rfc3339(),
        }
    }

    /// Whether the order filled.
    #[must_use]
    pub fn is_filled(&self) -> bool {
        self.kind == OutcomeKind::Filled
    }
}

impl fmt::Display for OrderOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}#{} {}", self.exchange, self.order_id, self.kind)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn outcome_kind_display() {
        assert_eq!(format!("{}", OutcomeKind::Filled), "FILLED");
        assert_eq!(format!("{}", OutcomeKind::Cancelled), "CANCELLED");
    }

    #[test]
    fn filled_constructor() {
        let outcome = OrderOutcome::filled(ExchangeName::new("Binance"), OrderId::new(42));
        assert!(outcome.is_filled());
        assert!(!outcome.detected_at.is_empty());
    }

    #[test]
    fn cancelled_constructor() {
        let outcome = OrderOutcome::cancelled(ExchangeName::new("Binance"), OrderId::new(42));
        assert!(!outcome.is_filled());
        assert_eq!(outcome.kind, OutcomeKind::Cancelled);
    }

    #[test]
    fn display() {
        let outcome = OrderOutcome::filled(ExchangeName::new("Binance"), OrderId::new(42));
        assert_eq!(format!("{outcome}"), "Binance#42 FILLED");
    }

    #[test]
    fn serde_kind_encoding() {
        let json = serde_json::to_string(&OutcomeKind::Cancelled).unwrap();
        assert_eq!(json, "\"CANCELLED\"");
    }
}
