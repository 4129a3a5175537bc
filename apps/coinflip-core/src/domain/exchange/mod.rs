//! Abstract exchange surface.
//!
//! Read-only views the core consumes, plus the collaborator data shapes
//! that cross them. The concrete exchange-API layer (REST/WebSocket
//! clients) implements these against whatever binding exists; tests and
//! backtest mode use the in-memory adapters in the infrastructure layer.
//!
//! The views are synchronous: by the time the main-loop tick reads them,
//! the exchange layer has already marshalled live state into memory, so
//! nothing here blocks.

use serde::{Deserialize, Serialize};

use crate::domain::market::{PairIndex, PairKey};
use crate::domain::shared::{Amount, ExchangeName, OrderId};
use crate::domain::trading::TradeDirection;

/// An order currently open on an exchange.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OpenOrder {
    /// Exchange-assigned order id.
    pub order_id: OrderId,
    /// The pair the order trades.
    pub pair: PairKey,
    /// The trade direction.
    pub direction: TradeDirection,
    /// The amount offered on the in side of the trade.
    pub amount_in: Amount,
    /// When the order was placed (RFC3339).
    pub created_at: String,
}

impl OpenOrder {
    /// Create an open order stamped with the current time.
    #[must_use]
    pub fn new(
        order_id: OrderId,
        pair: PairKey,
        direction: TradeDirection,
        amount_in: Amount,
    ) -> Self {
        Self {
            order_id,
            pair,
            direction,
            amount_in,
            created_at: chrono::Utc::now().to_rfc3339(),
        }
    }
}

/// A completed trade in an exchange's history, keyed by the originating
/// order id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoricTrade {
    /// Id of the order that produced this trade.
    pub order_id: OrderId,
    /// The pair that was traded.
    pub pair: PairKey,
    /// The trade direction.
    pub direction: TradeDirection,
    /// The amount consumed on the in side.
    pub amount_in: Amount,
    /// When the trade completed (RFC3339).
    pub completed_at: String,
}

impl HistoricTrade {
    /// Record the completion of an open order, stamped with the current
    /// time.
    #[must_use]
    pub fn from_order(order: &OpenOrder) -> Self {
        Self {
            order_id: order.order_id,
            pair: order.pair.clone(),
            direction: order.direction,
            amount_in: order.amount_in.clone(),
            completed_at: chrono::Utc::now().to_rfc3339(),
        }
    }
}

/// The result of submitting a trade to an exchange.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderResult {
    /// The exchange the order was placed on.
    pub exchange: ExchangeName,
    /// Exchange-assigned order id.
    pub order_id: OrderId,
    /// Whether the order filled synchronously at submission time.
    pub filled_immediately: bool,
}

impl OrderResult {
    /// A submission that filled synchronously.
    #[must_use]
    pub const fn filled(exchange: ExchangeName, order_id: OrderId) -> Self {
        Self {
            exchange,
            order_id,
            filled_immediately: true,
        }
    }

    /// A submission that remains open on the exchange.
    #[must_use]
    pub const fn pending(exchange: ExchangeName, order_id: OrderId) -> Self {
        Self {
            exchange,
            order_id,
            filled_immediately: false,
        }
    }
}

/// Read-only view of one exchange's marshalled state.
pub trait ExchangeView {
    /// The exchange's name (the key bots persist).
    fn name(&self) -> &ExchangeName;

    /// The pairs the exchange currently lists.
    fn pairs(&self) -> &PairIndex;

    /// A currently-open order by id, if still open.
    fn open_order(&self, order_id: OrderId) -> Option<&OpenOrder>;

    /// A completed trade by originating order id, if it ever filled.
    fn historic_trade(&self, order_id: OrderId) -> Option<&HistoricTrade>;

    /// Whether the exchange's background data feed has completed startup.
    ///
    /// While false, absence from the open-order set is meaningless and must
    /// not be read as a fill or cancellation.
    fn update_thread_active(&self) -> bool;
}

/// Read-only view of the model's exchange set.
pub trait MarketView {
    /// The concrete exchange view type.
    type Exchange: ExchangeView;

    /// Resolve an exchange by its persisted name.
    fn exchange(&self, name: &ExchangeName) -> Option<&Self::Exchange>;

    /// Whether the model is running a backtest (startup gating is skipped).
    fn is_backtesting(&self) -> bool;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::shared::CoinSym;
    use rust_decimal::Decimal;

    fn order() -> OpenOrder {
        OpenOrder::new(
            OrderId::new(42),
            PairKey::new(CoinSym::new("BTC"), CoinSym::new("USDT")),
            TradeDirection::BaseToQuote,
            Amount::new(Decimal::ONE, CoinSym::new("BTC")),
        )
    }

    #[test]
    fn open_order_is_timestamped() {
        let order = order();
        assert!(!order.created_at.is_empty());
    }

    #[test]
    fn historic_trade_from_order_keeps_identity() {
        let order = order();
        let trade = HistoricTrade::from_order(&order);
        assert_eq!(trade.order_id, order.order_id);
        assert_eq!(trade.pair, order.pair);
        assert_eq!(trade.direction, order.direction);
        assert_eq!(trade.amount_in, order.amount_in);
    }

    #[test]
    fn order_result_constructors() {
        let filled = OrderResult::filled(ExchangeName::new("Binance"), OrderId::new(1));
        assert!(filled.filled_immediately);

        let pending = OrderResult::pending(ExchangeName::new("Binance"), OrderId::new(2));
        assert!(!pending.filled_immediately);
    }
}
