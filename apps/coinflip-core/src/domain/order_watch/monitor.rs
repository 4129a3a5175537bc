//! The monitored-order collection and its reconciliation poll.

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::domain::exchange::{ExchangeView, MarketView, OrderResult};
use crate::domain::shared::{ExchangeName, OrderId};

use super::{OrderOutcome, PersistedOrder};

/// Orders a bot has placed that have not yet been observed filled or
/// cancelled.
///
/// The collection is the persistent half of the reconciliation state
/// machine: each order is `Pending` while present here and transitions to a
/// terminal `Filled`/`Cancelled` exactly once, at which point it is removed
/// and an [`OrderOutcome`] is produced. Orders whose exchange has vanished
/// are abandoned: removed with a warning and no outcome.
///
/// Polls run from the model's single logical tick; the collection does no
/// internal locking and must not be shared across threads directly.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MonitoredOrders {
    orders: Vec<PersistedOrder>,
}

impl MonitoredOrders {
    /// Create an empty collection.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Restore a collection from persisted records.
    #[must_use]
    pub const fn from_orders(orders: Vec<PersistedOrder>) -> Self {
        Self { orders }
    }

    /// Number of pending orders.
    #[must_use]
    pub fn len(&self) -> usize {
        self.orders.len()
    }

    /// Whether no orders are pending.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.orders.is_empty()
    }

    /// The pending records, in tracking order (the shape persisted into the
    /// bot's settings document).
    #[must_use]
    pub fn orders(&self) -> &[PersistedOrder] {
        &self.orders
    }

    /// Whether an order is currently pending.
    #[must_use]
    pub fn contains(&self, exchange: &ExchangeName, order_id: OrderId) -> bool {
        self.orders
            .iter()
            .any(|order| &order.exchange == exchange && order.order_id == order_id)
    }

    /// Start monitoring the order behind a submission result.
    ///
    /// The immediate-fill shortcut: a submission that filled synchronously
    /// is never persisted and its Filled outcome is returned right away.
    /// Only orders that remain open enter the collection. Tracking an
    /// already-pending `(exchange, order_id)` is a no-op.
    pub fn track(&mut self, result: &OrderResult) -> Option<OrderOutcome> {
        if result.filled_immediately {
            return Some(OrderOutcome::filled(
                result.exchange.clone(),
                result.order_id,
            ));
        }

        if self.contains(&result.exchange, result.order_id) {
            debug!(
                exchange = %result.exchange,
                order_id = %result.order_id,
                "order already monitored, ignoring duplicate"
            );
            return None;
        }

        self.orders
            .push(PersistedOrder::new(result.exchange.clone(), result.order_id));
        None
    }

    /// Reconcile all pending orders against live exchange state.
    ///
    /// Invoked once per model tick. For each pending order:
    ///
    /// 1. Unresolvable exchange name → abandoned: warn-logged and removed
    ///    with no outcome (retrying forever would leak persisted state).
    /// 2. Exchange data feed still starting (and not backtesting) → left
    ///    pending; absence from the open set means nothing yet.
    /// 3. Still in the open-order set → left pending.
    /// 4. Gone from the open set → Filled if the trade-history index knows
    ///    the order id, else Cancelled.
    ///
    /// Removals are committed in one batch after the loop, so when this
    /// returns the collection no longer contains any order an outcome was
    /// produced for. Polling again without exchange-state change yields
    /// nothing.
    pub fn poll<M: MarketView>(&mut self, market: &M) -> Vec<OrderOutcome> {
        let mut outcomes = Vec::new();
        let mut done = Vec::new();

        for (idx, order) in self.orders.iter().enumerate() {
            let Some(exchange) = market.exchange(&order.exchange) else {
                warn!(
                    exchange = %order.exchange,
                    order_id = %order.order_id,
                    "exchange no longer exists, abandoning monitored order"
                );
                done.push(idx);
                continue;
            };

            if !exchange.update_thread_active() && !market.is_backtesting() {
                debug!(
                    exchange = %order.exchange,
                    order_id = %order.order_id,
                    "exchange still starting up, order left pending"
                );
                continue;
            }

            if exchange.open_order(order.order_id).is_some() {
                continue;
            }

            // The order has left the live set: the history index decides
            // its fate.
            if exchange.historic_trade(order.order_id).is_some() {
                outcomes.push(OrderOutcome::filled(order.exchange.clone(), order.order_id));
            } else {
                outcomes.push(OrderOutcome::cancelled(
                    order.exchange.clone(),
                    order.order_id,
                ));
            }
            done.push(idx);
        }

        // Single batch update to the persisted collection
        if !done.is_empty() {
            let mut idx = 0;
            self.orders.retain(|_| {
                let keep = !done.contains(&idx);
                idx += 1;
                keep
            });
        }

        outcomes
    }
}
