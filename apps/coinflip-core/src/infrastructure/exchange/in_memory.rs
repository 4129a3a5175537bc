//! Deterministic in-memory implementations of the exchange views.
//!
//! These back unit/integration tests and backtest mode: state changes only
//! when a test (or the backtest driver) mutates it, so every poll is
//! reproducible.

use std::collections::HashMap;

use rust_decimal::Decimal;
use tracing::debug;

use crate::domain::exchange::{ExchangeView, HistoricTrade, MarketView, OpenOrder};
use crate::domain::market::{PairIndex, PairKey, TradePair};
use crate::domain::shared::{CoinSym, ExchangeName, OrderId};

/// An exchange whose marshalled state lives entirely in memory.
#[derive(Debug, Clone)]
pub struct InMemoryExchange {
    name: ExchangeName,
    pairs: PairIndex,
    orders: HashMap<OrderId, OpenOrder>,
    history: HashMap<OrderId, HistoricTrade>,
    update_thread_active: bool,
}

impl InMemoryExchange {
    /// Create an exchange with no pairs, orders, or history.
    ///
    /// The update thread starts active; call
    /// [`Self::set_update_thread_active`] to simulate startup.
    #[must_use]
    pub fn new(name: ExchangeName) -> Self {
        Self {
            name,
            pairs: PairIndex::new(),
            orders: HashMap::new(),
            history: HashMap::new(),
            update_thread_active: true,
        }
    }

    /// List (or refresh) a pair.
    pub fn list_pair(&mut self, pair: TradePair) {
        self.pairs.insert(pair);
    }

    /// Delist a pair. Returns whether it was listed.
    pub fn delist_pair(&mut self, key: &PairKey) -> bool {
        self.pairs.remove(key).is_some()
    }

    /// Update the quote-per-base spot price of a listed pair (either
    /// orientation). Returns whether the pair was found.
    pub fn set_spot(&mut self, a: &CoinSym, b: &CoinSym, spot_q2b: Decimal) -> bool {
        match self.pairs.find_mut(a, b) {
            Some(pair) => {
                pair.set_spot_q2b(spot_q2b);
                true
            }
            None => false,
        }
    }

    /// Put an order into the live open-order set.
    pub fn place_order(&mut self, order: OpenOrder) {
        self.orders.insert(order.order_id, order);
    }

    /// Fill an open order: it leaves the live set and enters history.
    /// Returns whether the order was open.
    pub fn fill_order(&mut self, order_id: OrderId) -> bool {
        match self.orders.remove(&order_id) {
            Some(order) => {
                self.history
                    .insert(order_id, HistoricTrade::from_order(&order));
                true
            }
            None => false,
        }
    }

    /// Cancel an open order: it leaves the live set with no historic trade.
    /// Returns whether the order was open.
    pub fn cancel_order(&mut self, order_id: OrderId) -> bool {
        self.orders.remove(&order_id).is_some()
    }

    /// Simulate the background data feed being up or down.
    pub fn set_update_thread_active(&mut self, active: bool) {
        self.update_thread_active = active;
    }

    /// Full reset, as a backtest restart does: open orders and history are
    /// cleared (which the reconciliation poll reads as cancellation of
    /// everything outstanding), pairs stay listed.
    pub fn reset(&mut self) {
        debug!(exchange = %self.name, "resetting in-memory exchange");
        self.orders.clear();
        self.history.clear();
    }

    /// Number of currently open orders.
    #[must_use]
    pub fn open_order_count(&self) -> usize {
        self.orders.len()
    }
}

impl ExchangeView for InMemoryExchange {
    fn name(&self) -> &ExchangeName {
        &self.name
    }

    fn pairs(&self) -> &PairIndex {
        &self.pairs
    }

    fn open_order(&self, order_id: OrderId) -> Option<&OpenOrder> {
        self.orders.get(&order_id)
    }

    fn historic_trade(&self, order_id: OrderId) -> Option<&HistoricTrade> {
        self.history.get(&order_id)
    }

    fn update_thread_active(&self) -> bool {
        self.update_thread_active
    }
}

/// An in-memory model of the exchange set.
#[derive(Debug, Clone, Default)]
pub struct InMemoryMarket {
    exchanges: HashMap<ExchangeName, InMemoryExchange>,
    backtesting: bool,
}

impl InMemoryMarket {
    /// Create an empty market.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add (or replace) an exchange.
    pub fn add_exchange(&mut self, exchange: InMemoryExchange) {
        self.exchanges.insert(exchange.name().clone(), exchange);
    }

    /// Remove an exchange entirely (orders monitored against it become
    /// abandoned on the next poll).
    pub fn remove_exchange(&mut self, name: &ExchangeName) -> Option<InMemoryExchange> {
        self.exchanges.remove(name)
    }

    /// Mutable access to an exchange for test/backtest drivers.
    pub fn exchange_mut(&mut self, name: &ExchangeName) -> Option<&mut InMemoryExchange> {
        self.exchanges.get_mut(name)
    }

    /// Switch backtest mode on or off.
    pub fn set_backtesting(&mut self, backtesting: bool) {
        self.backtesting = backtesting;
    }
}

impl MarketView for InMemoryMarket {
    type Exchange = InMemoryExchange;

    fn exchange(&self, name: &ExchangeName) -> Option<&InMemoryExchange> {
        self.exchanges.get(name)
    }

    fn is_backtesting(&self) -> bool {
        self.backtesting
    }
}
