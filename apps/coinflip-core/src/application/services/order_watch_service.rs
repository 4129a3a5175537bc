//! Order Watch Service
//!
//! Drives the monitored-order reconciliation poll on a periodic tick. The
//! service owns the collection: bots feed submissions in through
//! [`OrderWatchService::track`], outcomes flow out over an mpsc channel,
//! and the persisted record list is available via
//! [`OrderWatchService::snapshot`] for the owning bot's settings document.
//!
//! Lifecycle is explicit: [`OrderWatchService::spawn`] starts the tick task
//! and returns an [`OrderWatchHandle`]; [`OrderWatchHandle::stop`] detaches
//! it. After stop, no further polls run for this collection.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::{RwLock, mpsc, watch};
use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;
use tracing::{debug, info};

use crate::domain::exchange::{MarketView, OrderResult};
use crate::domain::order_watch::{MonitoredOrders, OrderOutcome, PersistedOrder};

/// Configuration for the order watch tick.
#[derive(Debug, Clone)]
pub struct OrderWatchConfig {
    /// Whether the periodic poll runs at all.
    pub enabled: bool,
    /// Poll interval. This is also the only retry throttle: transient
    /// skips (exchange still starting) are simply retried next tick.
    pub poll_interval: Duration,
}

impl Default for OrderWatchConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            poll_interval: Duration::from_secs(1),
        }
    }
}

/// Periodic reconciliation of a bot's monitored orders.
///
/// All access to the collection goes through one lock, preserving the
/// single-logical-tick assumption of the domain state machine.
pub struct OrderWatchService<M: MarketView> {
    config: OrderWatchConfig,
    market: Arc<M>,
    orders: RwLock<MonitoredOrders>,
    outcomes_tx: mpsc::UnboundedSender<OrderOutcome>,
}

impl<M: MarketView> OrderWatchService<M> {
    /// Create a service over a market view, restoring any previously
    /// persisted orders.
    ///
    /// Returns the service and the receiving end of the outcome channel.
    #[must_use]
    pub fn new(
        config: OrderWatchConfig,
        market: Arc<M>,
        restored: MonitoredOrders,
    ) -> (Self, mpsc::UnboundedReceiver<OrderOutcome>) {
        let (outcomes_tx, outcomes_rx) = mpsc::unbounded_channel();
        (
            Self {
                config,
                market,
                orders: RwLock::new(restored),
                outcomes_tx,
            },
            outcomes_rx,
        )
    }

    /// Start monitoring a submission result.
    ///
    /// An immediately-filled submission bypasses the collection and its
    /// outcome is forwarded right away.
    pub async fn track(&self, result: &OrderResult) {
        let outcome = self.orders.write().await.track(result);
        if let Some(outcome) = outcome {
            self.forward(outcome);
        }
    }

    /// Run one reconciliation pass, forwarding any outcomes.
    ///
    /// Returns the number of outcomes produced.
    pub async fn poll_once(&self) -> usize {
        let outcomes = self.orders.write().await.poll(self.market.as_ref());
        let produced = outcomes.len();
        for outcome in outcomes {
            self.forward(outcome);
        }
        produced
    }

    /// The persisted records currently pending (for the bot's settings
    /// document).
    pub async fn snapshot(&self) -> Vec<PersistedOrder> {
        self.orders.read().await.orders().to_vec()
    }

    /// Number of orders currently pending.
    pub async fn pending_count(&self) -> usize {
        self.orders.read().await.len()
    }

    fn forward(&self, outcome: OrderOutcome) {
        if self.outcomes_tx.send(outcome).is_err() {
            debug!("outcome receiver dropped, discarding order outcome");
        }
    }
}

impl<M: MarketView + Send + Sync + 'static> OrderWatchService<M> {
    /// Spawn the periodic tick task.
    ///
    /// Call as `Arc::clone(&service).spawn()` to keep using the service for
    /// tracking and snapshots. A disabled service spawns a task that exits
    /// immediately; the handle is still valid to stop.
    #[must_use]
    pub fn spawn(self: Arc<Self>) -> OrderWatchHandle {
        let service = self;
        let (shutdown_tx, mut shutdown_rx) = watch::channel(false);

        let task = tokio::spawn(async move {
            if !service.config.enabled {
                info!("order watch disabled");
                return;
            }

            let mut ticker = tokio::time::interval(service.config.poll_interval);
            ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);

            loop {
                tokio::select! {
                    _ = ticker.tick() => {
                        service.poll_once().await;
                    }
                    changed = shutdown_rx.changed() => {
                        if changed.is_err() || *shutdown_rx.borrow() {
                            break;
                        }
                    }
                }
            }
            info!("order watch stopped");
        });

        OrderWatchHandle {
            shutdown: shutdown_tx,
            task,
        }
    }
}

/// Handle to a running order watch task.
///
/// Owned by the bot; stopping it is the explicit counterpart of the bot
/// unregistering from the model tick.
pub struct OrderWatchHandle {
    shutdown: watch::Sender<bool>,
    task: JoinHandle<()>,
}

impl OrderWatchHandle {
    /// Stop the tick task and wait for it to finish.
    pub async fn stop(self) {
        let _ = self.shutdown.send(true);
        let _ = self.task.await;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::exchange::OrderResult;
    use crate::domain::market::TradePair;
    use crate::domain::order_watch::OutcomeKind;
    use crate::domain::shared::{Amount, CoinSym, ExchangeName, OrderId};
    use crate::domain::trading::TradeDirection;
    use crate::infrastructure::exchange::{InMemoryExchange, InMemoryMarket};
    use rust_decimal::Decimal;

    fn market_with_order(order_id: i64) -> InMemoryMarket {
        let mut exchange = InMemoryExchange::new(ExchangeName::new("Binance"));
        let pair = TradePair::new(CoinSym::new("BTC"), CoinSym::new("USDT")).unwrap();
        let key = pair.key();
        exchange.list_pair(pair);
        exchange.place_order(crate::domain::exchange::OpenOrder::new(
            OrderId::new(order_id),
            key,
            TradeDirection::BaseToQuote,
            Amount::new(Decimal::ONE, CoinSym::new("BTC")),
        ));

        let mut market = InMemoryMarket::new();
        market.add_exchange(exchange);
        market
    }

    fn pending(order_id: i64) -> OrderResult {
        OrderResult::pending(ExchangeName::new("Binance"), OrderId::new(order_id))
    }

    #[tokio::test]
    async fn track_immediate_fill_forwards_outcome() {
        let market = Arc::new(market_with_order(1));
        let (service, mut outcomes) =
            OrderWatchService::new(OrderWatchConfig::default(), market, MonitoredOrders::new());

        service
            .track(&OrderResult::filled(
                ExchangeName::new("Binance"),
                OrderId::new(9),
            ))
            .await;

        let outcome = outcomes.recv().await.unwrap();
        assert_eq!(outcome.kind, OutcomeKind::Filled);
        assert_eq!(service.pending_count().await, 0);
    }

    #[tokio::test]
    async fn poll_once_reports_and_removes() {
        let mut market = market_with_order(42);
        market
            .exchange_mut(&ExchangeName::new("Binance"))
            .unwrap()
            .fill_order(OrderId::new(42));

        let (service, mut outcomes) = OrderWatchService::new(
            OrderWatchConfig::default(),
            Arc::new(market),
            MonitoredOrders::new(),
        );
        service.track(&pending(42)).await;

        assert_eq!(service.poll_once().await, 1);
        let outcome = outcomes.recv().await.unwrap();
        assert_eq!(outcome.kind, OutcomeKind::Filled);
        assert_eq!(outcome.order_id, OrderId::new(42));
        assert!(service.snapshot().await.is_empty());

        // A second pass finds nothing
        assert_eq!(service.poll_once().await, 0);
    }

    #[tokio::test]
    async fn snapshot_exposes_persisted_records() {
        let market = Arc::new(market_with_order(1));
        let (service, _outcomes) =
            OrderWatchService::new(OrderWatchConfig::default(), market, MonitoredOrders::new());

        service.track(&pending(1)).await;

        let snapshot = service.snapshot().await;
        assert_eq!(snapshot.len(), 1);
        assert_eq!(snapshot[0].order_id, OrderId::new(1));
        assert_eq!(snapshot[0].exchange.as_str(), "Binance");
    }

    #[tokio::test]
    async fn spawned_tick_detects_cancellation() {
        let mut market = market_with_order(7);
        market
            .exchange_mut(&ExchangeName::new("Binance"))
            .unwrap()
            .cancel_order(OrderId::new(7));

        let config = OrderWatchConfig {
            enabled: true,
            poll_interval: Duration::from_millis(10),
        };
        let (service, mut outcomes) =
            OrderWatchService::new(config, Arc::new(market), MonitoredOrders::new());
        let service = Arc::new(service);
        service.track(&pending(7)).await;

        let handle = Arc::clone(&service).spawn();
        let outcome = tokio::time::timeout(Duration::from_secs(2), outcomes.recv())
            .await
            .expect("tick should produce an outcome")
            .unwrap();
        assert_eq!(outcome.kind, OutcomeKind::Cancelled);

        handle.stop().await;
    }

    #[tokio::test]
    async fn disabled_service_spawns_inert_task() {
        let market = Arc::new(market_with_order(1));
        let config = OrderWatchConfig {
            enabled: false,
            poll_interval: Duration::from_millis(10),
        };
        let (service, _outcomes) = OrderWatchService::new(config, market, MonitoredOrders::new());
        let service = Arc::new(service);
        service.track(&pending(1)).await;

        let handle = Arc::clone(&service).spawn();
        handle.stop().await;

        // Nothing polled: the order is still pending
        assert_eq!(service.pending_count().await, 1);
    }

    #[tokio::test]
    async fn restored_orders_survive_into_service() {
        let market = Arc::new(market_with_order(1));
        let restored = MonitoredOrders::from_orders(vec![PersistedOrder::new(
            ExchangeName::new("Binance"),
            OrderId::new(1),
        )]);
        let (service, _outcomes) =
            OrderWatchService::new(OrderWatchConfig::default(), market, restored);

        assert_eq!(service.pending_count().await, 1);
        // Order 1 is still open on the exchange, so it stays pending
        assert_eq!(service.poll_once().await, 0);
        assert_eq!(service.pending_count().await, 1);
    }
}
