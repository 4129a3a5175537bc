// Allow unwrap/expect in tests - tests should panic on unexpected errors
// Allow test-specific patterns and pedantic lints in test code
#![cfg_attr(
    test,
    allow(
        clippy::unwrap_used,
        clippy::expect_used,
        clippy::float_cmp,
        clippy::too_many_lines,
        clippy::match_same_arms,
        clippy::needless_pass_by_value,
        clippy::default_trait_access,
        clippy::items_after_statements
    )
)]

//! CoinFlip Core - Rust Trading Library
//!
//! Deterministic trading core for the CoinFlip bot platform.
//!
//! # Architecture (Clean Architecture + DDD)
//!
//! ## Layers (inside → outside)
//!
//! - **Domain**: Core business logic (value objects, market model, order watch)
//!   - `shared`: `CoinSym`, `Amount`, `Price`, identifiers, domain errors
//!   - `trading`: trade-direction algebra (price orientation, amount conversion)
//!   - `market`: coins, trade pairs, pair index, valuation-path resolution
//!   - `order_watch`: monitored-order reconciliation state machine
//!   - `exchange`: read-only exchange/market views the core consumes
//!
//! - **Application**: Orchestration
//!   - `services`: `ValuationService`, `OrderWatchService` (periodic tick)
//!
//! - **Infrastructure**: Adapters
//!   - `config`: environment-based settings
//!   - `exchange`: deterministic in-memory exchange/market adapters
//!   - `telemetry`: tracing subscriber setup
//!
//! The exchange API layer (REST/WebSocket clients) is an external
//! collaborator: it marshals live state into the views consumed here. The
//! domain core performs no I/O and assumes single-logical-tick access.

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::pedantic)]

// =============================================================================
// Clean Architecture Layers
// =============================================================================

/// Domain layer - Core business logic with no external dependencies.
pub mod domain;

/// Application layer - Services orchestrating the domain.
pub mod application;

/// Infrastructure layer - Adapters and configuration.
pub mod infrastructure;

// =============================================================================
// Re-exports
// =============================================================================

// Domain re-exports
pub use domain::exchange::{ExchangeView, HistoricTrade, MarketView, OpenOrder, OrderResult};
pub use domain::market::{Coin, CoinMeta, PairIndex, PairKey, TradePair, ValuationPath};
pub use domain::order_watch::{MonitoredOrders, OrderOutcome, OutcomeKind, PersistedOrder};
pub use domain::shared::{Amount, CoinSym, DomainError, ExchangeName, OrderId, Price};
pub use domain::trading::TradeDirection;

// Application re-exports
pub use application::services::{
    OrderWatchConfig, OrderWatchHandle, OrderWatchService, ValuationService, ValuationSettings,
};

// Infrastructure re-exports
pub use infrastructure::config::CoreConfig;
pub use infrastructure::exchange::{InMemoryExchange, InMemoryMarket};
