//! Core Configuration Settings
//!
//! Configuration for the trading core, loaded from environment variables.
//! Every variable has a default; unparsable values fall back to the
//! default rather than aborting startup.
//!
//! # Environment Variables
//!
//! - `COINFLIP_VALUATION_CURRENCY`: currency coin values are expressed in
//!   (default: `USDT`)
//! - `COINFLIP_BRIDGE_COINS`: comma-separated bridge currencies tried for
//!   two-hop valuation paths (default: `BTC,USDT,USDC,ETH`)
//! - `COINFLIP_ORDER_WATCH_ENABLED`: set to `false` to disable the
//!   periodic reconciliation poll (default: enabled)
//! - `COINFLIP_ORDER_POLL_INTERVAL_MS`: reconciliation poll interval in
//!   milliseconds (default: `1000`)

use std::time::Duration;

use crate::application::services::{OrderWatchConfig, ValuationSettings};
use crate::domain::shared::CoinSym;

/// Complete core configuration.
#[derive(Debug, Clone, Default)]
pub struct CoreConfig {
    /// Valuation settings (currency + bridge currencies).
    pub valuation: ValuationSettings,
    /// Order watch settings (poll cadence).
    pub order_watch: OrderWatchConfig,
}

impl CoreConfig {
    /// Load configuration from environment variables.
    #[must_use]
    pub fn from_env() -> Self {
        let defaults = ValuationSettings::default();

        let currency = std::env::var("COINFLIP_VALUATION_CURRENCY")
            .ok()
            .filter(|value| !value.is_empty())
            .map_or(defaults.currency, CoinSym::new);

        let bridge_coins = std::env::var("COINFLIP_BRIDGE_COINS")
            .ok()
            .and_then(|value| parse_bridge_coins(&value))
            .unwrap_or(defaults.bridge_coins);

        let watch_defaults = OrderWatchConfig::default();

        let enabled = std::env::var("COINFLIP_ORDER_WATCH_ENABLED")
            .map(|value| value.to_lowercase() != "false")
            .unwrap_or(watch_defaults.enabled);

        let poll_interval = std::env::var("COINFLIP_ORDER_POLL_INTERVAL_MS")
            .ok()
            .and_then(|value| value.parse::<u64>().ok())
            .map_or(watch_defaults.poll_interval, Duration::from_millis);

        Self {
            valuation: ValuationSettings {
                currency,
                bridge_coins,
            },
            order_watch: OrderWatchConfig {
                enabled,
                poll_interval,
            },
        }
    }
}

/// Parse a comma-separated bridge-coin list. Returns `None` when the value
/// contains no usable symbols.
fn parse_bridge_coins(value: &str) -> Option<Vec<CoinSym>> {
    let coins: Vec<CoinSym> = value
        .split(',')
        .map(str::trim)
        .filter(|entry| !entry.is_empty())
        .map(CoinSym::new)
        .collect();
    if coins.is_empty() { None } else { Some(coins) }
}
