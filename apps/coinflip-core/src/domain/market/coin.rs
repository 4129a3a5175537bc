//! Coin: a currency on a specific exchange.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::hash::{Hash, Hasher};
use tracing::debug;

use crate::domain::shared::{Amount, CoinSym, ExchangeName};

use super::{PairIndex, ValuationPath};

/// Coin metadata: operator-assigned trading defaults.
///
/// Refreshed from settings; none of these fields participate in coin
/// identity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CoinMeta {
    /// Default amount offered when opening a trade in this coin.
    pub default_trade_amount: Decimal,
    /// Fallback value of 1 unit in the valuation currency, used when no
    /// live valuation path exists.
    pub assigned_value: Option<Decimal>,
    /// Maximum amount an automated bot may trade per order (zero disables
    /// auto-trading this coin).
    pub auto_trade_limit: Decimal,
}

impl Default for CoinMeta {
    fn default() -> Self {
        Self {
            default_trade_amount: Decimal::ONE,
            assigned_value: None,
            auto_trade_limit: Decimal::ZERO,
        }
    }
}

/// Cached valuation state, recomputed lazily.
#[derive(Debug, Clone, Default)]
struct ValuationCache {
    path: Option<ValuationPath>,
    approx: Option<Decimal>,
}

/// A currency as it exists on one exchange.
///
/// Identity is `(sym, exchange)`: the same symbol on two exchanges is two
/// different coins with independent pairs, prices, and metadata. Equality
/// and hashing use only the identity; metadata may be refreshed but
/// identity is immutable.
#[derive(Debug, Clone)]
pub struct Coin {
    sym: CoinSym,
    exchange: ExchangeName,
    meta: CoinMeta,
    valuation: ValuationCache,
}

impl Coin {
    /// Create a coin with default metadata.
    #[must_use]
    pub fn new(sym: CoinSym, exchange: ExchangeName) -> Self {
        Self::with_meta(sym, exchange, CoinMeta::default())
    }

    /// Create a coin with the given metadata.
    #[must_use]
    pub fn with_meta(sym: CoinSym, exchange: ExchangeName, meta: CoinMeta) -> Self {
        Self {
            sym,
            exchange,
            meta,
            valuation: ValuationCache::default(),
        }
    }

    /// The currency symbol.
    #[must_use]
    pub const fn sym(&self) -> &CoinSym {
        &self.sym
    }

    /// The exchange this coin trades on.
    #[must_use]
    pub const fn exchange(&self) -> &ExchangeName {
        &self.exchange
    }

    /// The coin's metadata.
    #[must_use]
    pub const fn meta(&self) -> &CoinMeta {
        &self.meta
    }

    /// Refresh the metadata (identity is unaffected).
    pub fn set_meta(&mut self, meta: CoinMeta) {
        self.meta = meta;
    }

    /// The default trade amount, denominated in this coin.
    #[must_use]
    pub fn default_trade_amount(&self) -> Amount {
        Amount::new(self.meta.default_trade_amount, self.sym.clone())
    }

    /// The currently cached valuation path, if any.
    #[must_use]
    pub const fn valuation_path(&self) -> Option<&ValuationPath> {
        self.valuation.path.as_ref()
    }

    /// Ensure the cached valuation path to `currency` is current.
    ///
    /// Returns `true` when a usable path exists afterwards. A cached path
    /// survives while the valuation currency is unchanged and every hop is
    /// still listed; otherwise the cache is cleared and resolution is
    /// retried (direct pair first, then the configured bridge currencies).
    /// An exchange with no pairs yet cannot price anything and returns
    /// `false`. Failure is an expected state, not an error.
    pub fn update_valuation_path(
        &mut self,
        pairs: &PairIndex,
        currency: &CoinSym,
        bridges: &[CoinSym],
    ) -> bool {
        if let Some(path) = &self.valuation.path {
            if path.is_valid_for(&self.sym, currency, pairs) {
                return true;
            }
        }

        self.valuation.path = None;
        if pairs.is_empty() {
            return false;
        }

        match ValuationPath::resolve(&self.sym, currency, pairs, bridges) {
            Some(path) => {
                debug!(
                    coin = %self.sym,
                    exchange = %self.exchange,
                    currency = %currency,
                    hops = path.hops().len(),
                    "valuation path resolved"
                );
                self.valuation.path = Some(path);
                true
            }
            None => {
                debug!(
                    coin = %self.sym,
                    exchange = %self.exchange,
                    currency = %currency,
                    "no valuation path"
                );
                false
            }
        }
    }

    /// The value of 1 unit of this coin in `currency`, live if possible.
    ///
    /// A successful walk over the valuation path refreshes the approximate
    /// value; a failed walk (missing path, vanished pair, unknown spot)
    /// returns [`Self::value_approx`] instead. Never fails.
    pub fn value(&mut self, pairs: &PairIndex, currency: &CoinSym, bridges: &[CoinSym]) -> Amount {
        if self.update_valuation_path(pairs, currency, bridges) {
            let live = self
                .valuation
                .path
                .as_ref()
                .and_then(|path| path.value_of(&self.sym, pairs));
            if let Some(live) = live {
                self.valuation.approx = Some(live);
                return Amount::new(live, currency.clone());
            }
        }
        Amount::new(self.value_approx(), currency.clone())
    }

    /// Last-known approximate value of 1 unit in the valuation currency.
    ///
    /// Seeded from [`CoinMeta::assigned_value`] (else zero) until a live
    /// walk succeeds.
    #[must_use]
    pub fn value_approx(&self) -> Decimal {
        self.valuation
            .approx
            .or(self.meta.assigned_value)
            .unwrap_or(Decimal::ZERO)
    }
}

impl PartialEq for Coin {
    fn eq(&self, other: &Self) -> bool {
        self.sym == other.sym && self.exchange == other.exchange
    }
}

impl Eq for Coin {}

impl Hash for Coin {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.sym.hash(state);
        self.exchange.hash(state);
    }
}

impl fmt::Display for Coin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}@{}", self.sym, self.exchange)
    }
}
