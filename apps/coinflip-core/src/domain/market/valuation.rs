//! Valuation-path resolution.
//!
//! A valuation path connects a coin to the configured valuation currency
//! through listed pairs: a direct pair when one exists, otherwise a bounded
//! two-hop chain through a bridge currency. No deeper search is performed,
//! which keeps pricing cheap and predictable.

use rust_decimal::Decimal;

use crate::domain::shared::CoinSym;
use crate::domain::trading::TradeDirection;

use super::{PairIndex, PairKey};

/// An ordered chain of pairs connecting a coin to a valuation currency.
///
/// Consecutive hops share a currency. The chain is empty when the coin IS
/// the valuation currency. Paths are cached on the owning [`super::Coin`]
/// and stay valid while the valuation currency is unchanged and every hop
/// is still listed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValuationPath {
    currency: CoinSym,
    hops: Vec<PairKey>,
}

impl ValuationPath {
    /// The valuation currency this path terminates at.
    #[must_use]
    pub const fn currency(&self) -> &CoinSym {
        &self.currency
    }

    /// The pair keys walked, source coin first.
    #[must_use]
    pub fn hops(&self) -> &[PairKey] {
        &self.hops
    }

    /// Resolve a path from `coin` to `currency` over the listed pairs.
    ///
    /// Resolution order: the coin itself (empty path), a direct pair in
    /// either orientation, then the first `bridge` currency with both legs
    /// listed. Returns `None` when no bounded path exists.
    #[must_use]
    pub fn resolve(
        coin: &CoinSym,
        currency: &CoinSym,
        pairs: &PairIndex,
        bridges: &[CoinSym],
    ) -> Option<Self> {
        if coin == currency {
            return Some(Self {
                currency: currency.clone(),
                hops: Vec::new(),
            });
        }

        if let Some(direct) = pairs.find(coin, currency) {
            return Some(Self {
                currency: currency.clone(),
                hops: vec![direct.key()],
            });
        }

        for bridge in bridges {
            if bridge == coin || bridge == currency {
                continue;
            }
            if let (Some(first), Some(second)) =
                (pairs.find(coin, bridge), pairs.find(bridge, currency))
            {
                return Some(Self {
                    currency: currency.clone(),
                    hops: vec![first.key(), second.key()],
                });
            }
        }

        None
    }

    /// Whether this cached path can still price `coin` in `currency`.
    ///
    /// Valid while the valuation currency is unchanged AND (the coin is the
    /// valuation currency itself, or every hop is still listed).
    #[must_use]
    pub fn is_valid_for(&self, coin: &CoinSym, currency: &CoinSym, pairs: &PairIndex) -> bool {
        if &self.currency != currency {
            return false;
        }
        coin == currency || self.hops.iter().all(|key| pairs.contains_key(key))
    }

    /// Walk the path, converting 1 unit of `coin` into the valuation
    /// currency using current spot prices.
    ///
    /// At each hop the spot rate for the direction that carries the running
    /// currency across the pair is used, so division only ever happens
    /// inside the zero-safe price inversion. Returns `None` if any hop has
    /// vanished or has no spot price (callers fall back to the last-known
    /// approximate value).
    #[must_use]
    pub fn value_of(&self, coin: &CoinSym, pairs: &PairIndex) -> Option<Decimal> {
        let mut value = Decimal::ONE;
        let mut current = coin.clone();

        for key in &self.hops {
            let pair = pairs.get(key)?;
            let direction = if &current == pair.base() {
                TradeDirection::BaseToQuote
            } else {
                debug_assert_eq!(&current, pair.quote(), "path hop must contain {current}");
                TradeDirection::QuoteToBase
            };
            let rate = pair.spot_price(direction)?;
            value *= rate.value();
            current = direction.coin_out(pair).clone();
        }

        debug_assert_eq!(
            current, self.currency,
            "valuation path must terminate at the valuation currency"
        );
        debug_assert!(value >= Decimal::ZERO, "coin value cannot be negative");
        Some(value)
    }
}
