//! Trade pair: a tradable market between two currencies.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::shared::{CoinSym, DomainError, Price};
use crate::domain::trading::TradeDirection;

/// Unique key of a trade pair on an exchange: `(base, quote)`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PairKey {
    base: CoinSym,
    quote: CoinSym,
}

impl PairKey {
    /// Create a new pair key.
    #[must_use]
    pub const fn new(base: CoinSym, quote: CoinSym) -> Self {
        Self { base, quote }
    }

    /// The base currency.
    #[must_use]
    pub const fn base(&self) -> &CoinSym {
        &self.base
    }

    /// The quote currency.
    #[must_use]
    pub const fn quote(&self) -> &CoinSym {
        &self.quote
    }
}

impl fmt::Display for PairKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.base, self.quote)
    }
}

/// A tradable market: base and quote currencies plus the current spot price.
///
/// The spot price is stored once, in canonical quote-per-base orientation;
/// the rate for either [`TradeDirection`] is derived through the direction
/// algebra, which makes the two directions reciprocals of each other by
/// construction. An unknown price (no book, feed gap) is `None`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TradePair {
    base: CoinSym,
    quote: CoinSym,
    spot_q2b: Option<Decimal>,
}

impl TradePair {
    /// Create a new pair with no spot price yet.
    ///
    /// # Errors
    ///
    /// Returns an error if either symbol fails validation or the two
    /// symbols are equal.
    pub fn new(base: CoinSym, quote: CoinSym) -> Result<Self, DomainError> {
        base.validate()?;
        quote.validate()?;
        if base == quote {
            return Err(DomainError::InvalidValue {
                field: "pair".to_string(),
                message: format!("base and quote must differ, got {base}/{quote}"),
            });
        }
        Ok(Self {
            base,
            quote,
            spot_q2b: None,
        })
    }

    /// The base currency.
    #[must_use]
    pub const fn base(&self) -> &CoinSym {
        &self.base
    }

    /// The quote currency.
    #[must_use]
    pub const fn quote(&self) -> &CoinSym {
        &self.quote
    }

    /// The unique key of this pair.
    #[must_use]
    pub fn key(&self) -> PairKey {
        PairKey::new(self.base.clone(), self.quote.clone())
    }

    /// Whether the given currency is one side of this pair.
    #[must_use]
    pub fn contains(&self, sym: &CoinSym) -> bool {
        &self.base == sym || &self.quote == sym
    }

    /// The other side of the pair, if `sym` is one side of it.
    #[must_use]
    pub fn other(&self, sym: &CoinSym) -> Option<&CoinSym> {
        if sym == &self.base {
            Some(&self.quote)
        } else if sym == &self.quote {
            Some(&self.base)
        } else {
            None
        }
    }

    /// Update the canonical quote-per-base spot price.
    pub fn set_spot_q2b(&mut self, value: Decimal) {
        self.spot_q2b = Some(value);
    }

    /// Mark the spot price as unknown.
    pub fn clear_spot(&mut self) {
        self.spot_q2b = None;
    }

    /// The canonical quote-per-base spot price, if known.
    #[must_use]
    pub fn spot_q2b(&self) -> Option<Price> {
        self.spot_q2b
            .map(|value| Price::new(value, self.base.clone(), self.quote.clone()))
    }

    /// The spot rate oriented for the given trade direction (out-per-in
    /// units), if known.
    #[must_use]
    pub fn spot_price(&self, direction: TradeDirection) -> Option<Price> {
        self.spot_q2b().map(|price| direction.price(&price))
    }
}

impl fmt::Display for TradePair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.base, self.quote)
    }
}
