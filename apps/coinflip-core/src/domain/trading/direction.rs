//! Trade direction and its orientation algebra.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::domain::market::TradePair;
use crate::domain::shared::{CoinSym, DomainError, Price};

/// The direction of a trade on a pair.
///
/// `BaseToQuote` sells the base currency for the quote currency; `QuoteToBase`
/// buys the base currency with the quote currency. The enum is closed, so the
/// orientation functions below are total; unknown spellings are rejected at
/// the parse boundary ([`FromStr`]) rather than silently defaulted, since
/// picking the wrong direction corrupts money calculations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TradeDirection {
    /// Sell base currency, receive quote currency.
    BaseToQuote,
    /// Spend quote currency, receive base currency.
    QuoteToBase,
}

impl TradeDirection {
    /// The opposite direction.
    #[must_use]
    pub const fn opposite(&self) -> Self {
        match self {
            Self::BaseToQuote => Self::QuoteToBase,
            Self::QuoteToBase => Self::BaseToQuote,
        }
    }

    /// Directional multiplier for price-level comparisons.
    ///
    /// `QuoteToBase` is `+1`, `BaseToQuote` is `-1`.
    #[must_use]
    pub const fn sign(&self) -> i8 {
        match self {
            Self::QuoteToBase => 1,
            Self::BaseToQuote => -1,
        }
    }

    /// The currency consumed by a trade in this direction.
    #[must_use]
    pub const fn coin_in<'a>(&self, pair: &'a TradePair) -> &'a CoinSym {
        match self {
            Self::BaseToQuote => pair.base(),
            Self::QuoteToBase => pair.quote(),
        }
    }

    /// The currency produced by a trade in this direction.
    #[must_use]
    pub const fn coin_out<'a>(&self, pair: &'a TradePair) -> &'a CoinSym {
        match self {
            Self::BaseToQuote => pair.quote(),
            Self::QuoteToBase => pair.base(),
        }
    }

    /// Re-orient a canonical quote-per-base price into out-per-in units for
    /// this direction.
    ///
    /// Identity for `BaseToQuote`, inverted for `QuoteToBase`. A zero price
    /// stays zero with the correct orientation (never divides by zero).
    #[must_use]
    pub fn price(&self, price_q2b: &Price) -> Price {
        match self {
            Self::BaseToQuote => price_q2b.clone(),
            Self::QuoteToBase => price_q2b.invert(),
        }
    }
}

impl fmt::Display for TradeDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::BaseToQuote => write!(f, "B2Q"),
            Self::QuoteToBase => write!(f, "Q2B"),
        }
    }
}

impl FromStr for TradeDirection {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "B2Q" | "BASE_TO_QUOTE" | "BASETOQUOTE" => Ok(Self::BaseToQuote),
            "Q2B" | "QUOTE_TO_BASE" | "QUOTETOBASE" => Ok(Self::QuoteToBase),
            other => Err(DomainError::InvalidValue {
                field: "trade_direction".to_string(),
                message: format!("unknown trade type: {other}"),
            }),
        }
    }
}
