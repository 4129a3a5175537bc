//! Price value object: an exchange rate with explicit orientation.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

use super::{Amount, CoinSym};

/// An exchange rate between two currencies with explicit orientation.
///
/// `value` is the number of `quote` units per 1 `base` unit. Keeping the
/// orientation in the type is what prevents the classic inversion bug of
/// dividing where a multiply was needed: converting an amount through a
/// `Price` checks the amount's symbol against the orientation.
///
/// A zero price is a degenerate but expected market state (thin books,
/// feed gaps); inverting or converting through it yields zero rather than
/// dividing.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Price {
    value: Decimal,
    base: CoinSym,
    quote: CoinSym,
}

impl Price {
    /// Create a new price of `value` quote units per 1 base unit.
    #[must_use]
    pub const fn new(value: Decimal, base: CoinSym, quote: CoinSym) -> Self {
        Self { value, base, quote }
    }

    /// Get the rate (quote units per base unit).
    #[must_use]
    pub const fn value(&self) -> Decimal {
        self.value
    }

    /// The currency 1 unit of which this price is quoted for.
    #[must_use]
    pub const fn base(&self) -> &CoinSym {
        &self.base
    }

    /// The currency the rate is expressed in.
    #[must_use]
    pub const fn quote(&self) -> &CoinSym {
        &self.quote
    }

    /// Returns true if the rate is zero.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.value == Decimal::ZERO
    }

    /// Flip the orientation: base units per quote unit.
    ///
    /// A zero price inverts to a zero price (never divides by zero).
    #[must_use]
    pub fn invert(&self) -> Self {
        let value = if self.value == Decimal::ZERO {
            Decimal::ZERO
        } else {
            Decimal::ONE / self.value
        };
        Self {
            value,
            base: self.quote.clone(),
            quote: self.base.clone(),
        }
    }

    /// Convert a base-denominated amount to its quote-denominated worth.
    ///
    /// # Panics
    ///
    /// Panics if `amount` is not denominated in the base currency.
    #[must_use]
    pub fn base_to_quote(&self, amount: &Amount) -> Amount {
        assert_eq!(
            amount.sym(),
            &self.base,
            "amount in {} cannot be priced by {}",
            amount.sym(),
            self
        );
        Amount::new(amount.value() * self.value, self.quote.clone())
    }

    /// Convert a quote-denominated amount to its base-denominated worth.
    ///
    /// A zero rate yields a zero base amount (never divides by zero).
    ///
    /// # Panics
    ///
    /// Panics if `amount` is not denominated in the quote currency.
    #[must_use]
    pub fn quote_to_base(&self, amount: &Amount) -> Amount {
        assert_eq!(
            amount.sym(),
            &self.quote,
            "amount in {} cannot be priced by {}",
            amount.sym(),
            self
        );
        if self.value == Decimal::ZERO {
            return Amount::zero(self.base.clone());
        }
        Amount::new(amount.value() / self.value, self.base.clone())
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}/{}", self.value, self.quote, self.base)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn btc_usdt(value: i64, scale: u32) -> Price {
        Price::new(
            Decimal::new(value, scale),
            CoinSym::new("BTC"),
            CoinSym::new("USDT"),
        )
    }

    #[test]
    fn price_new_and_accessors() {
        let p = btc_usdt(50_000, 0);
        assert_eq!(p.value(), Decimal::new(50_000, 0));
        assert_eq!(p.base().as_str(), "BTC");
        assert_eq!(p.quote().as_str(), "USDT");
    }

    #[test]
    fn price_display() {
        let p = btc_usdt(50_000, 0);
        assert_eq!(format!("{p}"), "50000 USDT/BTC");
    }

    #[test]
    fn price_invert() {
        let p = Price::new(
            Decimal::new(4, 0),
            CoinSym::new("BTC"),
            CoinSym::new("USDT"),
        );
        let inv = p.invert();
        assert_eq!(inv.value(), Decimal::new(25, 2));
        assert_eq!(inv.base().as_str(), "USDT");
        assert_eq!(inv.quote().as_str(), "BTC");
    }

    #[test]
    fn price_invert_zero_stays_zero() {
        let p = btc_usdt(0, 0);
        let inv = p.invert();
        assert!(inv.is_zero());
        assert_eq!(inv.base().as_str(), "USDT");
        assert_eq!(inv.quote().as_str(), "BTC");
    }

    #[test]
    fn price_invert_roundtrip() {
        let p = btc_usdt(50_000, 0);
        assert_eq!(p.invert().invert(), p);
    }

    #[test]
    fn price_base_to_quote() {
        let p = btc_usdt(50_000, 0);
        let half_btc = Amount::new(Decimal::new(5, 1), CoinSym::new("BTC"));
        let worth = p.base_to_quote(&half_btc);
        assert_eq!(worth.value(), Decimal::new(25_000, 0));
        assert_eq!(worth.sym().as_str(), "USDT");
    }

    #[test]
    fn price_quote_to_base() {
        let p = btc_usdt(50_000, 0);
        let usdt = Amount::new(Decimal::new(25_000, 0), CoinSym::new("USDT"));
        let worth = p.quote_to_base(&usdt);
        assert_eq!(worth.value(), Decimal::new(5, 1));
        assert_eq!(worth.sym().as_str(), "BTC");
    }

    #[test]
    fn price_quote_to_base_zero_rate_yields_zero() {
        let p = btc_usdt(0, 0);
        let usdt = Amount::new(Decimal::new(100, 0), CoinSym::new("USDT"));
        let worth = p.quote_to_base(&usdt);
        assert!(worth.is_zero());
        assert_eq!(worth.sym().as_str(), "BTC");
    }

    #[test]
    #[should_panic(expected = "cannot be priced by")]
    fn price_base_to_quote_wrong_currency_panics() {
        let p = btc_usdt(50_000, 0);
        let eth = Amount::new(Decimal::ONE, CoinSym::new("ETH"));
        let _ = p.base_to_quote(&eth);
    }

    #[test]
    #[should_panic(expected = "cannot be priced by")]
    fn price_quote_to_base_wrong_currency_panics() {
        let p = btc_usdt(50_000, 0);
        let eth = Amount::new(Decimal::ONE, CoinSym::new("ETH"));
        let _ = p.quote_to_base(&eth);
    }

    #[test]
    fn price_serde_roundtrip() {
        let p = btc_usdt(50_000, 0);
        let json = serde_json::to_string(&p).unwrap();
        let parsed: Price = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, p);
    }
}
