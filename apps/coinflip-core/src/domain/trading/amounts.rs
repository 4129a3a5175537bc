//! Amount conversions between trade-direction denominations.
//!
//! All conversions take the canonical quote-per-base price and go through
//! [`Price`], so zero prices degrade to zero amounts instead of dividing.

use crate::domain::shared::{Amount, DomainError, Price};

use super::TradeDirection;

impl TradeDirection {
    /// The amount of the in-currency consumed to trade `amount_base` of the
    /// base currency at `price_q2b`.
    ///
    /// `BaseToQuote` consumes the base amount itself; `QuoteToBase` consumes
    /// its quote-denominated worth.
    ///
    /// # Panics
    ///
    /// Panics if `amount_base` is not denominated in the price's base
    /// currency.
    #[must_use]
    pub fn amount_in(&self, amount_base: &Amount, price_q2b: &Price) -> Amount {
        match self {
            Self::BaseToQuote => {
                require_base(amount_base, price_q2b);
                amount_base.clone()
            }
            Self::QuoteToBase => price_q2b.base_to_quote(amount_base),
        }
    }

    /// The amount of the out-currency produced by trading `amount_base` of
    /// the base currency at `price_q2b`.
    ///
    /// # Panics
    ///
    /// Panics if `amount_base` is not denominated in the price's base
    /// currency.
    #[must_use]
    pub fn amount_out(&self, amount_base: &Amount, price_q2b: &Price) -> Amount {
        match self {
            Self::BaseToQuote => price_q2b.base_to_quote(amount_base),
            Self::QuoteToBase => {
                require_base(amount_base, price_q2b);
                amount_base.clone()
            }
        }
    }

    /// The base-denominated amount corresponding to a known in- or
    /// out-amount at `price_q2b`.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::InvalidValue`] unless exactly one of
    /// `amount_in`/`amount_out` is given.
    ///
    /// # Panics
    ///
    /// Panics if the supplied amount is not denominated in the currency
    /// that side of the trade uses.
    pub fn amount_base(
        &self,
        price_q2b: &Price,
        amount_in: Option<&Amount>,
        amount_out: Option<&Amount>,
    ) -> Result<Amount, DomainError> {
        match (amount_in, amount_out) {
            (Some(amount_in), None) => Ok(match self {
                Self::BaseToQuote => {
                    require_base(amount_in, price_q2b);
                    amount_in.clone()
                }
                Self::QuoteToBase => price_q2b.quote_to_base(amount_in),
            }),
            (None, Some(amount_out)) => Ok(match self {
                Self::BaseToQuote => price_q2b.quote_to_base(amount_out),
                Self::QuoteToBase => {
                    require_base(amount_out, price_q2b);
                    amount_out.clone()
                }
            }),
            _ => Err(ambiguous_amount()),
        }
    }

    /// The quote-denominated amount corresponding to a known in- or
    /// out-amount at `price_q2b`.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::InvalidValue`] unless exactly one of
    /// `amount_in`/`amount_out` is given.
    ///
    /// # Panics
    ///
    /// Panics if the supplied amount is not denominated in the currency
    /// that side of the trade uses.
    pub fn amount_quote(
        &self,
        price_q2b: &Price,
        amount_in: Option<&Amount>,
        amount_out: Option<&Amount>,
    ) -> Result<Amount, DomainError> {
        match (amount_in, amount_out) {
            (Some(amount_in), None) => Ok(match self {
                Self::BaseToQuote => price_q2b.base_to_quote(amount_in),
                Self::QuoteToBase => {
                    require_quote(amount_in, price_q2b);
                    amount_in.clone()
                }
            }),
            (None, Some(amount_out)) => Ok(match self {
                Self::BaseToQuote => {
                    require_quote(amount_out, price_q2b);
                    amount_out.clone()
                }
                Self::QuoteToBase => price_q2b.base_to_quote(amount_out),
            }),
            _ => Err(ambiguous_amount()),
        }
    }
}

fn require_base(amount: &Amount, price: &Price) {
    assert_eq!(
        amount.sym(),
        price.base(),
        "amount in {} is not denominated in the base currency of {}",
        amount.sym(),
        price
    );
}

fn require_quote(amount: &Amount, price: &Price) {
    assert_eq!(
        amount.sym(),
        price.quote(),
        "amount in {} is not denominated in the quote currency of {}",
        amount.sym(),
        price
    );
}

fn ambiguous_amount() -> DomainError {
    DomainError::InvalidValue {
        field: "amount".to_string(),
        message: "one of amount_in or amount_out must be given".to_string(),
    }
}
