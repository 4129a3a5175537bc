//! Amount value object for currency quantities.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use std::ops::{Add, Mul, Neg, Sub};

use crate::domain::shared::DomainError;

use super::CoinSym;

/// A decimal quantity tagged with the currency it is denominated in.
///
/// The tag makes it impossible to silently mix base- and quote-denominated
/// amounts: `Add`/`Sub` panic on mismatched symbols (programmer error), and
/// the `try_add`/`try_sub` variants surface the mismatch as a
/// [`DomainError`] instead. Ordering is only defined between amounts of the
/// same symbol.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Amount {
    value: Decimal,
    sym: CoinSym,
}

impl Amount {
    /// Create a new Amount.
    #[must_use]
    pub const fn new(value: Decimal, sym: CoinSym) -> Self {
        Self { value, sym }
    }

    /// Zero in the given currency.
    #[must_use]
    pub const fn zero(sym: CoinSym) -> Self {
        Self {
            value: Decimal::ZERO,
            sym,
        }
    }

    /// Get the inner Decimal value.
    #[must_use]
    pub const fn value(&self) -> Decimal {
        self.value
    }

    /// Get the currency symbol this amount is denominated in.
    #[must_use]
    pub const fn sym(&self) -> &CoinSym {
        &self.sym
    }

    /// Returns true if this amount is positive.
    #[must_use]
    pub fn is_positive(&self) -> bool {
        self.value > Decimal::ZERO
    }

    /// Returns true if this amount is negative.
    #[must_use]
    pub fn is_negative(&self) -> bool {
        self.value < Decimal::ZERO
    }

    /// Returns true if this amount is zero.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.value == Decimal::ZERO
    }

    /// Get the absolute value.
    #[must_use]
    pub fn abs(&self) -> Self {
        Self {
            value: self.value.abs(),
            sym: self.sym.clone(),
        }
    }

    /// Add another amount of the same currency.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::CurrencyMismatch`] if the symbols differ.
    pub fn try_add(&self, rhs: &Self) -> Result<Self, DomainError> {
        self.require_same_sym(rhs, "add")?;
        Ok(Self {
            value: self.value + rhs.value,
            sym: self.sym.clone(),
        })
    }

    /// Subtract another amount of the same currency.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::CurrencyMismatch`] if the symbols differ.
    pub fn try_sub(&self, rhs: &Self) -> Result<Self, DomainError> {
        self.require_same_sym(rhs, "sub")?;
        Ok(Self {
            value: self.value - rhs.value,
            sym: self.sym.clone(),
        })
    }

    fn require_same_sym(&self, rhs: &Self, operation: &str) -> Result<(), DomainError> {
        if self.sym == rhs.sym {
            Ok(())
        } else {
            Err(DomainError::CurrencyMismatch {
                expected: self.sym.as_str().to_string(),
                actual: rhs.sym.as_str().to_string(),
                operation: operation.to_string(),
            })
        }
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.value, self.sym)
    }
}

impl PartialOrd for Amount {
    /// Ordering is only defined between amounts of the same currency.
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        (self.sym == other.sym).then(|| self.value.cmp(&other.value))
    }
}

impl Add for Amount {
    type Output = Self;

    /// # Panics
    ///
    /// Panics if the two amounts are denominated in different currencies.
    fn add(self, rhs: Self) -> Self::Output {
        assert_eq!(
            self.sym, rhs.sym,
            "cannot add {} to {}",
            rhs.sym, self.sym
        );
        Self {
            value: self.value + rhs.value,
            sym: self.sym,
        }
    }
}

impl Sub for Amount {
    type Output = Self;

    /// # Panics
    ///
    /// Panics if the two amounts are denominated in different currencies.
    fn sub(self, rhs: Self) -> Self::Output {
        assert_eq!(
            self.sym, rhs.sym,
            "cannot subtract {} from {}",
            rhs.sym, self.sym
        );
        Self {
            value: self.value - rhs.value,
            sym: self.sym,
        }
    }
}

impl Neg for Amount {
    type Output = Self;

    fn neg(self) -> Self::Output {
        Self {
            value: -self.value,
            sym: self.sym,
        }
    }
}

impl Mul<Decimal> for Amount {
    type Output = Self;

    fn mul(self, rhs: Decimal) -> Self::Output {
        Self {
            value: self.value * rhs,
            sym: self.sym,
        }
    }
}
