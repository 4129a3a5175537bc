//! Domain errors for the trading core.

use std::fmt;

/// Domain-level errors that can occur in business logic.
///
/// These errors indicate programmer error (bad arguments, misuse of the
/// conversion algebra) and are meant to propagate to the caller. Expected
/// real-world conditions (missing prices, unresolvable valuation paths,
/// vanished exchanges) are modeled as `Option`/`bool` results instead.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// Invalid value for a field or argument.
    InvalidValue {
        /// Field name.
        field: String,
        /// Error message.
        message: String,
    },

    /// Two quantities with different currency symbols were combined.
    CurrencyMismatch {
        /// Symbol the operation required.
        expected: String,
        /// Symbol that was supplied.
        actual: String,
        /// Operation that was attempted.
        operation: String,
    },

    /// Entity not found.
    NotFound {
        /// Entity type.
        entity_type: String,
        /// Entity identifier.
        id: String,
    },
}

impl fmt::Display for DomainError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidValue { field, message } => {
                write!(f, "Invalid value for '{field}': {message}")
            }
            Self::CurrencyMismatch {
                expected,
                actual,
                operation,
            } => {
                write!(
                    f,
                    "Currency mismatch in {operation}: expected {expected}, got {actual}"
                )
            }
            Self::NotFound { entity_type, id } => {
                write!(f, "{entity_type} not found: {id}")
            }
        }
    }
}

impl std::error::Error for DomainError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn domain_error_invalid_value_display() {
        let err = DomainError::InvalidValue {
            field: "amount".to_string(),
            message: "one of amount_in or amount_out must be given".to_string(),
        };
        let msg = format!("{err}");
        assert!(msg.contains("amount"));
        assert!(msg.contains("must be given"));
    }

    #[test]
    fn domain_error_currency_mismatch_display() {
        let err = DomainError::CurrencyMismatch {
            expected: "BTC".to_string(),
            actual: "ETH".to_string(),
            operation: "add".to_string(),
        };
        let msg = format!("{err}");
        assert!(msg.contains("BTC"));
        assert!(msg.contains("ETH"));
        assert!(msg.contains("add"));
    }

    #[test]
    fn domain_error_not_found_display() {
        let err = DomainError::NotFound {
            entity_type: "TradePair".to_string(),
            id: "BTC/USDT".to_string(),
        };
        let msg = format!("{err}");
        assert!(msg.contains("TradePair"));
        assert!(msg.contains("BTC/USDT"));
    }

    #[test]
    fn domain_error_is_std_error() {
        let err: Box<dyn std::error::Error> = Box::new(DomainError::InvalidValue {
            field: "test".to_string(),
            message: "test".to_string(),
        });
        assert!(!err.to_string().is_empty());
    }
}
