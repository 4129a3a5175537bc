//! Shared value objects.

mod amount;
mod coin_sym;
mod identifiers;
mod price;

pub use amount::Amount;
pub use coin_sym::CoinSym;
pub use identifiers::{ExchangeName, OrderId};
pub use price::Price;
