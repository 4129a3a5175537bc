//! Market model.
//!
//! Trade pairs, the per-exchange pair index, coins, and valuation-path
//! resolution.

mod coin;
mod pair;
mod pairs;
mod valuation;

pub use coin::{Coin, CoinMeta};
pub use pair::{PairKey, TradePair};
pub use pairs::PairIndex;
pub use valuation::ValuationPath;
