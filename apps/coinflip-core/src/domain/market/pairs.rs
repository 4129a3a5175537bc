//! Per-exchange index of listed trade pairs.

use std::collections::HashMap;

use crate::domain::shared::CoinSym;

use super::{PairKey, TradePair};

/// The set of pairs an exchange currently lists, keyed by `(base, quote)`.
///
/// Lookup by two symbols is orientation-insensitive: `find("BTC", "USDT")`
/// matches a listed `BTC/USDT` or `USDT/BTC`. Pairs are inserted or
/// refreshed from market-list responses and removed when the exchange stops
/// listing them.
#[derive(Debug, Clone, Default)]
pub struct PairIndex {
    pairs: HashMap<PairKey, TradePair>,
}

impl PairIndex {
    /// Create an empty index.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of listed pairs.
    #[must_use]
    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    /// Whether the index has no pairs (exchange not yet populated).
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    /// Insert or refresh a pair. Returns the previous entry, if any.
    pub fn insert(&mut self, pair: TradePair) -> Option<TradePair> {
        self.pairs.insert(pair.key(), pair)
    }

    /// Remove a pair (delisting). Returns the removed entry, if any.
    pub fn remove(&mut self, key: &PairKey) -> Option<TradePair> {
        self.pairs.remove(key)
    }

    /// Whether a pair with exactly this key is listed.
    #[must_use]
    pub fn contains_key(&self, key: &PairKey) -> bool {
        self.pairs.contains_key(key)
    }

    /// Look up a pair by its exact key.
    #[must_use]
    pub fn get(&self, key: &PairKey) -> Option<&TradePair> {
        self.pairs.get(key)
    }

    /// Look up a pair by its exact key, mutably.
    pub fn get_mut(&mut self, key: &PairKey) -> Option<&mut TradePair> {
        self.pairs.get_mut(key)
    }

    /// Find the pair between two currencies, in either orientation.
    #[must_use]
    pub fn find(&self, a: &CoinSym, b: &CoinSym) -> Option<&TradePair> {
        self.pairs
            .get(&PairKey::new(a.clone(), b.clone()))
            .or_else(|| self.pairs.get(&PairKey::new(b.clone(), a.clone())))
    }

    /// Find the pair between two currencies mutably, in either orientation.
    pub fn find_mut(&mut self, a: &CoinSym, b: &CoinSym) -> Option<&mut TradePair> {
        let forward = PairKey::new(a.clone(), b.clone());
        let key = if self.pairs.contains_key(&forward) {
            forward
        } else {
            PairKey::new(b.clone(), a.clone())
        };
        self.pairs.get_mut(&key)
    }

    /// Iterate over the listed pairs.
    pub fn iter(&self) -> impl Iterator<Item = &TradePair> {
        self.pairs.values()
    }

    /// Keep only the pairs the predicate accepts (bulk delisting).
    pub fn retain(&mut self, mut keep: impl FnMut(&TradePair) -> bool) {
        self.pairs.retain(|_, pair| keep(pair));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pair(base: &str, quote: &str) -> TradePair {
        TradePair::new(CoinSym::new(base), CoinSym::new(quote)).unwrap()
    }

    #[test]
    fn index_starts_empty() {
        let index = PairIndex::new();
        assert!(index.is_empty());
        assert_eq!(index.len(), 0);
    }

    #[test]
    fn insert_and_get() {
        let mut index = PairIndex::new();
        index.insert(pair("BTC", "USDT"));

        let key = PairKey::new(CoinSym::new("BTC"), CoinSym::new("USDT"));
        assert!(index.contains_key(&key));
        assert!(index.get(&key).is_some());
        assert_eq!(index.len(), 1);
    }

    #[test]
    fn insert_refreshes_existing() {
        let mut index = PairIndex::new();
        index.insert(pair("BTC", "USDT"));

        let mut refreshed = pair("BTC", "USDT");
        refreshed.set_spot_q2b(rust_decimal::Decimal::new(50_000, 0));
        let previous = index.insert(refreshed);

        assert!(previous.is_some());
        assert_eq!(index.len(), 1);
        let key = PairKey::new(CoinSym::new("BTC"), CoinSym::new("USDT"));
        assert!(index.get(&key).unwrap().spot_q2b().is_some());
    }

    #[test]
    fn find_matches_either_orientation() {
        let mut index = PairIndex::new();
        index.insert(pair("BTC", "USDT"));

        let btc = CoinSym::new("BTC");
        let usdt = CoinSym::new("USDT");
        assert!(index.find(&btc, &usdt).is_some());
        assert!(index.find(&usdt, &btc).is_some());
        assert!(index.find(&btc, &CoinSym::new("ETH")).is_none());
    }

    #[test]
    fn find_mut_matches_either_orientation() {
        let mut index = PairIndex::new();
        index.insert(pair("BTC", "USDT"));

        let btc = CoinSym::new("BTC");
        let usdt = CoinSym::new("USDT");
        let found = index.find_mut(&usdt, &btc).unwrap();
        found.set_spot_q2b(rust_decimal::Decimal::ONE);

        assert!(index.find(&btc, &usdt).unwrap().spot_q2b().is_some());
    }

    #[test]
    fn remove_delists() {
        let mut index = PairIndex::new();
        index.insert(pair("BTC", "USDT"));

        let key = PairKey::new(CoinSym::new("BTC"), CoinSym::new("USDT"));
        assert!(index.remove(&key).is_some());
        assert!(index.is_empty());
        assert!(index.remove(&key).is_none());
    }

    #[test]
    fn retain_bulk_delists() {
        let mut index = PairIndex::new();
        index.insert(pair("BTC", "USDT"));
        index.insert(pair("ETH", "USDT"));
        index.insert(pair("ETH", "BTC"));

        let usdt = CoinSym::new("USDT");
        index.retain(|p| p.contains(&usdt));

        assert_eq!(index.len(), 2);
        assert!(
            index
                .find(&CoinSym::new("ETH"), &CoinSym::new("BTC"))
                .is_none()
        );
    }

    #[test]
    fn iter_visits_all_pairs() {
        let mut index = PairIndex::new();
        index.insert(pair("BTC", "USDT"));
        index.insert(pair("ETH", "USDT"));

        assert_eq!(index.iter().count(), 2);
    }
}
