//! Valuation Service
//!
//! Prices coins in the configured valuation currency against one
//! exchange's pair index. Settings are held explicitly (and passed down
//! explicitly) so a currency change deterministically invalidates cached
//! paths on the next refresh, and tests stay isolated.

use tracing::debug;

use crate::domain::exchange::ExchangeView;
use crate::domain::market::Coin;
use crate::domain::shared::{Amount, CoinSym};

/// Valuation settings: the target currency and the bridge currencies tried
/// for two-hop paths.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValuationSettings {
    /// The currency coin values are expressed in.
    pub currency: CoinSym,
    /// Bridge currencies tried, in order, when no direct pair exists.
    pub bridge_coins: Vec<CoinSym>,
}

impl Default for ValuationSettings {
    fn default() -> Self {
        Self {
            currency: CoinSym::new("USDT"),
            bridge_coins: default_bridge_coins(),
        }
    }
}

/// The stock bridge set: the liquid majors most alt pairs quote against.
#[must_use]
pub(crate) fn default_bridge_coins() -> Vec<CoinSym> {
    vec![
        CoinSym::new("BTC"),
        CoinSym::new("USDT"),
        CoinSym::new("USDC"),
        CoinSym::new("ETH"),
    ]
}

/// Prices coins through valuation paths using explicit settings.
#[derive(Debug, Clone, Default)]
pub struct ValuationService {
    settings: ValuationSettings,
}

impl ValuationService {
    /// Create a service with the given settings.
    #[must_use]
    pub const fn new(settings: ValuationSettings) -> Self {
        Self { settings }
    }

    /// The current settings.
    #[must_use]
    pub const fn settings(&self) -> &ValuationSettings {
        &self.settings
    }

    /// Change the valuation currency.
    ///
    /// Cached paths on coins are keyed by currency, so every coin
    /// recomputes on its next refresh.
    pub fn set_currency(&mut self, currency: CoinSym) {
        self.settings.currency = currency;
    }

    /// Refresh the valuation paths of a batch of coins against one
    /// exchange's pair index.
    ///
    /// Returns how many coins ended up with a usable path. Coins without
    /// one are not an error: they price via their assigned/approximate
    /// value until the exchange lists a route.
    pub fn refresh<E: ExchangeView>(&self, exchange: &E, coins: &mut [Coin]) -> usize {
        let pairs = exchange.pairs();
        let mut live = 0;
        for coin in coins.iter_mut() {
            if coin.update_valuation_path(pairs, &self.settings.currency, &self.settings.bridge_coins)
            {
                live += 1;
            }
        }
        debug!(
            exchange = %exchange.name(),
            currency = %self.settings.currency,
            live,
            total = coins.len(),
            "valuation paths refreshed"
        );
        live
    }

    /// The value of 1 unit of `coin` in the valuation currency, live if
    /// possible, else the coin's assigned/approximate fallback.
    pub fn value_of<E: ExchangeView>(&self, exchange: &E, coin: &mut Coin) -> Amount {
        coin.value(
            exchange.pairs(),
            &self.settings.currency,
            &self.settings.bridge_coins,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::market::TradePair;
    use crate::domain::shared::ExchangeName;
    use crate::infrastructure::exchange::InMemoryExchange;
    use rust_decimal_macros::dec;

    fn exchange() -> InMemoryExchange {
        let mut exchange = InMemoryExchange::new(ExchangeName::new("Binance"));
        for (base, quote, spot) in [
            ("BTC", "USDT", dec!(50000)),
            ("ETH", "USDT", dec!(3000)),
            ("DOGE", "BTC", dec!(0.000004)),
        ] {
            let mut pair = TradePair::new(CoinSym::new(base), CoinSym::new(quote)).unwrap();
            pair.set_spot_q2b(spot);
            exchange.list_pair(pair);
        }
        exchange
    }

    fn coins() -> Vec<Coin> {
        ["BTC", "ETH", "DOGE", "XMR"]
            .into_iter()
            .map(|sym| Coin::new(CoinSym::new(sym), ExchangeName::new("Binance")))
            .collect()
    }

    #[test]
    fn default_settings_match_stock_bridges() {
        let settings = ValuationSettings::default();
        assert_eq!(settings.currency.as_str(), "USDT");
        assert_eq!(settings.bridge_coins.len(), 4);
        assert_eq!(settings.bridge_coins[0].as_str(), "BTC");
    }

    #[test]
    fn refresh_counts_live_paths() {
        let service = ValuationService::new(ValuationSettings::default());
        let exchange = exchange();
        let mut coins = coins();

        // BTC and ETH price directly, DOGE via BTC; XMR has no route
        let live = service.refresh(&exchange, &mut coins);
        assert_eq!(live, 3);
        assert!(coins[3].valuation_path().is_none());
    }

    #[test]
    fn value_of_prices_through_bridge() {
        let service = ValuationService::new(ValuationSettings::default());
        let exchange = exchange();
        let mut doge = Coin::new(CoinSym::new("DOGE"), ExchangeName::new("Binance"));

        let value = service.value_of(&exchange, &mut doge);
        assert_eq!(value.value(), dec!(0.2));
        assert_eq!(value.sym().as_str(), "USDT");
    }

    #[test]
    fn currency_change_invalidates_on_next_refresh() {
        let mut service = ValuationService::new(ValuationSettings::default());
        let exchange = exchange();
        let mut btc = Coin::new(CoinSym::new("BTC"), ExchangeName::new("Binance"));

        assert_eq!(service.refresh(&exchange, std::slice::from_mut(&mut btc)), 1);
        let usdt_path = btc.valuation_path().unwrap().clone();

        // No ETH-quoted route for BTC exists, so the refresh must drop the
        // stale USDT path rather than keep serving it
        service.set_currency(CoinSym::new("EUR"));
        assert_eq!(service.refresh(&exchange, std::slice::from_mut(&mut btc)), 0);
        assert_ne!(btc.valuation_path(), Some(&usdt_path));
    }

    #[test]
    fn valuation_currency_itself_is_unity() {
        let service = ValuationService::new(ValuationSettings::default());
        let exchange = exchange();
        let mut usdt = Coin::new(CoinSym::new("USDT"), ExchangeName::new("Binance"));

        let value = service.value_of(&exchange, &mut usdt);
        assert_eq!(value.value(), rust_decimal::Decimal::ONE);
    }
}
