//! The durable record of a monitored order.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::shared::{ExchangeName, OrderId};

/// Durable identity of an order placed by a bot.
///
/// This is the record shape serialized into the bot's settings document
/// (the document format itself belongs to the settings layer). The pair
/// `(exchange, order_id)` is everything needed to find the order again
/// after a restart.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PersistedOrder {
    /// Name of the exchange the order was placed on.
    pub exchange: ExchangeName,
    /// Exchange-assigned order id.
    pub order_id: OrderId,
}

impl PersistedOrder {
    /// Create a persisted order record.
    #[must_use]
    pub const fn new(exchange: ExchangeName, order_id: OrderId) -> Self {
        Self { exchange, order_id }
    }
}

impl fmt::Display for PersistedOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}#{}", self.exchange, self.order_id)
    }
}
