//! In-memory exchange adapters.

mod in_memory;

pub use in_memory::{InMemoryExchange, InMemoryMarket};
