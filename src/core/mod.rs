//! Configuration records and the session RNG.

pub mod config;
pub mod rng;

pub use config::{CardConfig, ComboConfig};
pub use rng::TableRng;
