//! # cardtable
//!
//! A game-agnostic card-table data model: cards, ordered combos, decks,
//! hands, named rules, and the table that binds them into one session.
//!
//! ## Design Principles
//!
//! 1. **Game-Agnostic**: No hardcoded ranks, suits, or deck sizes.
//!    Symbols and seeds are opaque strings; tables are assembled from
//!    configuration.
//!
//! 2. **Callers Drive Play**: A `Table` holds state and nothing else.
//!    Drawing, dealing, playing, and rule checking are loops the
//!    embedding game writes against the exposed collections.
//!
//! 3. **Deterministic When Asked**: Every shuffle goes through an owned,
//!    seedable RNG, so a whole session replays from one seed.
//!
//! 4. **Total Operations**: Invalid input (absent card, out-of-range
//!    index, unknown rule name) answers `None` or `false` without
//!    mutating anything. Nothing in the crate panics.
//!
//! ## Modules
//!
//! - `core`: configuration records and the session RNG
//! - `cards`: `Card` and the ordered containers (`CardCombo`, `Deck`, `Hand`)
//! - `rules`: named boolean predicates over caller-chosen state
//! - `table`: the session aggregate and per-player records

pub mod core;
pub mod cards;
pub mod rules;
pub mod table;

// Re-export commonly used types
pub use crate::core::{CardConfig, ComboConfig, TableRng};

pub use crate::cards::{
    Card, CardCombo, CardId, ComboPosition, Deck, Hand, SpriteRef, NO_SEED, NO_SYMBOL,
};

pub use crate::rules::{RuleFn, Rules};

pub use crate::table::{DataKey, DataValue, PlayerData, Table, TableConfig};
