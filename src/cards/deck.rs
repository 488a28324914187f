//! Draw piles.
//!
//! A [`Deck`] is a [`CardCombo`] in the role of a face-down draw pile. It
//! adds no state of its own; the newtype keeps deck and hand parameters
//! from being swapped at compile time while every combo operation stays
//! available through deref.
//!
//! ## Usage
//!
//! ```
//! use cardtable::{Card, CardId, ComboPosition, Deck, TableRng};
//!
//! let mut deck = Deck::new();
//! for id in 0..10 {
//!     deck.add_card(Card::new(CardId::new(id), "A", "spades"), Some(ComboPosition::Bottom));
//! }
//!
//! let mut rng = TableRng::new(3);
//! deck.shuffle(&mut rng);
//!
//! let drawn = deck.pop().unwrap();
//! assert_eq!(deck.len(), 9);
//! assert!(!deck.iter().any(|c| *c == drawn));
//! ```

use std::ops::{Deref, DerefMut};

use serde::{Deserialize, Serialize};

use super::combo::CardCombo;
use crate::core::config::ComboConfig;

/// A draw pile. Drawing is [`CardCombo::pop`]: the top card comes off first.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Deck(CardCombo);

impl Deck {
    /// Create an empty deck.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a deck from a configuration record, first entry on top.
    #[must_use]
    pub fn from_config(config: &ComboConfig) -> Self {
        Self(CardCombo::from_config(config))
    }

    /// Discard the deck role and return the underlying combo.
    #[must_use]
    pub fn into_combo(self) -> CardCombo {
        self.0
    }
}

impl From<CardCombo> for Deck {
    fn from(combo: CardCombo) -> Self {
        Self(combo)
    }
}

impl Deref for Deck {
    type Target = CardCombo;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl DerefMut for Deck {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.0
    }
}
