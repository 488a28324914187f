//! Player hands.
//!
//! A [`Hand`] is a [`CardCombo`] in the role of cards held by a player.
//! Beyond the shared combo operations it adds [`Hand::select`], a
//! read-only lookup of several cards at once: the caller names indices,
//! the hand answers with references, and nothing is removed. Actually
//! playing a card is a separate, explicit [`CardCombo::remove_at`] or
//! [`CardCombo::remove_card`].
//!
//! ## Usage
//!
//! ```
//! use cardtable::{Card, CardId, ComboPosition, Hand};
//!
//! let mut hand = Hand::new();
//! for id in 0..3 {
//!     hand.add_card(Card::new(CardId::new(id), "A", "spades"), Some(ComboPosition::Bottom));
//! }
//!
//! let picked = hand.select(&[2, 0]);
//! assert_eq!(picked.len(), 2);
//! assert_eq!(picked[0].id, CardId::new(2));
//!
//! // Selection is a peek; the hand still holds everything.
//! assert_eq!(hand.len(), 3);
//! ```

use std::ops::{Deref, DerefMut};

use serde::{Deserialize, Serialize};

use super::card::Card;
use super::combo::CardCombo;
use crate::core::config::ComboConfig;

/// Cards held by one player.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Hand(CardCombo);

impl Hand {
    /// Create an empty hand.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a hand from a configuration record, first entry on top.
    #[must_use]
    pub fn from_config(config: &ComboConfig) -> Self {
        Self(CardCombo::from_config(config))
    }

    /// Look up the cards at `indices`, in the order requested.
    ///
    /// Out-of-range indices are skipped, duplicates yield the same card
    /// twice, and the hand is left unchanged. An empty request returns an
    /// empty vec.
    #[must_use]
    pub fn select(&self, indices: &[usize]) -> Vec<&Card> {
        indices
            .iter()
            .filter_map(|&i| self.0.cards().get(i))
            .collect()
    }

    /// Discard the hand role and return the underlying combo.
    #[must_use]
    pub fn into_combo(self) -> CardCombo {
        self.0
    }
}

impl From<CardCombo> for Hand {
    fn from(combo: CardCombo) -> Self {
        Self(combo)
    }
}

impl Deref for Hand {
    type Target = CardCombo;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl DerefMut for Hand {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.0
    }
}
