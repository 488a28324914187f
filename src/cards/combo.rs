//! Ordered card containers.
//!
//! A [`CardCombo`] is the base container every pile on a table is made of:
//! an ordered sequence of [`Card`] values where index 0 is the **top**.
//! Decks, hands, and played-card groupings all share this one
//! implementation (see [`Deck`](crate::Deck) and [`Hand`](crate::Hand)).
//!
//! All mutating operations keep the sequence compact: removals never
//! leave gaps. Invalid input (an out-of-range index, a card that is not
//! present) leaves the combo untouched and reports `None`. Nothing in
//! this module panics.
//!
//! ## Usage
//!
//! ```
//! use cardtable::{Card, CardCombo, CardId, ComboPosition, TableRng};
//!
//! let mut combo = CardCombo::new();
//!
//! // Default position is the top.
//! combo.add_card(Card::new(CardId::new(1), "A", "spades"), None);
//! combo.add_card(Card::new(CardId::new(2), "K", "spades"), Some(ComboPosition::Bottom));
//!
//! assert_eq!(combo.len(), 2);
//! assert_eq!(combo.top().unwrap().id, CardId::new(1));
//!
//! let mut rng = TableRng::new(7);
//! combo.shuffle(&mut rng);
//! assert_eq!(combo.len(), 2);
//! ```

use serde::{Deserialize, Serialize};

use super::card::Card;
use crate::core::config::ComboConfig;
use crate::core::rng::TableRng;

/// Position for inserting a card into a combo.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ComboPosition {
    /// The front of the sequence (index 0); the default.
    Top,
    /// The back of the sequence.
    Bottom,
    /// A specific index; clamped to the current length, so an oversized
    /// index lands at the bottom.
    Index(usize),
}

/// An ordered, mutable sequence of cards.
///
/// Insertion order is significant and index 0 is the top. The card list is
/// private so every mutation goes through the operations below, which
/// uphold the no-gaps invariant.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardCombo {
    cards: Vec<Card>,
}

impl CardCombo {
    /// Create an empty combo.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a combo from a configuration record.
    ///
    /// Cards are instantiated in config order, first entry on top. An
    /// empty configuration builds an empty combo.
    #[must_use]
    pub fn from_config(config: &ComboConfig) -> Self {
        Self {
            cards: config.cards.iter().map(Card::from_config).collect(),
        }
    }

    /// Insert a card at `position`, shifting later cards toward the bottom.
    ///
    /// `None` means [`ComboPosition::Top`].
    pub fn add_card(&mut self, card: Card, position: Option<ComboPosition>) {
        match position.unwrap_or(ComboPosition::Top) {
            ComboPosition::Top => self.cards.insert(0, card),
            ComboPosition::Bottom => self.cards.push(card),
            ComboPosition::Index(i) => {
                let idx = i.min(self.cards.len());
                self.cards.insert(idx, card);
            }
        }
    }

    /// Remove and return the first card equal to `card`.
    ///
    /// Linear scan, structural equality over every field. Returns `None`
    /// and leaves the combo unchanged when no card matches.
    pub fn remove_card(&mut self, card: &Card) -> Option<Card> {
        let pos = self.cards.iter().position(|c| c == card)?;
        Some(self.cards.remove(pos))
    }

    /// Remove and return the card at `index`.
    ///
    /// Returns `None` and leaves the combo unchanged when `index` is out
    /// of range.
    pub fn remove_at(&mut self, index: usize) -> Option<Card> {
        if index < self.cards.len() {
            Some(self.cards.remove(index))
        } else {
            None
        }
    }

    /// Remove and return the top card.
    ///
    /// Equivalent to `remove_at(0)`; `None` when the combo is empty.
    pub fn pop(&mut self) -> Option<Card> {
        self.remove_at(0)
    }

    /// Peek at the top card without removing it.
    #[must_use]
    pub fn top(&self) -> Option<&Card> {
        self.cards.first()
    }

    /// Peek at the bottom card without removing it.
    #[must_use]
    pub fn bottom(&self) -> Option<&Card> {
        self.cards.last()
    }

    /// Shuffle the combo in place.
    ///
    /// Uniform over all orderings; determinism is the caller's choice via
    /// the seed of the supplied [`TableRng`].
    pub fn shuffle(&mut self, rng: &mut TableRng) {
        rng.shuffle(&mut self.cards);
    }

    /// The cards in order, top first.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Iterate the cards in order, top first.
    pub fn iter(&self) -> impl Iterator<Item = &Card> {
        self.cards.iter()
    }

    /// Number of cards in the combo.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Check whether the combo holds no cards.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Consume the combo, yielding its cards top first.
    #[must_use]
    pub fn into_cards(self) -> Vec<Card> {
        self.cards
    }
}

impl From<Vec<Card>> for CardCombo {
    fn from(cards: Vec<Card>) -> Self {
        Self { cards }
    }
}

impl FromIterator<Card> for CardCombo {
    fn from_iter<I: IntoIterator<Item = Card>>(iter: I) -> Self {
        Self {
            cards: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a CardCombo {
    type Item = &'a Card;
    type IntoIter = std::slice::Iter<'a, Card>;

    fn into_iter(self) -> Self::IntoIter {
        self.cards.iter()
    }
}

impl IntoIterator for CardCombo {
    type Item = Card;
    type IntoIter = std::vec::IntoIter<Card>;

    fn into_iter(self) -> Self::IntoIter {
        self.cards.into_iter()
    }
}
