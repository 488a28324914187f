//! Construction-time configuration records.
//!
//! Tables, combos, and cards are built from these plain-data records.
//! Every field is optional: presence is expressed with `Option` (or an
//! empty list), never with sentinel "falsy" values, so an explicit zero is
//! always distinguishable from "not provided". Absent fields take the
//! defaults documented on the built type; malformed values cannot be
//! expressed.
//!
//! The records are serde-friendly so deck and hand layouts can be loaded
//! from files or wire payloads. Rule predicates are code, not data, and are
//! attached separately (see `rules`).

use serde::{Deserialize, Serialize};

use crate::cards::card::SpriteRef;

/// Configuration for a single [`Card`](crate::Card).
///
/// ## Example
///
/// ```
/// use cardtable::{Card, CardConfig, CardId};
///
/// let config = CardConfig::new().with_id(7).with_symbol("A").with_seed("spades");
/// let card = Card::from_config(&config);
///
/// assert_eq!(card.id, CardId::new(7));
/// ```
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct CardConfig {
    /// Card identifier; absent means [`CardId::UNKNOWN`](crate::CardId::UNKNOWN).
    pub id: Option<i64>,

    /// Rank token; absent means [`NO_SYMBOL`](crate::NO_SYMBOL).
    pub symbol: Option<String>,

    /// Suit token; absent means [`NO_SEED`](crate::NO_SEED).
    pub seed: Option<String>,

    /// Opaque sprite handle; absent means no sprite.
    pub sprite: Option<SpriteRef>,
}

impl CardConfig {
    /// Create an empty configuration (all fields absent).
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the card id.
    #[must_use]
    pub fn with_id(mut self, id: i64) -> Self {
        self.id = Some(id);
        self
    }

    /// Set the rank token.
    #[must_use]
    pub fn with_symbol(mut self, symbol: impl Into<String>) -> Self {
        self.symbol = Some(symbol.into());
        self
    }

    /// Set the suit token.
    #[must_use]
    pub fn with_seed(mut self, seed: impl Into<String>) -> Self {
        self.seed = Some(seed.into());
        self
    }

    /// Set the sprite handle.
    #[must_use]
    pub fn with_sprite(mut self, sprite: SpriteRef) -> Self {
        self.sprite = Some(sprite);
        self
    }
}

/// Configuration for an ordered card container (combo, deck, or hand).
///
/// Cards are instantiated in list order; an absent or empty list builds an
/// empty container.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ComboConfig {
    /// Card configurations, top of the combo first.
    #[serde(default)]
    pub cards: Vec<CardConfig>,
}

impl ComboConfig {
    /// Create an empty configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append one card configuration.
    #[must_use]
    pub fn with_card(mut self, card: CardConfig) -> Self {
        self.cards.push(card);
        self
    }

    /// Append card configurations in order.
    #[must_use]
    pub fn with_cards(mut self, cards: impl IntoIterator<Item = CardConfig>) -> Self {
        self.cards.extend(cards);
        self
    }
}
