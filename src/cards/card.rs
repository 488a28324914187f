//! Card values.
//!
//! A [`Card`] is an immutable record identifying one playing card. The model
//! does not interpret any of its fields: `symbol` and `seed` are whatever
//! rank/suit tokens the game uses ("A", "spades", "dragon", ...), `id` is a
//! caller-chosen identifier, and `sprite` is an opaque handle a renderer can
//! resolve. Cards with every field defaulted are legal; absent configuration
//! never fails, it falls back to the documented defaults.

use serde::{Deserialize, Serialize};

use crate::core::config::CardConfig;

/// Symbol token for a card whose rank was never configured.
pub const NO_SYMBOL: &str = "nosymbol";

/// Seed token for a card whose suit was never configured.
pub const NO_SEED: &str = "noseed";

/// Caller-chosen card identifier.
///
/// The model compares these but never interprets them. Cards built without
/// an id carry [`CardId::UNKNOWN`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CardId(pub i64);

impl CardId {
    /// Sentinel id for cards constructed without one.
    pub const UNKNOWN: CardId = CardId(-1);

    /// Create a new card id.
    #[must_use]
    pub const fn new(id: i64) -> Self {
        Self(id)
    }

    /// Get the raw id value.
    #[must_use]
    pub const fn raw(self) -> i64 {
        self.0
    }
}

impl From<i64> for CardId {
    fn from(id: i64) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for CardId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Card({})", self.0)
    }
}

/// Opaque handle to an externally managed sprite.
///
/// The model stores and returns these; only a renderer assigns meaning.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SpriteRef(pub u32);

impl SpriteRef {
    /// Create a new sprite reference.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Get the raw handle value.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl std::fmt::Display for SpriteRef {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Sprite({})", self.0)
    }
}

/// A single playing card.
///
/// Value semantics: construct it, pass it around, compare it. There are no
/// mutating methods; combos move whole `Card` values instead.
///
/// ## Example
///
/// ```
/// use cardtable::{Card, CardId};
///
/// let ace = Card::new(CardId::new(1), "A", "spades");
/// assert_eq!(ace.symbol, "A");
///
/// let blank = Card::default();
/// assert_eq!(blank.id, CardId::UNKNOWN);
/// assert_eq!(blank.symbol, "nosymbol");
/// assert_eq!(blank.seed, "noseed");
/// assert!(blank.sprite.is_none());
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Card {
    /// Caller-chosen identifier, [`CardId::UNKNOWN`] when unconfigured.
    pub id: CardId,

    /// Rank token ("A", "7", "joker", ...). [`NO_SYMBOL`] when unconfigured.
    pub symbol: String,

    /// Suit token ("spades", "coins", ...). [`NO_SEED`] when unconfigured.
    pub seed: String,

    /// Opaque renderer handle, if any.
    pub sprite: Option<SpriteRef>,
}

impl Card {
    /// Create a card with the given identity and no sprite.
    #[must_use]
    pub fn new(id: CardId, symbol: impl Into<String>, seed: impl Into<String>) -> Self {
        Self {
            id,
            symbol: symbol.into(),
            seed: seed.into(),
            sprite: None,
        }
    }

    /// Attach a sprite reference (builder pattern).
    #[must_use]
    pub fn with_sprite(mut self, sprite: SpriteRef) -> Self {
        self.sprite = Some(sprite);
        self
    }

    /// Build a card from a configuration record.
    ///
    /// Every absent field takes its default; this never fails.
    #[must_use]
    pub fn from_config(config: &CardConfig) -> Self {
        Self {
            id: config.id.map_or(CardId::UNKNOWN, CardId::new),
            symbol: config.symbol.clone().unwrap_or_else(|| NO_SYMBOL.to_string()),
            seed: config.seed.clone().unwrap_or_else(|| NO_SEED.to_string()),
            sprite: config.sprite,
        }
    }
}

impl Default for Card {
    fn default() -> Self {
        Self::new(CardId::UNKNOWN, NO_SYMBOL, NO_SEED)
    }
}

impl From<&CardConfig> for Card {
    fn from(config: &CardConfig) -> Self {
        Self::from_config(config)
    }
}

impl std::fmt::Display for Card {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}", self.symbol, self.seed)
    }
}
