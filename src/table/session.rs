//! Game-session assembly.
//!
//! A [`Table`] is the aggregate root of one session: the draw piles,
//! the hands, each player's played-card combo, the rule registry, the
//! per-player records, and the session RNG, built in one step from a
//! [`TableConfig`]. The table holds state and nothing else; dealing,
//! playing, and rule checking are driven by callers operating on the
//! exposed collections, so the same table can host any game's flow.
//!
//! The lists are independent. Nothing forces one hand per deck or one
//! choice pile per hand; games that want such pairings set their configs
//! up accordingly.
//!
//! ## Usage
//!
//! ```
//! use cardtable::{CardConfig, ComboConfig, Hand, Rules, Table, TableConfig};
//!
//! let deck = ComboConfig::new()
//!     .with_card(CardConfig::new().with_id(1).with_symbol("A").with_seed("spades"))
//!     .with_card(CardConfig::new().with_id(2).with_symbol("K").with_seed("hearts"));
//!
//! let rules = Rules::new().with_rule("has_ace", |hand: &Hand| {
//!     hand.iter().any(|c| c.symbol == "A")
//! });
//!
//! let mut table = Table::new(
//!     TableConfig::new()
//!         .with_deck(deck)
//!         .with_hand(ComboConfig::new())
//!         .with_rules(rules)
//!         .with_seed(42),
//! );
//!
//! // Draw the top card into the first hand.
//! let card = table.decks[0].pop().unwrap();
//! table.hands[0].add_card(card, None);
//! assert!(table.rules.check_rule("has_ace", &table.hands[0]));
//!
//! // Shuffle what is left using the table's own RNG.
//! table.decks[0].shuffle(&mut table.rng);
//! assert_eq!(table.decks[0].len(), 1);
//! ```

use std::fmt;

use crate::cards::combo::CardCombo;
use crate::cards::deck::Deck;
use crate::cards::hand::Hand;
use crate::core::config::ComboConfig;
use crate::core::rng::TableRng;
use crate::rules::registry::Rules;
use crate::table::data::PlayerData;

/// Everything needed to assemble a [`Table`].
///
/// All parts are optional; the default config builds an empty table with
/// an entropy-seeded RNG. `S` is the state type the rule predicates
/// judge, chosen by the game.
pub struct TableConfig<S> {
    /// One entry per draw pile, in table order.
    pub decks: Vec<ComboConfig>,
    /// One entry per hand, in seat order.
    pub hands: Vec<ComboConfig>,
    /// One entry per played-card combo, in seat order.
    pub player_choices: Vec<ComboConfig>,
    /// The rule registry the session starts with.
    pub rules: Rules<S>,
    /// Per-player records, passed through untouched.
    pub player_data: Vec<PlayerData>,
    /// Seed for the session RNG; `None` draws one from OS entropy.
    pub seed: Option<u64>,
}

impl<S> TableConfig<S> {
    /// Create an empty configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add one deck configuration.
    #[must_use]
    pub fn with_deck(mut self, deck: ComboConfig) -> Self {
        self.decks.push(deck);
        self
    }

    /// Add several deck configurations in order.
    #[must_use]
    pub fn with_decks(mut self, decks: impl IntoIterator<Item = ComboConfig>) -> Self {
        self.decks.extend(decks);
        self
    }

    /// Add one hand configuration.
    #[must_use]
    pub fn with_hand(mut self, hand: ComboConfig) -> Self {
        self.hands.push(hand);
        self
    }

    /// Add several hand configurations in order.
    #[must_use]
    pub fn with_hands(mut self, hands: impl IntoIterator<Item = ComboConfig>) -> Self {
        self.hands.extend(hands);
        self
    }

    /// Add one played-card combo configuration.
    #[must_use]
    pub fn with_player_choice(mut self, choice: ComboConfig) -> Self {
        self.player_choices.push(choice);
        self
    }

    /// Replace the rule registry.
    #[must_use]
    pub fn with_rules(mut self, rules: Rules<S>) -> Self {
        self.rules = rules;
        self
    }

    /// Register a single rule on the config's registry.
    #[must_use]
    pub fn with_rule(
        mut self,
        name: impl Into<String>,
        rule: impl Fn(&S) -> bool + Send + Sync + 'static,
    ) -> Self {
        self.rules.add_rule(name, rule);
        self
    }

    /// Add one player record.
    #[must_use]
    pub fn with_player_data(mut self, data: PlayerData) -> Self {
        self.player_data.push(data);
        self
    }

    /// Fix the session RNG seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }
}

// Manual impls so `S` stays free of bounds; only the predicate registry
// mentions it, and that is behind `Arc`.
impl<S> Default for TableConfig<S> {
    fn default() -> Self {
        Self {
            decks: Vec::new(),
            hands: Vec::new(),
            player_choices: Vec::new(),
            rules: Rules::default(),
            player_data: Vec::new(),
            seed: None,
        }
    }
}

impl<S> Clone for TableConfig<S> {
    fn clone(&self) -> Self {
        Self {
            decks: self.decks.clone(),
            hands: self.hands.clone(),
            player_choices: self.player_choices.clone(),
            rules: self.rules.clone(),
            player_data: self.player_data.clone(),
            seed: self.seed,
        }
    }
}

impl<S> fmt::Debug for TableConfig<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TableConfig")
            .field("decks", &self.decks)
            .field("hands", &self.hands)
            .field("player_choices", &self.player_choices)
            .field("rules", &self.rules)
            .field("player_data", &self.player_data)
            .field("seed", &self.seed)
            .finish()
    }
}

/// One live game session.
///
/// Fields are public: the table is a snapshot of state, and gameplay is
/// whatever callers do with it. See the module docs for a worked example.
pub struct Table<S> {
    /// Draw piles, in config order.
    pub decks: Vec<Deck>,
    /// Player hands, in config order.
    pub hands: Vec<Hand>,
    /// Played-card combos, in config order.
    pub player_choices: Vec<CardCombo>,
    /// The session's rule registry.
    pub rules: Rules<S>,
    /// Per-player records, as configured.
    pub player_data: Vec<PlayerData>,
    /// The session RNG; pass it to [`CardCombo::shuffle`] for
    /// replayable shuffles.
    pub rng: TableRng,
}

impl<S> Table<S> {
    /// Assemble a table from `config`.
    ///
    /// Each configured list is instantiated in order; absent lists come
    /// out empty. Rules and player records are taken verbatim.
    #[must_use]
    pub fn new(config: TableConfig<S>) -> Self {
        let rng = match config.seed {
            Some(seed) => TableRng::new(seed),
            None => TableRng::from_entropy(),
        };

        Self {
            decks: config.decks.iter().map(Deck::from_config).collect(),
            hands: config.hands.iter().map(Hand::from_config).collect(),
            player_choices: config
                .player_choices
                .iter()
                .map(CardCombo::from_config)
                .collect(),
            rules: config.rules,
            player_data: config.player_data,
            rng,
        }
    }
}

impl<S> Clone for Table<S> {
    fn clone(&self) -> Self {
        Self {
            decks: self.decks.clone(),
            hands: self.hands.clone(),
            player_choices: self.player_choices.clone(),
            rules: self.rules.clone(),
            player_data: self.player_data.clone(),
            rng: self.rng.clone(),
        }
    }
}

impl<S> fmt::Debug for Table<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Table")
            .field("decks", &self.decks)
            .field("hands", &self.hands)
            .field("player_choices", &self.player_choices)
            .field("rules", &self.rules)
            .field("player_data", &self.player_data)
            .field("rng", &self.rng)
            .finish()
    }
}

impl<S> From<TableConfig<S>> for Table<S> {
    fn from(config: TableConfig<S>) -> Self {
        Self::new(config)
    }
}
