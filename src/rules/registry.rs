//! Named game rules.
//!
//! A rule is a boolean predicate over some state type `S` of the game's
//! choosing: a single [`Hand`](crate::Hand), the list of played combos,
//! or any other snapshot the game wants to judge.
//! [`Rules`] maps rule names to predicates so game flow can ask questions
//! by name without knowing how they are answered.
//!
//! Checking a name that was never registered is not an error; it is
//! simply `false`, so optional rules cost nothing to probe for.
//!
//! ## Usage
//!
//! ```
//! use cardtable::{Card, CardId, Hand, Rules};
//!
//! let mut rules = Rules::new();
//! rules.add_rule("has_ace", |hand: &Hand| hand.iter().any(|c| c.symbol == "A"));
//!
//! let mut hand = Hand::new();
//! assert!(!rules.check_rule("has_ace", &hand));
//!
//! hand.add_card(Card::new(CardId::new(1), "A", "spades"), None);
//! assert!(rules.check_rule("has_ace", &hand));
//!
//! // Unknown rules are simply false.
//! assert!(!rules.check_rule("flush", &hand));
//! ```

use std::fmt;
use std::sync::Arc;

use rustc_hash::FxHashMap;

/// A shared rule predicate over state type `S`.
pub type RuleFn<S> = Arc<dyn Fn(&S) -> bool + Send + Sync>;

/// A registry of named rule predicates.
///
/// Names are unique; registering a name twice keeps the later predicate.
pub struct Rules<S> {
    rules: FxHashMap<String, RuleFn<S>>,
}

impl<S> Rules<S> {
    /// Create an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `rule` under `name`, replacing any previous predicate
    /// with that name.
    pub fn add_rule(
        &mut self,
        name: impl Into<String>,
        rule: impl Fn(&S) -> bool + Send + Sync + 'static,
    ) {
        self.rules.insert(name.into(), Arc::new(rule));
    }

    /// Builder-style [`add_rule`](Self::add_rule).
    #[must_use]
    pub fn with_rule(
        mut self,
        name: impl Into<String>,
        rule: impl Fn(&S) -> bool + Send + Sync + 'static,
    ) -> Self {
        self.add_rule(name, rule);
        self
    }

    /// Evaluate the rule `name` against `state`.
    ///
    /// Returns `false` when no rule is registered under `name`; use
    /// [`contains`](Self::contains) to tell "absent" from "failed".
    #[must_use]
    pub fn check_rule(&self, name: &str, state: &S) -> bool {
        self.rules.get(name).map_or(false, |rule| rule(state))
    }

    /// Check whether a rule is registered under `name`.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.rules.contains_key(name)
    }

    /// Look up the predicate registered under `name`.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&RuleFn<S>> {
        self.rules.get(name)
    }

    /// Registered rule names, sorted for deterministic iteration.
    #[must_use]
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.rules.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    /// Number of registered rules.
    #[must_use]
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// Check whether the registry holds no rules.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

// Manual impls: predicates are shared via `Arc`, so neither `Clone` nor
// `Default` needs `S` itself to satisfy any bound.
impl<S> Clone for Rules<S> {
    fn clone(&self) -> Self {
        Self {
            rules: self.rules.clone(),
        }
    }
}

impl<S> Default for Rules<S> {
    fn default() -> Self {
        Self {
            rules: FxHashMap::default(),
        }
    }
}

impl<S> fmt::Debug for Rules<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Rules").field("rules", &self.names()).finish()
    }
}
