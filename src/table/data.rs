//! Per-player bookkeeping records.
//!
//! Games hang arbitrary values off each seat: a score, a folded flag, a
//! list of claimed suits. [`PlayerData`] stores them as a string-keyed map
//! of [`DataValue`]s so the table never needs to know which game it is
//! hosting. Lookups are typed and total; asking for a missing key or the
//! wrong type answers `None` rather than failing.

use std::borrow::Borrow;
use std::fmt;

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

/// Key for one entry in a player record.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DataKey(String);

impl DataKey {
    /// Create a key from any string-like value.
    #[must_use]
    pub fn new(key: impl Into<String>) -> Self {
        Self(key.into())
    }

    /// The key as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for DataKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

// Lets map lookups take plain `&str` without allocating a key.
impl Borrow<str> for DataKey {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl From<&str> for DataKey {
    fn from(key: &str) -> Self {
        Self(key.to_owned())
    }
}

impl From<String> for DataKey {
    fn from(key: String) -> Self {
        Self(key)
    }
}

/// A single typed value in a player record.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum DataValue {
    /// An integer, e.g. a score or chip count.
    Int(i64),
    /// A flag, e.g. folded or all-in.
    Bool(bool),
    /// A free-form string.
    Text(String),
    /// A list of integers.
    IntList(Vec<i64>),
    /// A list of strings.
    TextList(Vec<String>),
}

impl DataValue {
    /// The value as an integer, if it is one.
    #[must_use]
    pub fn as_int(&self) -> Option<i64> {
        match self {
            Self::Int(v) => Some(*v),
            _ => None,
        }
    }

    /// The value as a flag, if it is one.
    #[must_use]
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(v) => Some(*v),
            _ => None,
        }
    }

    /// The value as text, if it is text.
    #[must_use]
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(v) => Some(v),
            _ => None,
        }
    }

    /// The value as an integer list, if it is one.
    #[must_use]
    pub fn as_int_list(&self) -> Option<&[i64]> {
        match self {
            Self::IntList(v) => Some(v),
            _ => None,
        }
    }

    /// The value as a string list, if it is one.
    #[must_use]
    pub fn as_text_list(&self) -> Option<&[String]> {
        match self {
            Self::TextList(v) => Some(v),
            _ => None,
        }
    }
}

impl From<i64> for DataValue {
    fn from(v: i64) -> Self {
        Self::Int(v)
    }
}

impl From<bool> for DataValue {
    fn from(v: bool) -> Self {
        Self::Bool(v)
    }
}

impl From<&str> for DataValue {
    fn from(v: &str) -> Self {
        Self::Text(v.to_owned())
    }
}

impl From<String> for DataValue {
    fn from(v: String) -> Self {
        Self::Text(v)
    }
}

impl From<Vec<i64>> for DataValue {
    fn from(v: Vec<i64>) -> Self {
        Self::IntList(v)
    }
}

impl From<Vec<String>> for DataValue {
    fn from(v: Vec<String>) -> Self {
        Self::TextList(v)
    }
}

/// The record attached to one player seat.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerData {
    entries: FxHashMap<DataKey, DataValue>,
}

impl PlayerData {
    /// Create an empty record.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style [`set`](Self::set).
    #[must_use]
    pub fn with_entry(mut self, key: impl Into<DataKey>, value: impl Into<DataValue>) -> Self {
        self.set(key, value);
        self
    }

    /// Store `value` under `key`, replacing any previous entry.
    pub fn set(&mut self, key: impl Into<DataKey>, value: impl Into<DataValue>) {
        self.entries.insert(key.into(), value.into());
    }

    /// Look up the value stored under `key`.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&DataValue> {
        self.entries.get(key)
    }

    /// Remove and return the value stored under `key`.
    pub fn remove(&mut self, key: &str) -> Option<DataValue> {
        self.entries.remove(key)
    }

    /// Check whether `key` has an entry.
    #[must_use]
    pub fn contains(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    /// The integer stored under `key`, if any.
    #[must_use]
    pub fn int(&self, key: &str) -> Option<i64> {
        self.get(key).and_then(DataValue::as_int)
    }

    /// The flag stored under `key`; missing or non-flag entries read as
    /// `false`.
    #[must_use]
    pub fn flag(&self, key: &str) -> bool {
        self.get(key).and_then(DataValue::as_bool).unwrap_or(false)
    }

    /// The text stored under `key`, if any.
    #[must_use]
    pub fn text(&self, key: &str) -> Option<&str> {
        self.get(key).and_then(DataValue::as_text)
    }

    /// Iterate over all entries in arbitrary order.
    pub fn iter(&self) -> impl Iterator<Item = (&DataKey, &DataValue)> {
        self.entries.iter()
    }

    /// Number of entries in the record.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check whether the record holds no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_record_is_empty() {
        let data = PlayerData::new();

        assert!(data.is_empty());
        assert_eq!(data.len(), 0);
        assert_eq!(data.get("score"), None);
    }

    #[test]
    fn test_set_and_get_round_trip() {
        let mut data = PlayerData::new();
        data.set("score", 42);
        data.set("folded", true);
        data.set("nickname", "lefty");

        assert_eq!(data.int("score"), Some(42));
        assert!(data.flag("folded"));
        assert_eq!(data.text("nickname"), Some("lefty"));
        assert_eq!(data.len(), 3);
    }

    #[test]
    fn test_set_overwrites() {
        let mut data = PlayerData::new();
        data.set("score", 1);
        data.set("score", 2);

        assert_eq!(data.int("score"), Some(2));
        assert_eq!(data.len(), 1);
    }

    #[test]
    fn test_typed_lookup_rejects_wrong_type() {
        let data = PlayerData::new().with_entry("score", 42);

        assert_eq!(data.int("score"), Some(42));
        assert_eq!(data.text("score"), None);
        assert!(!data.flag("score"));
    }

    #[test]
    fn test_missing_flag_reads_false() {
        let data = PlayerData::new();
        assert!(!data.flag("folded"));
    }

    #[test]
    fn test_remove() {
        let mut data = PlayerData::new().with_entry("score", 7);

        assert_eq!(data.remove("score"), Some(DataValue::Int(7)));
        assert_eq!(data.remove("score"), None);
        assert!(data.is_empty());
    }

    #[test]
    fn test_list_values() {
        let data = PlayerData::new()
            .with_entry("draws", vec![3_i64, 1, 4])
            .with_entry("suits", vec!["spades".to_owned(), "hearts".to_owned()]);

        assert_eq!(
            data.get("draws").and_then(DataValue::as_int_list),
            Some(&[3_i64, 1, 4][..])
        );
        assert_eq!(
            data.get("suits")
                .and_then(DataValue::as_text_list)
                .map(<[String]>::len),
            Some(2)
        );
    }

    #[test]
    fn test_builder_chain() {
        let data = PlayerData::new()
            .with_entry("score", 0)
            .with_entry("folded", false);

        assert!(data.contains("score"));
        assert!(data.contains("folded"));
    }

    #[test]
    fn test_serialization() {
        let data = PlayerData::new()
            .with_entry("score", 42)
            .with_entry("folded", true);

        let json = serde_json::to_string(&data).unwrap();
        let deserialized: PlayerData = serde_json::from_str(&json).unwrap();

        assert_eq!(data, deserialized);
    }
}
