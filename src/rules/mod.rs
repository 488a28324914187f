//! Named boolean predicates over caller-chosen game state.

pub mod registry;

pub use registry::{RuleFn, Rules};
