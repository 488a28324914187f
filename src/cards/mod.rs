//! Card data model: cards and the ordered containers they live in.
//!
//! ## Key Types
//!
//! - `Card`: Immutable value record (id, symbol, seed, sprite)
//! - `CardCombo`: Ordered container, index 0 = top
//! - `Deck`: A combo in the draw-pile role
//! - `Hand`: A combo in the held-cards role, with selection by index
//!
//! ## Roles Over Subtypes
//!
//! `Deck` and `Hand` are newtypes around `CardCombo`, not separate
//! containers. They deref to the combo, so every combo operation works
//! on both while the type system keeps the roles apart.

pub mod card;
pub mod combo;
pub mod deck;
pub mod hand;

pub use card::{Card, CardId, SpriteRef, NO_SEED, NO_SYMBOL};
pub use combo::{CardCombo, ComboPosition};
pub use deck::Deck;
pub use hand::Hand;
