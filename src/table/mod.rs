//! Session aggregation: the table, its configuration, and player records.

pub mod data;
pub mod session;

pub use data::{DataKey, DataValue, PlayerData};
pub use session::{Table, TableConfig};
