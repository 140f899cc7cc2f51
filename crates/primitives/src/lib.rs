//! Core types for inventory records: fields, key values, and records.

/// Error types for key lookup and comparison.
pub mod error;
/// Field selectors and their value kinds.
pub mod field;
/// Borrowed and owned key values.
pub mod key;
/// Record types and the [`Keyed`] lookup trait.
pub mod record;
/// The built-in sample inventory.
pub mod sample;

pub use error::{KeyError, ParseValueError, Result};
pub use field::{Field, Kind};
pub use key::{Key, Value};
pub use record::{Item, Keyed, Row};
