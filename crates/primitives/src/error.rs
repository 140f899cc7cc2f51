//! Error types for key lookup and comparison.

use thiserror::Error;

use crate::field::{Field, Kind};

/// Errors raised while reading or comparing record keys.
///
/// "Not found" is never an error: searches report absence through `Option`
/// or an empty result.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum KeyError {
	/// A record lacks the requested field.
	#[error("record has no field '{field}'")]
	MissingField {
		/// The field that was requested.
		field: Field,
	},

	/// Two values under the same field cannot be ordered against each other.
	#[error("cannot compare {left} with {right} under field '{field}'")]
	Comparison {
		/// The field being compared.
		field: Field,
		/// Rendered left-hand value.
		left: String,
		/// Rendered right-hand value.
		right: String,
	},
}

/// Result type for key operations.
pub type Result<T> = std::result::Result<T, KeyError>;

/// A search target could not be parsed for its field.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid {kind} value for field '{field}': {input:?}")]
pub struct ParseValueError {
	/// The field the value was parsed for.
	pub field: Field,
	/// The kind the field expects.
	pub kind: Kind,
	/// The rejected input.
	pub input: String,
}
