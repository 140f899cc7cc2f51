use std::cmp::Ordering;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{KeyError, ParseValueError, Result};
use crate::field::{Field, Kind};


/// A borrowed key read from a record under some [`Field`].
///
/// Text compares case-sensitively by bytes. Integers and numbers are both
/// numeric and order against each other; text never orders against a
/// number, and NaN orders against nothing.
#[derive(Debug, Clone, Copy)]
pub enum Key<'a> {
	/// Text value.
	Text(&'a str),
	/// Whole number.
	Integer(i64),
	/// Fractional number.
	Number(f64),
}

impl Key<'_> {
	/// Returns the value kind of this key.
	pub fn kind(&self) -> Kind {
		match self {
			Key::Text(_) => Kind::Text,
			Key::Integer(_) => Kind::Integer,
			Key::Number(_) => Kind::Number,
		}
	}

	/// Orders `self` against `other`, failing when they are not mutually orderable.
	pub fn compare(&self, other: &Key<'_>, field: Field) -> Result<Ordering> {
		self.partial_cmp(other).ok_or_else(|| KeyError::Comparison {
			field,
			left: self.describe(),
			right: other.describe(),
		})
	}

	/// Renders the key with its kind, for error messages.
	pub fn describe(&self) -> String {
		match self {
			Key::Text(text) => format!("'{text}' ({})", self.kind()),
			_ => format!("{self} ({})", self.kind()),
		}
	}

	/// Copies the key into an owned [`Value`].
	pub fn to_value(&self) -> Value {
		match *self {
			Key::Text(text) => Value::Text(text.to_owned()),
			Key::Integer(n) => Value::Integer(n),
			Key::Number(n) => Value::Number(n),
		}
	}
}

impl PartialEq for Key<'_> {
	fn eq(&self, other: &Self) -> bool {
		self.partial_cmp(other) == Some(Ordering::Equal)
	}
}

impl PartialOrd for Key<'_> {
	fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
		match (*self, *other) {
			(Key::Text(a), Key::Text(b)) => Some(a.cmp(b)),
			(Key::Integer(a), Key::Integer(b)) => Some(a.cmp(&b)),
			(Key::Number(a), Key::Number(b)) => a.partial_cmp(&b),
			(Key::Integer(a), Key::Number(b)) => cmp_integer_number(a, b),
			(Key::Number(a), Key::Integer(b)) => cmp_integer_number(b, a).map(Ordering::reverse),
			_ => None,
		}
	}
}

/// 2^63, the first `f64` above every `i64`.
const I64_END: f64 = 9_223_372_036_854_775_808.0;

/// Orders an integer against a float exactly, without rounding `a` to `f64`.
fn cmp_integer_number(a: i64, b: f64) -> Option<Ordering> {
	if b.is_nan() {
		return None;
	}
	if b >= I64_END {
		return Some(Ordering::Less);
	}
	if b < -I64_END {
		return Some(Ordering::Greater);
	}
	// `b` is now within i64 range, so its integral part converts exactly.
	match a.cmp(&(b.trunc() as i64)) {
		Ordering::Equal => 0.0_f64.partial_cmp(&b.fract()),
		unequal => Some(unequal),
	}
}

impl fmt::Display for Key<'_> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Key::Text(text) => f.write_str(text),
			Key::Integer(n) => write!(f, "{n}"),
			Key::Number(n) => write!(f, "{n}"),
		}
	}
}

/// An owned field value: a search target or a cell of a [`Row`](crate::Row).
///
/// Serialized untagged, so JSON strings, integers and floats map directly.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Value {
	/// Whole number.
	Integer(i64),
	/// Fractional number.
	Number(f64),
	/// Text value.
	Text(String),
}

impl Value {
	/// Parses user input according to the kind of `field`.
	///
	/// Text is taken verbatim. Numeric fields trim surrounding whitespace;
	/// non-finite numbers are rejected.
	pub fn parse(field: Field, input: &str) -> std::result::Result<Self, ParseValueError> {
		let invalid = || ParseValueError {
			field,
			kind: field.kind(),
			input: input.to_owned(),
		};
		let trimmed = input.trim();

		match field.kind() {
			Kind::Text => Ok(Value::Text(input.to_owned())),
			Kind::Integer => trimmed.parse().map(Value::Integer).map_err(|_| invalid()),
			Kind::Number => {
				if let Ok(n) = trimmed.parse::<i64>() {
					return Ok(Value::Integer(n));
				}
				trimmed
					.parse::<f64>()
					.ok()
					.filter(|n| n.is_finite())
					.map(Value::Number)
					.ok_or_else(invalid)
			}
		}
	}

	/// Borrows the value as a comparable [`Key`].
	pub fn as_key(&self) -> Key<'_> {
		match self {
			Value::Integer(n) => Key::Integer(*n),
			Value::Number(n) => Key::Number(*n),
			Value::Text(text) => Key::Text(text),
		}
	}
}

impl fmt::Display for Value {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		self.as_key().fmt(f)
	}
}

impl From<&str> for Value {
	fn from(text: &str) -> Self {
		Value::Text(text.to_owned())
	}
}

impl From<String> for Value {
	fn from(text: String) -> Self {
		Value::Text(text)
	}
}

impl From<i64> for Value {
	fn from(n: i64) -> Self {
		Value::Integer(n)
	}
}

impl From<f64> for Value {
	fn from(n: f64) -> Self {
		Value::Number(n)
	}
}
