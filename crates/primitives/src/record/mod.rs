use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::error::{KeyError, Result};
use crate::field::Field;
use crate::key::{Key, Value};


/// Read access to a record's fields by [`Field`].
///
/// This is the only way the sort and search algorithms look at records.
pub trait Keyed {
	/// Returns the key stored under `field`.
	///
	/// # Errors
	///
	/// Returns [`KeyError::MissingField`] if the record has no such field.
	fn key(&self, field: Field) -> Result<Key<'_>>;
}

impl<T: Keyed + ?Sized> Keyed for &T {
	fn key(&self, field: Field) -> Result<Key<'_>> {
		(**self).key(field)
	}
}

/// A strongly typed inventory entry.
///
/// Every field is always present, so key lookup never fails.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Item {
	/// Item name.
	#[serde(alias = "nama")]
	pub name: String,
	/// Item category.
	#[serde(alias = "jenis")]
	pub category: String,
	/// Units on hand.
	#[serde(alias = "stok")]
	pub quantity: i64,
	/// Unit price in whole currency units.
	#[serde(alias = "harga")]
	pub price: i64,
}

impl Item {
	/// Creates an item from its four fields.
	pub fn new(name: impl Into<String>, category: impl Into<String>, quantity: i64, price: i64) -> Self {
		Self {
			name: name.into(),
			category: category.into(),
			quantity,
			price,
		}
	}
}

impl Keyed for Item {
	fn key(&self, field: Field) -> Result<Key<'_>> {
		Ok(match field {
			Field::Name => Key::Text(&self.name),
			Field::Category => Key::Text(&self.category),
			Field::Quantity => Key::Integer(self.quantity),
			Field::Price => Key::Integer(self.price),
		})
	}
}

/// A loosely typed record: an ordered map from field name to [`Value`].
///
/// Fields are looked up by canonical name first, then by dataset alias (see
/// [`Field::names`]). Unknown names are kept and ignored.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Row {
	fields: IndexMap<String, Value>,
}

impl Row {
	/// Creates an empty row.
	pub fn new() -> Self {
		Self::default()
	}

	/// Returns the row with `name` set to `value`.
	pub fn with(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
		self.insert(name, value);
		self
	}

	/// Sets `name` to `value`, returning the previous value.
	pub fn insert(&mut self, name: impl Into<String>, value: impl Into<Value>) -> Option<Value> {
		self.fields.insert(name.into(), value.into())
	}

	/// Returns the raw value stored under `name`.
	pub fn get(&self, name: &str) -> Option<&Value> {
		self.fields.get(name)
	}

	/// Returns the value for `field`, trying its canonical name and then its alias.
	pub fn value(&self, field: Field) -> Option<&Value> {
		field.names().into_iter().find_map(|name| self.fields.get(name))
	}

	/// Number of stored fields, known or not.
	pub fn len(&self) -> usize {
		self.fields.len()
	}

	/// Returns true if the row stores no fields.
	pub fn is_empty(&self) -> bool {
		self.fields.is_empty()
	}
}

impl Keyed for Row {
	fn key(&self, field: Field) -> Result<Key<'_>> {
		self.value(field).map(Value::as_key).ok_or(KeyError::MissingField { field })
	}
}

impl From<Item> for Row {
	fn from(item: Item) -> Self {
		Row::new()
			.with(Field::Name.to_string(), item.name)
			.with(Field::Category.to_string(), item.category)
			.with(Field::Quantity.to_string(), item.quantity)
			.with(Field::Price.to_string(), item.price)
	}
}
