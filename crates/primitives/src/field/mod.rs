use strum::{Display, EnumString, IntoStaticStr};


/// Selects which record field acts as the sort or search key.
///
/// Parsing is ASCII case-insensitive and also accepts the field names used
/// by the Indonesian source dataset (`nama`, `jenis`, `stok`, `harga`).
#[derive(Debug, Display, EnumString, IntoStaticStr, Clone, Copy, PartialEq, Eq, Hash)]
#[strum(ascii_case_insensitive)]
pub enum Field {
	/// Item name (text).
	#[strum(to_string = "name", serialize = "nama")]
	Name,
	/// Item category (text).
	#[strum(to_string = "category", serialize = "jenis")]
	Category,
	/// Units on hand (integer).
	#[strum(to_string = "quantity", serialize = "stok")]
	Quantity,
	/// Unit price in whole currency units (numeric).
	#[strum(to_string = "price", serialize = "harga")]
	Price,
}

impl Field {
	/// Every field, in report column order.
	pub const ALL: [Field; 4] = [Field::Name, Field::Category, Field::Quantity, Field::Price];

	/// Returns the kind of value stored under this field.
	pub const fn kind(self) -> Kind {
		match self {
			Field::Name | Field::Category => Kind::Text,
			Field::Quantity => Kind::Integer,
			Field::Price => Kind::Number,
		}
	}

	/// Returns the canonical name followed by its dataset alias.
	///
	/// Dynamic rows are looked up by these names in order.
	pub const fn names(self) -> [&'static str; 2] {
		match self {
			Field::Name => ["name", "nama"],
			Field::Category => ["category", "jenis"],
			Field::Quantity => ["quantity", "stok"],
			Field::Price => ["price", "harga"],
		}
	}
}

/// Value kind of a field.
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, Hash)]
#[strum(serialize_all = "lowercase")]
pub enum Kind {
	/// Case-sensitive text.
	Text,
	/// Whole number.
	Integer,
	/// Any number, whole or fractional.
	Number,
}
