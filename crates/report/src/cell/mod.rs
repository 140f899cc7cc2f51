use num_format::{Locale, ToFormattedString};
use shelf_primitives::{Field, Key, Keyed};


/// Placeholder for a field the record does not have.
pub const MISSING: &str = "-";

/// Renders `field` of `record` as plain text, or [`MISSING`].
pub fn plain<R: Keyed + ?Sized>(record: &R, field: Field) -> String {
	record.key(field).map_or_else(|_| MISSING.to_owned(), |key| key.to_string())
}

/// Renders a numeric key with the locale's digit grouping.
///
/// Fractional numbers are rounded to two decimals; text is returned as is.
pub fn grouped(key: &Key<'_>, locale: &Locale) -> String {
	match *key {
		Key::Integer(n) => n.to_formatted_string(locale),
		Key::Number(n) if n.fract() == 0.0 && n.abs() < i64::MAX as f64 => (n as i64).to_formatted_string(locale),
		Key::Number(n) if n.is_finite() => {
			let cents = (n.abs() * 100.0).round() as i64;
			let sign = if n < 0.0 { locale.minus_sign() } else { "" };
			format!(
				"{sign}{}{}{:02}",
				(cents / 100).to_formatted_string(locale),
				locale.decimal(),
				cents % 100
			)
		}
		_ => key.to_string(),
	}
}

/// Renders the price of `record` as `<currency> <amount>`, or [`MISSING`].
pub fn price<R: Keyed + ?Sized>(record: &R, currency: &str, locale: &Locale) -> String {
	match record.key(Field::Price) {
		Ok(key) if currency.is_empty() => grouped(&key, locale),
		Ok(key) => format!("{currency} {}", grouped(&key, locale)),
		Err(_) => MISSING.to_owned(),
	}
}
