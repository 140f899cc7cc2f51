//! Console rendering for inventory reports.
//!
//! A [`Report`] accumulates lines into a string: section banners, aligned
//! record tables, search outcomes and step traces. Nothing is printed here;
//! the caller decides where the text goes.

/// Per-cell formatting: plain values and locale-grouped prices.
pub mod cell;
mod trace;

use std::fmt::Write as _;

pub use num_format::Locale;
use shelf_primitives::{Field, Keyed, Value};

#[cfg(test)]
mod tests;

/// Formatting options for a [`Report`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportOptions {
	/// Currency label printed before prices, e.g. `Rp`. Empty for none.
	pub currency: String,
	/// Locale used for digit grouping.
	pub locale: Locale,
	/// Width of `=` rules around headings.
	pub rule_width: usize,
}

impl Default for ReportOptions {
	fn default() -> Self {
		Self {
			currency: "Rp".to_owned(),
			locale: Locale::en,
			rule_width: 60,
		}
	}
}

/// A text report under construction.
#[derive(Debug, Clone, Default)]
pub struct Report {
	options: ReportOptions,
	out: String,
}

impl Report {
	/// Creates an empty report.
	pub fn new(options: ReportOptions) -> Self {
		Self {
			options,
			out: String::new(),
		}
	}

	/// Returns the formatting options.
	pub fn options(&self) -> &ReportOptions {
		&self.options
	}

	/// Appends one line of text.
	pub fn line(&mut self, text: impl AsRef<str>) -> &mut Self {
		self.out.push_str(text.as_ref());
		self.out.push('\n');
		self
	}

	/// Appends an empty line.
	pub fn blank(&mut self) -> &mut Self {
		self.line("")
	}

	/// Appends a full-width `=` rule.
	pub fn rule(&mut self) -> &mut Self {
		let rule = "=".repeat(self.options.rule_width);
		self.line(rule)
	}

	/// Appends `title` framed by rules.
	pub fn banner(&mut self, title: &str) -> &mut Self {
		self.rule().line(title).rule()
	}

	/// Appends a blank line, then `=== title ===`.
	pub fn heading(&mut self, title: &str) -> &mut Self {
		self.blank().line(format!("=== {title} ==="))
	}

	/// Appends a section heading: a blank line, then `=== title ===` framed by rules.
	pub fn section(&mut self, title: &str) -> &mut Self {
		self.blank().banner(&format!("=== {title} ==="))
	}

	/// Appends one aligned row per record.
	pub fn table<R: Keyed>(&mut self, records: &[R]) -> &mut Self {
		for record in records {
			let row = self.row(record);
			self.line(row);
		}
		self
	}

	/// Renders a single table row.
	pub fn row<R: Keyed + ?Sized>(&self, record: &R) -> String {
		format!(
			"{:<12} | Category: {:<12} | Stock: {:>3} | Price: {}",
			cell::plain(record, Field::Name),
			cell::plain(record, Field::Category),
			cell::plain(record, Field::Quantity),
			self.price(record),
		)
	}

	/// Appends the "searching" line for a lookup of `target` under `field`.
	pub fn searching(&mut self, field: Field, target: &Value) -> &mut Self {
		self.line(format!("Searching for {field} '{target}'..."))
	}

	/// Appends the outcome of a single-record search.
	pub fn search_result<R: Keyed>(&mut self, field: Field, target: &Value, hit: Option<(usize, &R)>) -> &mut Self {
		let Some((index, record)) = hit else {
			return self.not_found(field, target);
		};

		let details = [
			format!("  Name     : {}", cell::plain(record, Field::Name)),
			format!("  Category : {}", cell::plain(record, Field::Category)),
			format!("  Stock    : {} units", cell::plain(record, Field::Quantity)),
			format!("  Price    : {}", self.price(record)),
		];
		self.line(format!("✓ FOUND at index {index}"));
		for detail in details {
			self.line(detail);
		}
		self
	}

	/// Appends the outcome of an all-matches search.
	pub fn matches<R: Keyed>(&mut self, field: Field, target: &Value, hits: &[(usize, &R)]) -> &mut Self {
		if hits.is_empty() {
			return self.not_found(field, target);
		}

		let noun = if hits.len() == 1 { "item" } else { "items" };
		self.line(format!("✓ Found {} {noun} with {field} '{target}':", hits.len()));
		self.blank();
		for (index, record) in hits {
			let row = format!(
				"  [{index}] {:<12} | Stock: {:>3} | Price: {}",
				cell::plain(*record, Field::Name),
				cell::plain(*record, Field::Quantity),
				self.price(*record),
			);
			self.line(row);
		}
		self
	}

	/// Appends the "not found" banner.
	pub fn not_found(&mut self, field: Field, target: &Value) -> &mut Self {
		self.line(format!("✗ No item with {field} '{target}'"))
	}

	/// Returns the text accumulated so far.
	pub fn as_str(&self) -> &str {
		&self.out
	}

	/// Consumes the report, returning its text.
	pub fn finish(self) -> String {
		self.out
	}

	fn price<R: Keyed + ?Sized>(&self, record: &R) -> String {
		cell::price(record, &self.options.currency, &self.options.locale)
	}

	fn push_fmt(&mut self, args: std::fmt::Arguments<'_>) {
		// Writing to a String cannot fail.
		let _ = self.out.write_fmt(args);
		self.out.push('\n');
	}
}
