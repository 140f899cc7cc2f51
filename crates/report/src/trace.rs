use shelf_algo::{SearchStep, SortStep};
use shelf_primitives::{Field, Keyed};

use crate::{Report, cell};

impl Report {
	/// Appends one line per merge sort step, indented by recursion depth.
	///
	/// Records are labelled by name; comparisons also show their `field` keys.
	pub fn sort_trace<R: Keyed>(&mut self, field: Field, steps: &[SortStep<R>]) -> &mut Self {
		for step in steps {
			match step {
				SortStep::Split { depth, left, right } => {
					self.push_fmt(format_args!("{}split {} | {}", indent(*depth), labels(left), labels(right)));
				}
				SortStep::Compare {
					depth,
					left,
					right,
					took_left,
				} => {
					let taken = if *took_left { left } else { right };
					self.push_fmt(format_args!(
						"{}compare {} ({}) with {} ({}) -> take {}",
						indent(*depth),
						label(left),
						cell::plain(left, field),
						label(right),
						cell::plain(right, field),
						label(taken),
					));
				}
				SortStep::Merged { depth, merged } => {
					self.push_fmt(format_args!("{}merged {}", indent(*depth), labels(merged)));
				}
			}
		}
		self
	}

	/// Appends one line per binary search step.
	pub fn search_trace<R: Keyed>(&mut self, field: Field, steps: &[SearchStep<R>]) -> &mut Self {
		for step in steps {
			match step {
				SearchStep::Probe { low, high, mid, record } => {
					self.push_fmt(format_args!(
						"probe [{low}..={high}] mid {mid}: {} ({})",
						label(record),
						cell::plain(record, field),
					));
				}
				SearchStep::Found { index } => self.push_fmt(format_args!("hit at index {index}")),
				SearchStep::Exhausted { insert_at } => {
					self.push_fmt(format_args!("range empty, would insert at {insert_at}"));
				}
			}
		}
		self
	}
}

fn indent(depth: usize) -> String {
	"  ".repeat(depth)
}

fn label<R: Keyed>(record: &R) -> String {
	cell::plain(record, Field::Name)
}

fn labels<R: Keyed>(records: &[R]) -> String {
	let names: Vec<String> = records.iter().map(label).collect();
	format!("[{}]", names.join(", "))
}
