use anyhow::Context;
use shelf_algo::{Recorder, find_all, find_first, find_first_observed, merge_sort, merge_sort_observed};
use shelf_primitives::{Field, Keyed, Value};
use shelf_report::{Report, ReportOptions};

use crate::cli::Command;


/// Name searched for by the demonstration.
pub const DEMO_NAME: &str = "Laptop";
/// Category binary-searched by the demonstration.
pub const DEMO_CATEGORY: &str = "Audio";
/// Category listed in full by the demonstration.
pub const DEMO_ALL_CATEGORY: &str = "Periferal";

/// Runs `command` over `records` and returns the rendered report.
pub fn execute<R: Keyed + Clone>(command: &Command, records: &[R], options: ReportOptions, trace: bool) -> anyhow::Result<String> {
	tracing::debug!(?command, records = records.len(), trace, "executing");

	let mut session = Session {
		report: Report::new(options),
		recorder: Recorder::new(),
		trace,
	};

	match command {
		Command::Demo => session.demo(records)?,
		Command::Sort { by } => {
			session.report.section(&format!("SORTED BY {}", by.to_string().to_uppercase()));
			let sorted = session.sort(records, *by)?;
			session.report.table(&sorted);
		}
		Command::Search { by, value } => {
			let target = Value::parse(*by, value)?;
			session.report.section(&format!("SEARCH BY {} (binary search)", by.to_string().to_uppercase()));
			let sorted = session.sort(records, *by)?;
			session.search(&sorted, *by, &target)?;
		}
		Command::FindAll { by, value, sorted } => {
			let target = Value::parse(*by, value)?;
			session.report.section(&format!("ALL ITEMS BY {} (linear search)", by.to_string().to_uppercase()));
			let scanned = if *sorted { session.sort(records, *by)? } else { records.to_vec() };
			session.find_all(&scanned, *by, &target)?;
		}
	}

	Ok(session.report.finish())
}

struct Session<R> {
	report: Report,
	recorder: Recorder<R>,
	trace: bool,
}

impl<R: Keyed + Clone> Session<R> {
	fn demo(&mut self, records: &[R]) -> anyhow::Result<()> {
		self.report.banner("INVENTORY MANAGEMENT SYSTEM");
		self.report.heading("INITIAL INVENTORY");
		self.report.table(records);

		self.report.section("SORTED BY NAME (A-Z)");
		let by_name = self.sort(records, Field::Name)?;
		self.report.table(&by_name);

		self.report.section("SORTED BY CATEGORY");
		let by_category = self.sort(records, Field::Category)?;
		self.report.table(&by_category);

		self.report.section("SEARCH BY NAME (binary search)");
		self.search(&by_name, Field::Name, &Value::from(DEMO_NAME))?;

		self.report.section("SEARCH BY CATEGORY (binary search)");
		self.search(&by_category, Field::Category, &Value::from(DEMO_CATEGORY))?;

		self.report.section("ALL ITEMS BY CATEGORY (linear search)");
		self.find_all(&by_category, Field::Category, &Value::from(DEMO_ALL_CATEGORY))?;

		self.report.blank().banner("DONE");
		Ok(())
	}

	fn sort(&mut self, records: &[R], field: Field) -> anyhow::Result<Vec<R>> {
		let sorted = if self.trace {
			merge_sort_observed(records, field, &mut self.recorder)
		} else {
			merge_sort(records, field)
		}
		.with_context(|| format!("failed to sort by {field}"))?;

		if self.trace {
			let steps = self.recorder.take_sort_steps();
			self.report.heading(&format!("merge sort by {field}: {} steps", steps.len()));
			self.report.sort_trace(field, &steps);
		}
		Ok(sorted)
	}

	fn search(&mut self, sorted: &[R], field: Field, target: &Value) -> anyhow::Result<()> {
		self.report.searching(field, target);

		let hit = if self.trace {
			find_first_observed(sorted, field, target, &mut self.recorder)
		} else {
			find_first(sorted, field, target)
		}
		.with_context(|| format!("failed to search {field} for '{target}'"))?;

		if self.trace {
			let steps = self.recorder.take_search_steps();
			self.report.search_trace(field, &steps);
		}
		self.report.search_result(field, target, hit.map(|index| (index, &sorted[index])));
		Ok(())
	}

	fn find_all(&mut self, records: &[R], field: Field, target: &Value) -> anyhow::Result<()> {
		self.report.line(format!("Searching for all items with {field} '{target}'...")).blank();
		let hits = find_all(records, field, target).with_context(|| format!("failed to scan {field} for '{target}'"))?;
		self.report.matches(field, target, &hits);
		Ok(())
	}
}
