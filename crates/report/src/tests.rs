use pretty_assertions::assert_eq;
use shelf_algo::{Recorder, find_all, find_first_observed, merge_sort, merge_sort_observed};
use shelf_primitives::{Item, Row, sample};

use super::*;

#[test]
fn table_rows_are_aligned() {
	let mut report = Report::default();
	report.table(&sample::inventory());
	assert_eq!(
		report.as_str(),
		"\
Monitor      | Category: Periferal    | Stock:  10 | Price: Rp 1,500,000
Keyboard     | Category: Periferal    | Stock:  25 | Price: Rp 250,000
Mouse        | Category: Periferal    | Stock:  40 | Price: Rp 150,000
Laptop       | Category: Komputer     | Stock:   5 | Price: Rp 9,000,000
Headset      | Category: Audio        | Stock:  15 | Price: Rp 350,000
"
	);
}

#[test]
fn rows_with_missing_fields_use_placeholder() {
	let report = Report::default();
	let row = Row::new().with("name", "Speaker").with("stok", 3_i64);
	assert_eq!(
		report.row(&row),
		"Speaker      | Category: -            | Stock:   3 | Price: -"
	);
}

#[test]
fn options_change_currency_locale_and_rule() {
	let mut report = Report::new(ReportOptions {
		currency: "EUR".to_owned(),
		locale: Locale::de,
		rule_width: 10,
	});
	report.banner("Stock");
	let laptop = report.row(&Item::new("Laptop", "Komputer", 5, 9_000_000));
	assert_eq!(report.as_str(), "==========\nStock\n==========\n");
	assert!(laptop.ends_with("Price: EUR 9.000.000"));
	assert_eq!(report.options().rule_width, 10);
}

#[test]
fn section_heading() {
	let mut report = Report::new(ReportOptions {
		rule_width: 5,
		..ReportOptions::default()
	});
	report.section("SORTED BY NAME");
	report.heading("INITIAL");
	assert_eq!(report.finish(), "\n=====\n=== SORTED BY NAME ===\n=====\n\n=== INITIAL ===\n");
}

#[test]
fn found_block() {
	let items = merge_sort(&sample::inventory(), Field::Name).unwrap();
	let target = Value::from("Laptop");
	let mut report = Report::default();
	report
		.searching(Field::Name, &target)
		.search_result(Field::Name, &target, Some((2, &items[2])));
	assert_eq!(
		report.as_str(),
		"\
Searching for name 'Laptop'...
✓ FOUND at index 2
  Name     : Laptop
  Category : Komputer
  Stock    : 5 units
  Price    : Rp 9,000,000
"
	);
}

#[test]
fn not_found_banner() {
	let mut report = Report::default();
	report.search_result::<Item>(Field::Category, &Value::from("Jaringan"), None);
	assert_eq!(report.as_str(), "✗ No item with category 'Jaringan'\n");
}

#[test]
fn match_list() {
	let items = merge_sort(&sample::inventory(), Field::Category).unwrap();
	let target = Value::from("Periferal");
	let hits = find_all(&items, Field::Category, &target).unwrap();

	let mut report = Report::default();
	report.matches(Field::Category, &target, &hits);
	assert_eq!(
		report.as_str(),
		"\
✓ Found 3 items with category 'Periferal':

  [2] Monitor      | Stock:  10 | Price: Rp 1,500,000
  [3] Keyboard     | Stock:  25 | Price: Rp 250,000
  [4] Mouse        | Stock:  40 | Price: Rp 150,000
"
	);

	let mut empty = Report::default();
	empty.matches::<Item>(Field::Quantity, &Value::Integer(99), &[]);
	assert_eq!(empty.as_str(), "✗ No item with quantity '99'\n");
}

#[test]
fn sort_trace_lines() {
	let items = vec![
		Item::new("Mouse", "Periferal", 40, 150_000),
		Item::new("Headset", "Audio", 15, 350_000),
	];
	let mut recorder = Recorder::new();
	merge_sort_observed(&items, Field::Quantity, &mut recorder).unwrap();

	let mut report = Report::default();
	report.sort_trace(Field::Quantity, recorder.sort_steps());
	assert_eq!(
		report.as_str(),
		"\
split [Mouse] | [Headset]
compare Mouse (40) with Headset (15) -> take Headset
merged [Headset, Mouse]
"
	);
}

#[test]
fn nested_sort_trace_is_indented() {
	let items: Vec<Item> = sample::inventory().into_iter().take(3).collect();
	let mut recorder = Recorder::new();
	merge_sort_observed(&items, Field::Name, &mut recorder).unwrap();

	let mut report = Report::default();
	report.sort_trace(Field::Name, recorder.sort_steps());
	assert_eq!(
		report.as_str(),
		"\
split [Monitor] | [Keyboard, Mouse]
  split [Keyboard] | [Mouse]
  compare Keyboard (Keyboard) with Mouse (Mouse) -> take Keyboard
  merged [Keyboard, Mouse]
compare Monitor (Monitor) with Keyboard (Keyboard) -> take Keyboard
compare Monitor (Monitor) with Mouse (Mouse) -> take Monitor
merged [Keyboard, Monitor, Mouse]
"
	);
}

#[test]
fn search_trace_lines() {
	let items = merge_sort(&sample::inventory(), Field::Name).unwrap();
	let mut recorder = Recorder::new();
	find_first_observed(&items, Field::Name, &Value::from("Laptop"), &mut recorder).unwrap();
	find_first_observed(&items, Field::Name, &Value::from("Zoom"), &mut recorder).unwrap();

	let mut report = Report::default();
	report.search_trace(Field::Name, recorder.search_steps());
	assert_eq!(
		report.as_str(),
		"\
probe [0..=4] mid 2: Laptop (Laptop)
hit at index 2
probe [0..=4] mid 2: Laptop (Laptop)
probe [3..=4] mid 3: Monitor (Monitor)
probe [4..=4] mid 4: Mouse (Mouse)
range empty, would insert at 5
"
	);
}
