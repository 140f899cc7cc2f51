use std::io::Write;

use shelf_primitives::{Field, Key, Keyed};

use super::*;

#[test]
fn parse_mixed_field_names() {
	let rows = parse(
		r#"[
			{"name": "Router", "category": "Jaringan", "quantity": 7, "price": 450000},
			{"nama": "SSD", "jenis": "Penyimpanan", "stok": 12, "harga": 899999.5}
		]"#,
	)
	.unwrap();

	assert_eq!(rows.len(), 2);
	assert_eq!(rows[0].key(Field::Category), Ok(Key::Text("Jaringan")));
	assert_eq!(rows[1].key(Field::Name), Ok(Key::Text("SSD")));
	assert_eq!(rows[1].key(Field::Price), Ok(Key::Number(899_999.5)));
}

#[test]
fn parse_allows_missing_fields() {
	let rows = parse(r#"[{"name": "Cable"}]"#).unwrap();
	assert!(rows[0].key(Field::Quantity).is_err());
}

#[test]
fn parse_rejects_non_arrays_and_nested_values() {
	assert!(parse(r#"{"name": "Cable"}"#).is_err());
	assert!(parse(r#"[{"name": ["Cable"]}]"#).is_err());
	assert!(parse(r#"[{"name": null}]"#).is_err());
}

#[test]
fn load_reads_file() {
	let mut file = tempfile::NamedTempFile::new().unwrap();
	write!(file, r#"[{{"name": "Webcam", "category": "Periferal", "quantity": 9, "price": 420000}}]"#).unwrap();

	let rows = load(file.path()).unwrap();
	assert_eq!(rows.len(), 1);
	assert_eq!(rows[0].key(Field::Quantity), Ok(Key::Integer(9)));
}

#[test]
fn load_errors_name_the_file() {
	let dir = tempfile::tempdir().unwrap();
	let missing = dir.path().join("stock.json");
	let err = load(&missing).unwrap_err();
	assert!(matches!(err, DataError::Io { .. }));
	assert!(err.to_string().contains("stock.json"));

	let broken = dir.path().join("broken.json");
	std::fs::write(&broken, "[{").unwrap();
	assert!(matches!(load(&broken), Err(DataError::Json { .. })));
}
