use std::path::{Path, PathBuf};

use shelf_primitives::Row;
use thiserror::Error;

#[cfg(test)]
mod tests;

/// Errors that can occur when reading an inventory file.
#[derive(Debug, Error)]
pub enum DataError {
	/// Error reading the file.
	#[error("I/O error reading {path}: {error}")]
	Io {
		/// Path to the file that failed to read.
		path: PathBuf,
		/// The underlying I/O error.
		error: std::io::Error,
	},

	/// The file is not a JSON array of objects with string or number values.
	#[error("invalid inventory JSON in {path}: {error}")]
	Json {
		/// Path to the offending file.
		path: PathBuf,
		/// The underlying parse error.
		error: serde_json::Error,
	},
}

/// Parses a JSON array of records.
///
/// Fields are not checked here; a record missing a field only fails once a
/// sort or search asks for that field.
pub fn parse(input: &str) -> serde_json::Result<Vec<Row>> {
	serde_json::from_str(input)
}

/// Reads and parses an inventory file.
pub fn load(path: impl AsRef<Path>) -> Result<Vec<Row>, DataError> {
	let path = path.as_ref();
	let content = std::fs::read_to_string(path).map_err(|error| DataError::Io {
		path: path.to_path_buf(),
		error,
	})?;
	let rows = parse(&content).map_err(|error| DataError::Json {
		path: path.to_path_buf(),
		error,
	})?;
	tracing::info!(path = %path.display(), records = rows.len(), "loaded inventory");
	Ok(rows)
}
