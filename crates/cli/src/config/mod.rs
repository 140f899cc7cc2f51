//! Configuration loading for the `shelf` binary.
//!
//! Configuration is TOML. Only the `[report]` table exists today:
//!
//! ```toml
//! [report]
//! currency = "Rp"
//! locale = "en"
//! rule_width = 60
//! ```
//!
//! Lookup order: an explicit `--config` path, then
//! `$XDG_CONFIG_HOME/shelf/config.toml` if it exists, then built-in defaults.
//! Command-line flags override whatever the file sets.

use std::path::{Path, PathBuf};

use serde::Deserialize;
use shelf_report::{Locale, ReportOptions};
use thiserror::Error;


/// Errors that can occur when loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
	/// Error parsing TOML syntax or schema.
	#[error("TOML parse error: {0}")]
	Toml(#[from] toml::de::Error),

	/// Error reading a configuration file.
	#[error("I/O error reading {path}: {error}")]
	Io {
		/// Path to the file that failed to read.
		path: PathBuf,
		/// The underlying I/O error.
		error: std::io::Error,
	},

	/// The locale name is not known to the number formatter.
	#[error("unknown locale: {0}")]
	UnknownLocale(String),
}

/// Result type for configuration operations.
pub type Result<T> = std::result::Result<T, ConfigError>;

/// Parsed configuration file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
	/// Report formatting settings.
	pub report: ReportConfig,
}

/// The `[report]` table.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ReportConfig {
	/// Currency label printed before prices.
	pub currency: String,
	/// Locale name for digit grouping.
	pub locale: String,
	/// Width of `=` rules.
	pub rule_width: usize,
}

impl Default for ReportConfig {
	fn default() -> Self {
		let options = ReportOptions::default();
		Self {
			currency: options.currency,
			locale: options.locale.name().to_owned(),
			rule_width: options.rule_width,
		}
	}
}

impl Config {
	/// Parse a TOML string into a [`Config`].
	pub fn parse(input: &str) -> Result<Self> {
		Ok(toml::from_str(input)?)
	}

	/// Load configuration from a file.
	pub fn load(path: impl AsRef<Path>) -> Result<Self> {
		let path = path.as_ref();
		let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
			path: path.to_path_buf(),
			error: e,
		})?;
		Self::parse(&content)
	}

	/// Loads `explicit` if given, else the default config file if it exists,
	/// else the built-in defaults.
	pub fn discover(explicit: Option<&Path>) -> Result<Self> {
		if let Some(path) = explicit {
			tracing::debug!(path = %path.display(), "loading config");
			return Self::load(path);
		}

		match default_path() {
			Some(path) if path.is_file() => {
				tracing::debug!(path = %path.display(), "loading default config");
				Self::load(path)
			}
			_ => Ok(Self::default()),
		}
	}

	/// Resolves the report settings into [`ReportOptions`].
	pub fn report_options(&self) -> Result<ReportOptions> {
		let locale =
			Locale::from_name(&self.report.locale).map_err(|_| ConfigError::UnknownLocale(self.report.locale.clone()))?;
		Ok(ReportOptions {
			currency: self.report.currency.clone(),
			locale,
			rule_width: self.report.rule_width,
		})
	}
}

/// Default config file location, `$XDG_CONFIG_HOME/shelf/config.toml`.
pub fn default_path() -> Option<PathBuf> {
	dirs::config_dir().map(|dir| dir.join("shelf").join("config.toml"))
}
