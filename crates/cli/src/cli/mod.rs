use std::path::PathBuf;

use clap::{Parser, Subcommand};
use shelf_primitives::Field;

use crate::config::Config;


#[derive(Parser, Debug)]
#[command(name = "shelf")]
#[command(about = "Sort and search a small inventory with merge sort, binary search and linear search")]
#[command(version)]
/// Command-line arguments.
pub struct Cli {
	/// JSON file holding an array of inventory records (built-in sample if omitted)
	#[arg(long, short = 'd', value_name = "PATH", global = true)]
	pub data: Option<PathBuf>,

	/// Config file (defaults to $XDG_CONFIG_HOME/shelf/config.toml when present)
	#[arg(long, short = 'c', value_name = "PATH", global = true)]
	pub config: Option<PathBuf>,

	/// Locale for digit grouping in prices (e.g., en, de, id)
	#[arg(long, global = true)]
	pub locale: Option<String>,

	/// Currency label printed before prices
	#[arg(long, global = true)]
	pub currency: Option<String>,

	/// Print every split, comparison and probe
	#[arg(long, global = true)]
	pub trace: bool,

	/// Verbose logging
	#[arg(short, long, global = true)]
	pub verbose: bool,

	/// Subcommand to execute (runs the demonstration if omitted).
	#[command(subcommand)]
	pub command: Option<Command>,
}

impl Cli {
	/// Returns the subcommand, defaulting to [`Command::Demo`].
	pub fn action(&self) -> Command {
		self.command.clone().unwrap_or(Command::Demo)
	}

	/// Applies command-line overrides on top of file configuration.
	pub fn apply_overrides(&self, config: &mut Config) {
		if let Some(locale) = &self.locale {
			config.report.locale.clone_from(locale);
		}
		if let Some(currency) = &self.currency {
			config.report.currency.clone_from(currency);
		}
	}
}

/// Available subcommands.
#[derive(Subcommand, Debug, Clone, PartialEq)]
pub enum Command {
	/// Run the full demonstration: two sorts, two binary searches and a linear search
	Demo,
	/// Print the inventory sorted by a field
	Sort {
		/// Field to sort by (name, category, quantity, price)
		#[arg(long, short = 'b', default_value = "name")]
		by: Field,
	},
	/// Sort by a field, then binary search it for a value
	Search {
		/// Field to sort and search by
		#[arg(long, short = 'b', default_value = "name")]
		by: Field,
		/// Value to look for, parsed according to the field
		value: String,
	},
	/// List every record whose field equals a value
	FindAll {
		/// Field to compare
		#[arg(long, short = 'b', default_value = "category")]
		by: Field,
		/// Value to look for, parsed according to the field
		value: String,
		/// Scan the inventory sorted by the same field instead of its original order
		#[arg(long)]
		sorted: bool,
	},
}
