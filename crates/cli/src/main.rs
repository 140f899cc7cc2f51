//! Shelf command-line binary.
//!
//! Sorts and searches an inventory, either the built-in sample or a JSON
//! file, and prints a plain-text report to stdout. Logs go to stderr.

mod cli;
mod config;
mod data;
mod run;

use anyhow::Context;
use clap::Parser;
use cli::Cli;
use config::Config;
use shelf_primitives::sample;
use tracing::info;

fn main() -> anyhow::Result<()> {
	let cli = Cli::parse();
	setup_tracing(cli.verbose);

	let mut config = Config::discover(cli.config.as_deref()).context("failed to load config")?;
	cli.apply_overrides(&mut config);
	let options = config.report_options()?;

	let command = cli.action();
	let out = match &cli.data {
		Some(path) => {
			let rows = data::load(path)?;
			run::execute(&command, &rows, options, cli.trace)?
		}
		None => {
			info!("using built-in sample inventory");
			run::execute(&command, &sample::inventory(), options, cli.trace)?
		}
	};

	print!("{out}");
	Ok(())
}

fn setup_tracing(verbose: bool) {
	use tracing_subscriber::EnvFilter;
	use tracing_subscriber::prelude::*;

	let filter = EnvFilter::try_from_env("SHELF_LOG").unwrap_or_else(|_| {
		if verbose {
			EnvFilter::new("shelf_cli=debug,shelf_algo=debug,shelf_report=debug,shelf_primitives=debug,info")
		} else {
			EnvFilter::new("warn")
		}
	});

	let stderr_layer = tracing_subscriber::fmt::layer()
		.with_writer(std::io::stderr)
		.with_target(verbose);

	tracing_subscriber::registry().with(filter).with(stderr_layer).init();
}
