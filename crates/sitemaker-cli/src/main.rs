//! Sitemaker CLI
//!
//! Compiles briefs, renders standalone previews and exercises actions from
//! the command line.
//!
//! ## Usage
//!
//! ```bash
//! sitemaker default-brief > brief.json
//! sitemaker compile --brief brief.json --prompt "law firm named Harbor & Sage"
//! sitemaker render --brief brief.json --patch dark.json --out site.html
//! sitemaker interpret "a playful gym with lots of motion"
//! sitemaker dispatch select-plan --param plan-name=Growth
//! ```

mod input;

use std::collections::BTreeMap;
use std::fs;
use std::path::PathBuf;
use std::process;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::Colorize;
use serde_json::json;
use sitemaker::{Brief, DispatchOutcome, MakerStore, Settings, compile, export_options, interpret};
use tracing_subscriber::EnvFilter;

use crate::input::{BriefInput, parse_param};

#[derive(Parser)]
#[command(name = "sitemaker")]
#[command(about = "Marketing site preview builder", long_about = None)]
#[command(version)]
struct Cli {
	#[command(subcommand)]
	command: Commands,

	/// Settings file (TOML)
	#[arg(long, global = true, value_name = "FILE")]
	config: Option<PathBuf>,

	/// Verbosity level (can be repeated)
	#[arg(short, long, global = true, action = clap::ArgAction::Count)]
	verbosity: u8,
}

#[derive(Subcommand)]
enum Commands {
	/// Print the default brief
	DefaultBrief,

	/// Print the Site DSL compiled from a brief
	Compile {
		#[command(flatten)]
		input: BriefInput,
	},

	/// Render a standalone HTML document
	Render {
		#[command(flatten)]
		input: BriefInput,

		/// Write the document here instead of stdout
		#[arg(long, value_name = "FILE")]
		out: Option<PathBuf>,
	},

	/// Print the patch a free-text description produces
	Interpret {
		/// Business description
		#[arg(value_name = "TEXT")]
		text: String,
	},

	/// Run an action against a fresh preview and print the UI state
	Dispatch {
		/// Action name, e.g. select-plan
		#[arg(value_name = "ACTION")]
		action: String,

		/// Action parameter as key=value (can be repeated)
		#[arg(long = "param", value_name = "KEY=VALUE")]
		params: Vec<String>,
	},
}

#[tokio::main]
async fn main() {
	let cli = Cli::parse();

	if let Err(e) = run(cli).await {
		eprintln!("{} {:#}", "Error:".red().bold(), e);
		process::exit(1);
	}
}

async fn run(cli: Cli) -> Result<()> {
	let settings = Settings::load(cli.config.as_deref()).context("failed to load settings")?;
	init_tracing(&settings, cli.verbosity);

	match cli.command {
		Commands::DefaultBrief => print_json(&Brief::default()),
		Commands::Compile { input } => {
			let brief = input.resolve(settings.brief_path.as_deref())?;
			print_json(&compile(&brief))
		}
		Commands::Render { input, out } => {
			let brief = input.resolve(settings.brief_path.as_deref())?;
			let store = MakerStore::with_brief(brief).with_export_options(export_options(&settings));
			let bundle = store.export()?;
			match out {
				Some(path) => {
					fs::write(&path, &bundle.html)
						.with_context(|| format!("failed to write {}", path.display()))?;
					eprintln!("{} {}", "Wrote".green(), path.display());
				}
				None => println!("{}", bundle.html),
			}
			Ok(())
		}
		Commands::Interpret { text } => {
			let patch = interpret(&text).map(|patch| patch.into_value());
			print_json(&patch)
		}
		Commands::Dispatch { action, params } => {
			let params = params
				.iter()
				.map(String::as_str)
				.map(parse_param)
				.collect::<Result<BTreeMap<_, _>>>()?;
			let store = MakerStore::from_settings(&settings);
			let outcome = store.dispatch(&action, &params).await;
			print_json(&json!({
				"outcome": outcome_label(&outcome),
				"ui": store.ui().snapshot(),
			}))
		}
	}
}

/// `RUST_LOG` wins, then `-v`/`-vv`, then the settings' filter.
fn init_tracing(settings: &Settings, verbosity: u8) {
	let fallback = match verbosity {
		0 => settings.log_filter.clone(),
		1 => "debug".to_string(),
		_ => "trace".to_string(),
	};
	let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback));

	tracing_subscriber::fmt()
		.with_env_filter(filter)
		.with_writer(std::io::stderr)
		.init();
}

fn print_json<T: serde::Serialize + ?Sized>(value: &T) -> Result<()> {
	println!("{}", serde_json::to_string_pretty(value)?);
	Ok(())
}

fn outcome_label(outcome: &DispatchOutcome) -> String {
	match outcome {
		DispatchOutcome::Handled => "handled".to_string(),
		DispatchOutcome::Unknown => "unknown".to_string(),
		DispatchOutcome::NoAction => "no-action".to_string(),
		DispatchOutcome::Failed(err) => format!("failed: {err}"),
	}
}
