#![allow(missing_docs)]

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

mod cmd;

#[derive(Parser)]
#[command(name = "polyjson", about = "Inspect polyjson type-tagged documents")]
struct Cli {
	#[command(subcommand)]
	command: Commands,
}

#[derive(Subcommand)]
enum Commands {
	/// List type-tag wrappers with their JSON Pointer paths.
	Tags {
		path: PathBuf,
		/// Only report wrappers with this identifier (repeatable).
		#[arg(long = "ident")]
		idents: Vec<String>,
		#[arg(long)]
		json: bool,
	},
	/// Print the document with type-tag wrappers replaced by their content.
	Strip {
		path: PathBuf,
		/// Only strip wrappers with this identifier (repeatable).
		#[arg(long = "ident")]
		idents: Vec<String>,
		#[arg(long)]
		pretty: bool,
	},
}

fn main() {
	init_tracing();
	if let Err(err) = run() {
		eprintln!("error: {err}");
		std::process::exit(1);
	}
}

fn run() -> polyjson::codec::Result<()> {
	let cli = Cli::parse();

	match cli.command {
		Commands::Tags { path, idents, json } => cmd::tags::run(path, idents, json),
		Commands::Strip { path, idents, pretty } => cmd::strip::run(path, idents, pretty),
	}
}

fn init_tracing() {
	let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
	let _ = tracing_subscriber::fmt()
		.with_env_filter(filter)
		.with_target(false)
		.with_writer(std::io::stderr)
		.try_init();
}
