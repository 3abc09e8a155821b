use std::path::PathBuf;

use clap::Parser;
use textobj_editor::Operation;

#[derive(Parser, Debug)]
#[command(name = "textobj")]
#[command(about = "Delete or select a text object in a file")]
#[command(version)]
/// Command-line arguments.
pub struct Cli {
	/// File to operate on
	#[arg(required_unless_present = "list")]
	pub path: Option<PathBuf>,

	/// Key sequence, one character per key (e.g. "iw", "a(")
	#[arg(required_unless_present = "list")]
	pub keys: Option<String>,

	/// List the object keys and exit
	#[arg(short, long)]
	pub list: bool,

	/// Cursor offset in characters
	#[arg(short, long, default_value_t = 0)]
	pub cursor: usize,

	/// Select instead of delete and print the selected text
	#[arg(short, long)]
	pub select: bool,

	/// Write the edited text back to the file instead of stdout
	#[arg(short, long, conflicts_with = "select")]
	pub in_place: bool,

	/// TOML configuration file
	#[arg(long, value_name = "PATH")]
	pub config: Option<PathBuf>,

	/// Verbose logging
	#[arg(short, long)]
	pub verbose: bool,
}

impl Cli {
	/// The operation the flags ask for.
	pub fn operation(&self) -> Operation {
		if self.select { Operation::Select } else { Operation::Delete }
	}
}
