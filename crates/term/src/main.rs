//! `textobj`: run one text object command against a file.
//!
//! The key sequence is fed to an [`ObjectSession`] over a [`RopeDocument`]
//! holding the file. A delete prints the edited text (or writes it back with
//! `--in-place`); a select prints the selected text. The exit status is 0
//! only when the command applied.

mod cli;
#[cfg(test)]
mod tests;

use std::io::Write;
use std::process::ExitCode;

use anyhow::{Context, bail};
use clap::Parser;
use cli::Cli;
use textobj_config::Config;
use textobj_editor::{ObjectSession, Operation, Outcome, SessionEvent};
use textobj_input::{KeySymbol, Keymap};
use textobj_primitives::{Document, RopeDocument};
use tracing::debug;

fn main() -> anyhow::Result<ExitCode> {
	let cli = Cli::parse();

	let config = match &cli.config {
		Some(path) => Config::load(path).with_context(|| format!("loading config {}", path.display()))?,
		None => Config::default(),
	};
	setup_tracing(cli.verbose, config.log.filter.as_deref());

	let keymap = config.keymap().context("building keymap")?;
	let mut stdout = std::io::stdout().lock();
	if cli.list {
		list_objects(&keymap, &mut stdout)?;
		return Ok(ExitCode::SUCCESS);
	}
	let applied = run(&cli, keymap, &mut stdout)?;
	Ok(if applied { ExitCode::SUCCESS } else { ExitCode::FAILURE })
}

/// Runs the command described by `cli`, writing results to `out`.
///
/// Returns whether the command applied.
fn run(cli: &Cli, keymap: Keymap, out: &mut impl Write) -> anyhow::Result<bool> {
	let (Some(path), Some(keys)) = (cli.path.as_deref(), cli.keys.as_deref()) else {
		bail!("both PATH and KEYS are required");
	};
	let text = std::fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
	let mut doc = RopeDocument::new(&text).with_cursor(cli.cursor);
	debug!(path = %path.display(), cursor = cli.cursor, keys, "running command");

	let Some(event) = feed_keys(cli.operation(), keymap, keys, &mut doc)? else {
		eprintln!("textobj: incomplete command {keys:?}");
		return Ok(false);
	};

	match event {
		SessionEvent::Finished(Outcome::Applied { operation, range }) => {
			match operation {
				Operation::Select => writeln!(out, "{}", doc.slice_to_string(range))?,
				Operation::Delete if cli.in_place => {
					std::fs::write(path, doc.to_string()).with_context(|| format!("writing {}", path.display()))?;
				}
				Operation::Delete => write!(out, "{doc}")?,
			}
			Ok(true)
		}
		SessionEvent::Finished(Outcome::NoOp) => {
			eprintln!("textobj: no text object at cursor {}", doc.cursor());
			Ok(false)
		}
		SessionEvent::Rejected => {
			eprintln!("textobj: invalid key sequence {keys:?}");
			Ok(false)
		}
		SessionEvent::Cancelled | SessionEvent::Ignored | SessionEvent::Pending { .. } => {
			bail!("session ended unexpectedly with {event:?}")
		}
	}
}

/// Feeds `keys` to a fresh session and returns the event that closed it, or
/// `None` if the keys ran out first.
fn feed_keys(
	operation: Operation,
	keymap: Keymap,
	keys: &str,
	doc: &mut RopeDocument,
) -> anyhow::Result<Option<SessionEvent>> {
	let mut session = ObjectSession::new(operation, keymap);
	for c in keys.chars() {
		let event = session.handle_key(KeySymbol::Char(c), &mut *doc)?;
		if !session.is_open() {
			return Ok(Some(event));
		}
	}
	Ok(None)
}

/// Writes one line per object key: the key, the object name and its description.
fn list_objects(keymap: &Keymap, out: &mut impl Write) -> anyhow::Result<()> {
	for (key, kind) in keymap.objects() {
		let def = kind.def();
		writeln!(out, "{key}  {:<15} {}", def.name, def.description)?;
	}
	Ok(())
}

fn setup_tracing(verbose: bool, configured: Option<&str>) {
	use tracing_subscriber::EnvFilter;

	let filter = if verbose {
		EnvFilter::new("debug")
	} else {
		EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(configured.unwrap_or("warn")))
	};

	tracing_subscriber::fmt()
		.with_env_filter(filter)
		.with_writer(std::io::stderr)
		.with_target(true)
		.init();
}
