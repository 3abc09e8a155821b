//! Headless state for one interactive text object command.

use textobj_input::{CommandParser, KeySymbol, Keymap, ParseResult};
use textobj_primitives::{DocumentMut, EditError};
use tracing::debug;

use crate::dispatch::{self, Operation, Outcome};

/// What a session did with one key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionEvent {
	/// The key was not for the session: a bare modifier press, or any key
	/// after the session closed.
	Ignored,
	/// The user cancelled. The session is closed and nothing was changed.
	Cancelled,
	/// The key was accepted and more are needed.
	Pending {
		/// Label of the accepted key, also appended to [`ObjectSession::parts`].
		label: &'static str,
	},
	/// The key does not fit the grammar. The session is closed.
	Rejected,
	/// The command completed and was dispatched. The session is closed.
	Finished(Outcome),
}

/// One operation waiting for its text object keys.
///
/// A shell opens a session when the user triggers an operation, forwards every
/// key press to [`handle_key`] and shows [`parts`] and [`help_text`] while
/// [`is_open`] holds.
///
/// [`handle_key`]: ObjectSession::handle_key
/// [`parts`]: ObjectSession::parts
/// [`help_text`]: ObjectSession::help_text
/// [`is_open`]: ObjectSession::is_open
#[derive(Debug, Clone)]
pub struct ObjectSession {
	operation: Operation,
	parser: CommandParser,
	parts: Vec<&'static str>,
	open: bool,
}

impl ObjectSession {
	/// Opens a session for `operation` reading keys through `keymap`.
	pub fn new(operation: Operation, keymap: Keymap) -> Self {
		debug!(?operation, "session opened");
		Self {
			operation,
			parser: CommandParser::with_keymap(keymap),
			parts: vec![operation.label()],
			open: true,
		}
	}

	/// Returns the operation this session performs.
	pub fn operation(&self) -> Operation {
		self.operation
	}

	/// Returns true until the session cancels, rejects a key, or finishes.
	pub fn is_open(&self) -> bool {
		self.open
	}

	/// Returns the operation label followed by the label of every accepted key.
	pub fn parts(&self) -> &[&'static str] {
		&self.parts
	}

	/// Returns the two help lines listing modifier and object labels.
	pub fn help_text(&self) -> String {
		let keymap = self.parser.keymap();
		let modifiers = distinct(keymap.modifiers().map(|(_, m)| m.label()));
		let objects = distinct(keymap.objects().map(|(_, k)| k.def().label));
		format!("1. modifier: {}\n2. object: {}", modifiers.join(" | "), objects.join(" | "))
	}

	/// Feeds one key press. On completion the operation runs against `doc`
	/// at its cursor.
	///
	/// The session closes on every outcome except [`SessionEvent::Pending`] and
	/// [`SessionEvent::Ignored`], including when `doc` reports an error.
	pub fn handle_key(&mut self, key: KeySymbol, doc: &mut dyn DocumentMut) -> Result<SessionEvent, EditError> {
		if !self.open || key.is_modifier_key() {
			return Ok(SessionEvent::Ignored);
		}
		if key.is_escape() {
			self.parser.reset();
			self.close("cancelled");
			return Ok(SessionEvent::Cancelled);
		}

		match self.parser.feed(&key) {
			ParseResult::Continuing { label } => {
				self.parts.push(label);
				Ok(SessionEvent::Pending { label })
			}
			ParseResult::Rejected => {
				self.close("rejected");
				Ok(SessionEvent::Rejected)
			}
			ParseResult::Completed { label, request } => {
				self.parts.push(label);
				self.close("completed");
				dispatch::apply_at_cursor(self.operation, request, doc).map(SessionEvent::Finished)
			}
		}
	}

	fn close(&mut self, reason: &'static str) {
		self.open = false;
		debug!(operation = ?self.operation, parts = ?self.parts, reason, "session closed");
	}
}

fn distinct(labels: impl Iterator<Item = &'static str>) -> Vec<&'static str> {
	let mut out: Vec<&'static str> = Vec::new();
	for label in labels {
		if !out.contains(&label) {
			out.push(label);
		}
	}
	out
}
