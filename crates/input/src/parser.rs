//! The command parser state machine.

use textobj_objects::{Modifier, TextObjectRequest};
use tracing::trace;

use crate::key::KeySymbol;
use crate::keymap::Keymap;

/// Where the parser is within the two-key grammar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParserState {
	/// Waiting for a modifier key (`a` or `i`). Initial state.
	AwaitModifier,
	/// Modifier recorded; waiting for an object key.
	AwaitObject(Modifier),
}

/// Result of feeding one key to the parser.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseResult {
	/// The key was accepted and more keys are needed.
	///
	/// The label is display text for the accepted key (`"a"`, `"inner"`).
	Continuing {
		/// Label of the accepted modifier.
		label: &'static str,
	},
	/// The key completed a command.
	Completed {
		/// Label of the accepted object (`"word"`, `"(…)"`).
		label: &'static str,
		/// The requested text object.
		request: TextObjectRequest,
	},
	/// The key is not valid here. The parser is back in its initial state.
	Rejected,
}

/// Parses `modifier object` key sequences into [`TextObjectRequest`]s.
///
/// Holds the in-progress command between key events. The command is
/// discarded when it completes, when a key is rejected, or on [`reset`].
///
/// [`reset`]: CommandParser::reset
#[derive(Debug, Clone)]
pub struct CommandParser {
	keymap: Keymap,
	state: ParserState,
	expression: String,
}

impl Default for CommandParser {
	fn default() -> Self {
		Self::new()
	}
}

impl CommandParser {
	/// Creates a parser using [`Keymap::builtin`].
	pub fn new() -> Self {
		Self::with_keymap(Keymap::builtin())
	}

	/// Creates a parser using `keymap`.
	pub fn with_keymap(keymap: Keymap) -> Self {
		Self {
			keymap,
			state: ParserState::AwaitModifier,
			expression: String::new(),
		}
	}

	/// Returns the current state.
	pub fn state(&self) -> ParserState {
		self.state
	}

	/// Returns the keys accepted so far in the current command (e.g. `"i"`).
	pub fn expression(&self) -> &str {
		&self.expression
	}

	/// Returns the keymap in use.
	pub fn keymap(&self) -> &Keymap {
		&self.keymap
	}

	/// Discards the in-progress command.
	pub fn reset(&mut self) {
		self.state = ParserState::AwaitModifier;
		self.expression.clear();
	}

	/// Advances the grammar by one key.
	pub fn feed(&mut self, key: &KeySymbol) -> ParseResult {
		let Some(ch) = key.as_char() else {
			return self.reject(key);
		};

		match self.state {
			ParserState::AwaitModifier => match self.keymap.modifier(ch) {
				Some(modifier) => {
					self.expression.push(ch);
					self.state = ParserState::AwaitObject(modifier);
					trace!(key = %ch, ?modifier, "modifier accepted");
					ParseResult::Continuing { label: modifier.label() }
				}
				None => self.reject(key),
			},
			ParserState::AwaitObject(modifier) => match self.keymap.object(ch) {
				Some(kind) => {
					self.expression.push(ch);
					trace!(expression = %self.expression, ?kind, ?modifier, "command completed");
					self.reset();
					ParseResult::Completed {
						label: kind.def().label,
						request: TextObjectRequest::new(kind, modifier),
					}
				}
				None => self.reject(key),
			},
		}
	}

	fn reject(&mut self, key: &KeySymbol) -> ParseResult {
		trace!(?key, state = ?self.state, expression = %self.expression, "key rejected");
		self.reset();
		ParseResult::Rejected
	}
}
