//! The navigation interface text objects resolve against.
//!
//! A host editor implements [`Document`] over its own buffer. Resolution only
//! reads through it; the single mutation a completed command performs goes
//! through [`DocumentMut`]. Neither is ever stored by the engine: every call
//! receives the document afresh.

use crate::edit::EditError;
use crate::range::{CharIdx, Range};

/// Boundary families a document answers predicates and moves for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TextUnit {
	/// Natural-language words.
	Word,
	/// Natural-language sentences.
	Sentence,
}

/// Read-only boundary queries at character offsets.
///
/// Offsets outside `0..=len_chars()` are never passed by the engine.
pub trait Document {
	/// Returns the cursor (insertion point) offset.
	fn cursor(&self) -> CharIdx;

	/// Returns the document length in characters.
	fn len_chars(&self) -> CharIdx;

	/// Returns the character starting at `pos`, or `None` at the end.
	fn char_at(&self, pos: CharIdx) -> Option<char>;

	/// Returns true if a `unit` starts at `pos`.
	fn starts(&self, unit: TextUnit, pos: CharIdx) -> bool;

	/// Returns true if a `unit` ends at `pos`.
	fn ends(&self, unit: TextUnit, pos: CharIdx) -> bool;

	/// Returns true if `pos` lies within a `unit` (start inclusive, end exclusive).
	fn inside(&self, unit: TextUnit, pos: CharIdx) -> bool;

	/// Returns the nearest `unit` start strictly before `pos`.
	fn backward_start(&self, unit: TextUnit, pos: CharIdx) -> Option<CharIdx>;

	/// Returns the nearest `unit` end strictly after `pos`.
	fn forward_end(&self, unit: TextUnit, pos: CharIdx) -> Option<CharIdx>;

	/// Returns the start of the line containing `pos`.
	fn line_start(&self, pos: CharIdx) -> CharIdx;

	/// Returns the end of the content of the line containing `pos`, before its
	/// terminator.
	fn line_content_end(&self, pos: CharIdx) -> CharIdx;

	/// Returns the start of the line after the one containing `pos`, or the
	/// document end on the last line.
	fn next_line_start(&self, pos: CharIdx) -> CharIdx;

	/// Returns the start of the line before the one containing `pos`.
	fn prev_line_start(&self, pos: CharIdx) -> Option<CharIdx>;

	/// Returns true if `pos` is at the start of a line.
	fn starts_line(&self, pos: CharIdx) -> bool {
		self.line_start(pos) == pos
	}

	/// Returns the offset of the nearest `ch` strictly before `from`.
	fn search_backward(&self, from: CharIdx, ch: char) -> Option<CharIdx> {
		(0..from).rev().find(|&pos| self.char_at(pos) == Some(ch))
	}

	/// Returns the offset of the nearest `ch` at or after `from`.
	fn search_forward(&self, from: CharIdx, ch: char) -> Option<CharIdx> {
		(from..self.len_chars()).find(|&pos| self.char_at(pos) == Some(ch))
	}

	/// Returns the first offset at or after `pos` whose character is not
	/// whitespace, or the document end.
	fn skip_whitespace_forward(&self, pos: CharIdx) -> CharIdx {
		let len = self.len_chars();
		(pos..len)
			.find(|&p| self.char_at(p).is_some_and(|c| !c.is_whitespace()))
			.unwrap_or(len)
	}

	/// Returns true if the line containing `pos` holds only whitespace.
	fn is_blank_line(&self, pos: CharIdx) -> bool {
		let start = self.line_start(pos);
		let end = self.line_content_end(pos);
		(start..end).all(|p| self.char_at(p).is_some_and(char::is_whitespace))
	}
}

/// The mutations a completed command may perform.
///
/// Each call is one atomic edit from the host's point of view, so a delete
/// lands on the host's undo stack as a single step.
pub trait DocumentMut: Document {
	/// Removes exactly the characters in `range`.
	fn delete_range(&mut self, range: Range) -> Result<(), EditError>;

	/// Selects `range`.
	fn set_selection(&mut self, range: Range) -> Result<(), EditError>;
}
