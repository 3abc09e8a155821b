use ropey::Rope;
use tracing::debug;

use crate::document::{Document, DocumentMut, TextUnit};
use crate::edit::EditError;
use crate::range::{CharIdx, Range};
use crate::rope;
use crate::segment::line_spans;

/// A rope-backed document with a cursor and an optional selection.
///
/// Word and sentence boundaries follow UAX #29 and are computed on demand for
/// the lines a query touches; nothing is cached between edits.
#[derive(Debug, Clone)]
pub struct RopeDocument {
	text: Rope,
	cursor: CharIdx,
	selection: Option<Range>,
	read_only: bool,
	revision: u64,
}

impl RopeDocument {
	/// Creates a document holding `text` with the cursor at offset 0.
	pub fn new(text: &str) -> Self {
		Self {
			text: Rope::from(text),
			cursor: 0,
			selection: None,
			read_only: false,
			revision: 0,
		}
	}

	/// Returns this document with the cursor moved to `pos`.
	pub fn with_cursor(mut self, pos: CharIdx) -> Self {
		self.set_cursor(pos);
		self
	}

	/// Moves the cursor, clamped to the document end.
	pub fn set_cursor(&mut self, pos: CharIdx) {
		self.cursor = pos.min(self.text.len_chars());
	}

	/// Marks the document read-only (or editable again).
	pub fn set_read_only(&mut self, read_only: bool) {
		self.read_only = read_only;
	}

	/// Returns the underlying rope.
	pub fn text(&self) -> &Rope {
		&self.text
	}

	/// Returns the characters in `range` as a string.
	pub fn slice_to_string(&self, range: Range) -> String {
		self.text.slice(range.as_std()).to_string()
	}

	/// Returns the current selection, if any.
	pub fn selection(&self) -> Option<Range> {
		self.selection
	}

	/// Returns the number of edits applied so far.
	pub fn revision(&self) -> u64 {
		self.revision
	}

	fn line_of(&self, pos: CharIdx) -> usize {
		self.text.char_to_line(pos.min(self.text.len_chars()))
	}

	/// Spans of `unit` on line `line_idx`, in absolute char offsets.
	fn spans(&self, unit: TextUnit, line_idx: usize) -> impl Iterator<Item = Range> {
		let line_start = self.text.line_to_char(line_idx);
		line_spans(self.text.line(line_idx), unit)
			.into_iter()
			.map(move |r| Range::new(line_start + r.start(), line_start + r.end()))
	}

	fn check_bounds(&self, range: Range) -> Result<(), EditError> {
		let len = self.text.len_chars();
		if range.end() > len {
			return Err(EditError::OutOfBounds { range, len });
		}
		Ok(())
	}
}

impl std::fmt::Display for RopeDocument {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		std::fmt::Display::fmt(&self.text, f)
	}
}

impl Document for RopeDocument {
	fn cursor(&self) -> CharIdx {
		self.cursor
	}

	fn len_chars(&self) -> CharIdx {
		self.text.len_chars()
	}

	fn char_at(&self, pos: CharIdx) -> Option<char> {
		self.text.get_char(pos)
	}

	fn starts(&self, unit: TextUnit, pos: CharIdx) -> bool {
		self.spans(unit, self.line_of(pos)).any(|r| r.start() == pos)
	}

	fn ends(&self, unit: TextUnit, pos: CharIdx) -> bool {
		self.spans(unit, self.line_of(pos)).any(|r| r.end() == pos)
	}

	fn inside(&self, unit: TextUnit, pos: CharIdx) -> bool {
		self.spans(unit, self.line_of(pos)).any(|r| r.contains(pos))
	}

	fn backward_start(&self, unit: TextUnit, pos: CharIdx) -> Option<CharIdx> {
		(0..=self.line_of(pos)).rev().find_map(|line| {
			self.spans(unit, line)
				.map(|r| r.start())
				.filter(|&start| start < pos)
				.last()
		})
	}

	fn forward_end(&self, unit: TextUnit, pos: CharIdx) -> Option<CharIdx> {
		(self.line_of(pos)..self.text.len_lines()).find_map(|line| {
			self.spans(unit, line).map(|r| r.end()).find(|&end| end > pos)
		})
	}

	fn line_start(&self, pos: CharIdx) -> CharIdx {
		self.text.line_to_char(self.line_of(pos))
	}

	fn line_content_end(&self, pos: CharIdx) -> CharIdx {
		rope::line_content_end(self.text.slice(..), self.line_of(pos))
	}

	fn next_line_start(&self, pos: CharIdx) -> CharIdx {
		rope::next_line_start(self.text.slice(..), self.line_of(pos))
	}

	fn prev_line_start(&self, pos: CharIdx) -> Option<CharIdx> {
		let line = self.line_of(pos);
		(line > 0).then(|| self.text.line_to_char(line - 1))
	}

	fn search_backward(&self, from: CharIdx, ch: char) -> Option<CharIdx> {
		let mut chars = self.text.chars_at(from);
		let mut pos = from;
		while let Some(c) = chars.prev() {
			pos -= 1;
			if c == ch {
				return Some(pos);
			}
		}
		None
	}

	fn search_forward(&self, from: CharIdx, ch: char) -> Option<CharIdx> {
		self.text.chars_at(from).position(|c| c == ch).map(|i| from + i)
	}
}

impl DocumentMut for RopeDocument {
	fn delete_range(&mut self, range: Range) -> Result<(), EditError> {
		if self.read_only {
			return Err(EditError::ReadOnly);
		}
		self.check_bounds(range)?;

		self.text.remove(range.as_std());
		self.cursor = range.start();
		self.selection = None;
		self.revision += 1;
		debug!(%range, revision = self.revision, "deleted range");
		Ok(())
	}

	fn set_selection(&mut self, range: Range) -> Result<(), EditError> {
		self.check_bounds(range)?;

		self.selection = Some(range);
		self.cursor = range.end();
		Ok(())
	}
}
