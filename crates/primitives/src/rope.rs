//! Rope line utilities.

use ropey::RopeSlice;

use crate::range::{CharIdx, CharLen};

/// Returns true for the characters ropey treats as line breaks.
#[inline]
pub fn is_line_break(c: char) -> bool {
	matches!(c, '\n' | '\r' | '\u{000B}' | '\u{000C}' | '\u{0085}' | '\u{2028}' | '\u{2029}')
}

/// Returns the length of the line terminator at the end of `line`.
///
/// `\r\n` counts as one terminator of two characters. The final line of a
/// document usually has no terminator and yields 0.
pub fn terminator_len(line: RopeSlice) -> CharLen {
	let len = line.len_chars();
	if len == 0 {
		return 0;
	}
	match line.char(len - 1) {
		'\n' if len >= 2 && line.char(len - 2) == '\r' => 2,
		c if is_line_break(c) => 1,
		_ => 0,
	}
}

/// Returns the char offset where the content of line `line_idx` ends,
/// excluding its terminator.
pub fn line_content_end(text: RopeSlice, line_idx: usize) -> CharIdx {
	let line = text.line(line_idx);
	text.line_to_char(line_idx) + line.len_chars() - terminator_len(line)
}

/// Returns the char offset of the start of the line after `line_idx`, or the
/// document end if `line_idx` is the last line.
pub fn next_line_start(text: RopeSlice, line_idx: usize) -> CharIdx {
	if line_idx + 1 < text.len_lines() {
		text.line_to_char(line_idx + 1)
	} else {
		text.len_chars()
	}
}

#[cfg(test)]
mod tests {
	use ropey::Rope;

	use super::*;

	#[test]
	fn test_terminator_len() {
		let text = Rope::from("a\nb\r\nc");
		let slice = text.slice(..);
		assert_eq!(terminator_len(slice.line(0)), 1);
		assert_eq!(terminator_len(slice.line(1)), 2);
		assert_eq!(terminator_len(slice.line(2)), 0);
	}

	#[test]
	fn test_line_content_end() {
		let text = Rope::from("line1\r\nline2\nline3");
		let slice = text.slice(..);
		assert_eq!(line_content_end(slice, 0), 5);
		assert_eq!(line_content_end(slice, 1), 12);
		assert_eq!(line_content_end(slice, 2), 18);
	}

	#[test]
	fn test_next_line_start() {
		let text = Rope::from("ab\ncd");
		let slice = text.slice(..);
		assert_eq!(next_line_start(slice, 0), 3);
		assert_eq!(next_line_start(slice, 1), 5);
	}

	#[test]
	fn test_trailing_newline_has_empty_last_line() {
		let text = Rope::from("hello\n");
		let slice = text.slice(..);
		assert_eq!(slice.len_lines(), 2);
		assert_eq!(line_content_end(slice, 1), 6);
		assert_eq!(next_line_start(slice, 1), 6);
	}

	#[test]
	fn test_empty() {
		let text = Rope::from("");
		let slice = text.slice(..);
		assert_eq!(slice.len_lines(), 1);
		assert_eq!(line_content_end(slice, 0), 0);
		assert_eq!(next_line_start(slice, 0), 0);
	}
}
