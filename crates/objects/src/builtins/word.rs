//! Word and sentence objects.
//!
//! Both share one shape and differ only in the boundary family they ask the
//! document about.

use textobj_primitives::{CharIdx, Document, Range, TextUnit};

use crate::Modifier;

/// Selects the word at `cursor`; outer also takes the whitespace after it.
pub(crate) fn resolve_word(doc: &dyn Document, cursor: CharIdx, modifier: Modifier) -> Option<Range> {
	resolve_unit(doc, TextUnit::Word, cursor, modifier)
}

/// Selects the sentence at `cursor`; outer also takes the whitespace after it.
pub(crate) fn resolve_sentence(doc: &dyn Document, cursor: CharIdx, modifier: Modifier) -> Option<Range> {
	resolve_unit(doc, TextUnit::Sentence, cursor, modifier)
}

/// The cursor must be inside a unit or right at the end of one.
///
/// A cursor that is both at the end of one unit and inside the next (two
/// units with no separator) selects the unit it is inside.
fn resolve_unit(doc: &dyn Document, unit: TextUnit, cursor: CharIdx, modifier: Modifier) -> Option<Range> {
	let inside = doc.inside(unit, cursor);
	if !inside && !doc.ends(unit, cursor) {
		return None;
	}

	let start = if doc.starts(unit, cursor) {
		cursor
	} else {
		doc.backward_start(unit, cursor)?
	};
	let end = if inside { doc.forward_end(unit, cursor)? } else { cursor };
	let end = match modifier {
		Modifier::Inner => end,
		Modifier::Outer => doc.skip_whitespace_forward(end),
	};

	Range::try_new(start, end)
}

#[cfg(test)]
mod tests {
	use textobj_primitives::RopeDocument;

	use super::*;

	fn word(text: &str, cursor: CharIdx, modifier: Modifier) -> Option<(usize, usize)> {
		let doc = RopeDocument::new(text);
		resolve_word(&doc, cursor, modifier).map(|r| (r.start(), r.end()))
	}

	fn sentence(text: &str, cursor: CharIdx, modifier: Modifier) -> Option<(usize, usize)> {
		let doc = RopeDocument::new(text);
		resolve_sentence(&doc, cursor, modifier).map(|r| (r.start(), r.end()))
	}

	#[test]
	fn test_inner_word() {
		assert_eq!(word("foo bar  baz", 5, Modifier::Inner), Some((4, 7)));
		assert_eq!(word("foo bar  baz", 4, Modifier::Inner), Some((4, 7)));
		assert_eq!(word("foo bar  baz", 0, Modifier::Inner), Some((0, 3)));
	}

	#[test]
	fn test_outer_word_takes_trailing_whitespace() {
		assert_eq!(word("foo bar  baz", 5, Modifier::Outer), Some((4, 9)));
		assert_eq!(word("foo bar  baz", 10, Modifier::Outer), Some((9, 12)));
	}

	#[test]
	fn test_word_at_end_boundary() {
		assert_eq!(word("foo bar", 3, Modifier::Inner), Some((0, 3)));
		assert_eq!(word("foo bar", 7, Modifier::Inner), Some((4, 7)));
		assert_eq!(word("foo bar", 3, Modifier::Outer), Some((0, 4)));
	}

	#[test]
	fn test_word_outer_stops_at_punctuation() {
		assert_eq!(word("foo, bar", 1, Modifier::Outer), Some((0, 3)));
	}

	#[test]
	fn test_word_outer_crosses_line_break() {
		assert_eq!(word("foo \n  bar", 1, Modifier::Outer), Some((0, 7)));
	}

	#[test]
	fn test_no_word_in_whitespace() {
		assert_eq!(word("foo   bar", 5, Modifier::Inner), None);
		assert_eq!(word("   ", 1, Modifier::Outer), None);
		assert_eq!(word("", 0, Modifier::Inner), None);
	}

	#[test]
	fn test_no_word_on_punctuation() {
		assert_eq!(word("a (b)", 2, Modifier::Inner), None);
	}

	#[test]
	fn test_inner_sentence() {
		let text = "One two. Three four!  Five.";
		assert_eq!(sentence(text, 11, Modifier::Inner), Some((9, 20)));
		assert_eq!(sentence(text, 8, Modifier::Inner), Some((0, 8)));
	}

	#[test]
	fn test_outer_sentence_takes_trailing_whitespace() {
		let text = "One two. Three four!  Five.";
		assert_eq!(sentence(text, 11, Modifier::Outer), Some((9, 22)));
		assert_eq!(sentence(text, 24, Modifier::Outer), Some((22, 27)));
	}

	#[test]
	fn test_no_sentence_between_sentences() {
		assert_eq!(sentence("One.   Two.", 5, Modifier::Inner), None);
	}
}
