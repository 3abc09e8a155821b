//! Delimiter-bounded objects: brackets and quotes.

use textobj_primitives::{CharIdx, Document, Range};

use crate::Modifier;

/// Selects the text between the nearest `open` before `cursor` and the
/// nearest `close` at or after it.
///
/// Nesting is not balanced: `(a (b) c)` with the cursor on `a` pairs the
/// outer `(` with the inner `)`. For quotes `open == close`.
pub(crate) fn resolve_surround(
	doc: &dyn Document,
	cursor: CharIdx,
	open: char,
	close: char,
	modifier: Modifier,
) -> Option<Range> {
	let left = doc.search_backward(cursor, open)?;
	let right = doc.search_forward(cursor, close)?;

	match modifier {
		Modifier::Inner => Range::try_new(left + 1, right),
		Modifier::Outer => Range::try_new(left, right + 1),
	}
}
