//! Line and paragraph objects.

use textobj_primitives::{CharIdx, Document, Range};

use crate::Modifier;

/// Selects the line at `cursor`; outer also takes its terminator.
///
/// Always applicable. On the last line without a terminator, inner and
/// outer coincide.
pub(crate) fn resolve_line(doc: &dyn Document, cursor: CharIdx, modifier: Modifier) -> Option<Range> {
	let start = if doc.starts_line(cursor) {
		cursor
	} else {
		doc.line_start(cursor)
	};
	let end = match modifier {
		Modifier::Inner => doc.line_content_end(cursor),
		Modifier::Outer => doc.next_line_start(cursor),
	};

	Range::try_new(start, end)
}

/// Selects the run of non-blank lines around `cursor`; outer also takes the
/// last line's terminator and every blank line after it.
///
/// Returns `None` when the cursor is on a blank line.
pub(crate) fn resolve_paragraph(doc: &dyn Document, cursor: CharIdx, modifier: Modifier) -> Option<Range> {
	if doc.is_blank_line(cursor) {
		return None;
	}

	let mut start = doc.line_start(cursor);
	while let Some(prev) = doc.prev_line_start(start)
		&& !doc.is_blank_line(prev)
	{
		start = prev;
	}

	let mut last = doc.line_start(cursor);
	while let Some(next) = following_line(doc, last)
		&& !doc.is_blank_line(next)
	{
		last = next;
	}

	let end = match modifier {
		Modifier::Inner => doc.line_content_end(last),
		Modifier::Outer => {
			let mut end = doc.next_line_start(last);
			let mut line = following_line(doc, last);
			while let Some(blank) = line
				&& doc.is_blank_line(blank)
			{
				end = doc.next_line_start(blank);
				line = following_line(doc, blank);
			}
			end
		}
	};

	Range::try_new(start, end)
}

/// Start of the line after the one containing `pos`, if there is one.
fn following_line(doc: &dyn Document, pos: CharIdx) -> Option<CharIdx> {
	let next = doc.next_line_start(pos);
	(doc.line_start(next) != doc.line_start(pos)).then_some(next)
}
