//! UAX #29 word and sentence segmentation over single lines.
//!
//! Neither words nor sentences cross a line break under UAX #29, so a
//! document can answer boundary queries one line at a time.

use std::borrow::Cow;

use ropey::RopeSlice;
use unicode_segmentation::UnicodeSegmentation;

use crate::document::TextUnit;
use crate::range::Range;

/// Returns the spans of `unit` inside `line`, as char offsets relative to the
/// start of the line, in ascending order.
pub fn line_spans(line: RopeSlice, unit: TextUnit) -> Vec<Range> {
	let text: Cow<'_, str> = line.into();
	let to_char = |byte: usize| line.byte_to_char(byte);

	match unit {
		TextUnit::Word => text
			.unicode_word_indices()
			.map(|(byte, word)| Range::new(to_char(byte), to_char(byte + word.len())))
			.collect(),
		TextUnit::Sentence => text
			.split_sentence_bound_indices()
			.filter_map(|(byte, segment)| {
				let trimmed = segment.trim_start();
				let lead = segment.len() - trimmed.len();
				let trimmed = trimmed.trim_end();
				if trimmed.is_empty() {
					return None;
				}
				let start = byte + lead;
				Some(Range::new(to_char(start), to_char(start + trimmed.len())))
			})
			.collect(),
	}
}
