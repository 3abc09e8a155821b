use thiserror::Error;

use crate::range::{CharLen, Range};

/// Errors a host document reports when asked to change.
///
/// Resolution itself never fails; these only surface from
/// [`DocumentMut`](crate::DocumentMut) implementations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EditError {
	/// The document does not accept edits.
	#[error("document is read-only")]
	ReadOnly,
	/// The range reaches past the end of the document.
	#[error("range {range} is out of bounds for a document of {len} chars")]
	OutOfBounds {
		/// The rejected range.
		range: Range,
		/// Document length in characters.
		len: CharLen,
	},
}
