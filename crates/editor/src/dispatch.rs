//! Operation dispatch over resolved text objects.

use textobj_objects::TextObjectRequest;
use textobj_primitives::{CharIdx, DocumentMut, EditError, Range};
use tracing::debug;

/// What to do with a resolved text object.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
	/// Remove the range from the document.
	Delete,
	/// Make the range the document's selection.
	Select,
}

impl Operation {
	/// Returns the label shown at the head of a session's parts.
	pub fn label(self) -> &'static str {
		match self {
			Self::Delete => "Delete",
			Self::Select => "Select",
		}
	}
}

/// Result of applying a request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
	/// The object resolved and the operation ran on `range`.
	Applied {
		/// The operation performed.
		operation: Operation,
		/// The range it was performed on, in offsets from before the edit.
		range: Range,
	},
	/// No object of the requested kind exists at the cursor. The document is
	/// untouched.
	NoOp,
}

impl Outcome {
	/// Returns true if the operation ran.
	pub fn is_applied(&self) -> bool {
		matches!(self, Self::Applied { .. })
	}

	/// Returns the range the operation ran on.
	pub fn range(&self) -> Option<Range> {
		match self {
			Self::Applied { range, .. } => Some(*range),
			Self::NoOp => None,
		}
	}
}

/// Resolves `request` at `cursor` and performs `operation` on the result.
///
/// A delete is a single [`DocumentMut::delete_range`] call, so hosts record
/// it as one undo step. Errors come only from the document itself.
pub fn apply(
	operation: Operation,
	request: TextObjectRequest,
	doc: &mut dyn DocumentMut,
	cursor: CharIdx,
) -> Result<Outcome, EditError> {
	let Some(range) = request.resolve(&*doc, cursor) else {
		debug!(?operation, kind = ?request.kind, modifier = ?request.modifier, cursor, "no text object at cursor");
		return Ok(Outcome::NoOp);
	};

	match operation {
		Operation::Delete => doc.delete_range(range)?,
		Operation::Select => doc.set_selection(range)?,
	}
	debug!(?operation, kind = ?request.kind, modifier = ?request.modifier, %range, "applied text object");
	Ok(Outcome::Applied { operation, range })
}

/// Like [`apply`], using the document's own cursor.
pub fn apply_at_cursor(
	operation: Operation,
	request: TextObjectRequest,
	doc: &mut dyn DocumentMut,
) -> Result<Outcome, EditError> {
	let cursor = doc.cursor();
	apply(operation, request, doc, cursor)
}
