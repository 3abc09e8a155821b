//! Text objects.
//!
//! A text object names a structural region around the cursor (a word, a
//! line, a parenthesized span, ...) with an `inner` and an `outer` variant.
//! Resolving one against a [`Document`] yields the exact half-open range it
//! spans, or `None` when no such object exists at the cursor.
//!
//! This crate provides:
//! - [`ObjectKind`], [`Modifier`] and [`TextObjectRequest`]
//! - The static [`OBJECTS`] table with display names and default keys
//! - Built-in resolution for every kind ([`ObjectKind::resolve`])

use serde::Deserialize;
use textobj_primitives::{CharIdx, Document, Range};
use tracing::trace;

mod builtins;
mod table;

pub use table::{OBJECTS, ObjectDef};

/// Whether a text object covers only itself or also its bounding material.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Modifier {
	/// The tightest span of the object itself.
	Inner,
	/// The object plus trailing whitespace, delimiters, or line terminator.
	#[serde(alias = "around")]
	Outer,
}

impl Modifier {
	/// Returns the label shown while composing a command.
	pub fn label(self) -> &'static str {
		match self {
			Self::Inner => "inner",
			Self::Outer => "a",
		}
	}
}

/// The structural units a text object can name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ObjectKind {
	/// A natural-language word.
	Word,
	/// A natural-language sentence.
	Sentence,
	/// A single line.
	Line,
	/// A run of non-blank lines.
	Paragraph,
	/// Text between `(` and `)`.
	Parenthesized,
	/// Text between `[` and `]`.
	Bracketed,
	/// Text between `{` and `}`.
	Braced,
	/// Text between two `"`.
	DoubleQuoted,
	/// Text between two `'`.
	SingleQuoted,
}

impl ObjectKind {
	/// Returns the `(open, close)` delimiters of a delimiter-bounded kind.
	pub fn delimiters(self) -> Option<(char, char)> {
		match self {
			Self::Parenthesized => Some(('(', ')')),
			Self::Bracketed => Some(('[', ']')),
			Self::Braced => Some(('{', '}')),
			Self::DoubleQuoted => Some(('"', '"')),
			Self::SingleQuoted => Some(('\'', '\'')),
			Self::Word | Self::Sentence | Self::Line | Self::Paragraph => None,
		}
	}

	/// Returns this kind's entry in [`OBJECTS`].
	pub fn def(self) -> &'static ObjectDef {
		table::def(self)
	}

	/// Resolves the range this object spans around `cursor`.
	///
	/// A cursor past the end of the document is clamped to the end. Returns
	/// `None` when no object of this kind exists at the cursor; the document
	/// is only read.
	pub fn resolve(self, doc: &dyn Document, cursor: CharIdx, modifier: Modifier) -> Option<Range> {
		let cursor = cursor.min(doc.len_chars());
		let range = match self {
			Self::Word => builtins::word::resolve_word(doc, cursor, modifier),
			Self::Sentence => builtins::word::resolve_sentence(doc, cursor, modifier),
			Self::Line => builtins::line::resolve_line(doc, cursor, modifier),
			Self::Paragraph => builtins::line::resolve_paragraph(doc, cursor, modifier),
			Self::Parenthesized | Self::Bracketed | Self::Braced | Self::DoubleQuoted | Self::SingleQuoted => {
				let (open, close) = self.delimiters()?;
				builtins::surround::resolve_surround(doc, cursor, open, close, modifier)
			}
		};
		trace!(kind = ?self, ?modifier, cursor, ?range, "resolved text object");
		range
	}
}

/// A completed text object command: which object, inner or outer.
///
/// Produced once by the command parser and consumed once by the dispatcher.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TextObjectRequest {
	/// The object to resolve.
	pub kind: ObjectKind,
	/// Inner or outer.
	pub modifier: Modifier,
}

impl TextObjectRequest {
	/// Creates a request for `kind` with `modifier`.
	pub fn new(kind: ObjectKind, modifier: Modifier) -> Self {
		Self { kind, modifier }
	}

	/// Resolves the request against `doc` at `cursor`.
	pub fn resolve(&self, doc: &dyn Document, cursor: CharIdx) -> Option<Range> {
		self.kind.resolve(doc, cursor, self.modifier)
	}
}
