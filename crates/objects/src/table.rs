//! The static text object table.

use crate::ObjectKind;

/// Display metadata and default keys for one [`ObjectKind`].
#[derive(Debug)]
pub struct ObjectDef {
	/// The kind this entry describes.
	pub kind: ObjectKind,
	/// Canonical name, as written in configuration files.
	pub name: &'static str,
	/// Short label shown while composing a command.
	pub label: &'static str,
	/// Keys bound to this kind by default. Both keys of a delimiter pair
	/// select the same kind.
	pub keys: &'static [char],
	/// Human-readable description.
	pub description: &'static str,
}

/// Every text object kind, in help-text order.
pub static OBJECTS: &[ObjectDef] = &[
	ObjectDef {
		kind: ObjectKind::Word,
		name: "word",
		label: "word",
		keys: &['w'],
		description: "Word, plus trailing whitespace when outer",
	},
	ObjectDef {
		kind: ObjectKind::Sentence,
		name: "sentence",
		label: "sentence",
		keys: &['s'],
		description: "Sentence, plus trailing whitespace when outer",
	},
	ObjectDef {
		kind: ObjectKind::Line,
		name: "line",
		label: "line",
		keys: &['l'],
		description: "Line, plus its terminator when outer",
	},
	ObjectDef {
		kind: ObjectKind::Paragraph,
		name: "paragraph",
		label: "paragraph",
		keys: &['p'],
		description: "Run of non-blank lines, plus following blank lines when outer",
	},
	ObjectDef {
		kind: ObjectKind::Parenthesized,
		name: "parenthesized",
		label: "(…)",
		keys: &['(', ')'],
		description: "Text inside parentheses, plus the parentheses when outer",
	},
	ObjectDef {
		kind: ObjectKind::Bracketed,
		name: "bracketed",
		label: "[…]",
		keys: &['[', ']'],
		description: "Text inside square brackets, plus the brackets when outer",
	},
	ObjectDef {
		kind: ObjectKind::Braced,
		name: "braced",
		label: "{…}",
		keys: &['{', '}'],
		description: "Text inside braces, plus the braces when outer",
	},
	ObjectDef {
		kind: ObjectKind::DoubleQuoted,
		name: "double-quoted",
		label: "\"…\"",
		keys: &['"'],
		description: "Text inside double quotes, plus the quotes when outer",
	},
	ObjectDef {
		kind: ObjectKind::SingleQuoted,
		name: "single-quoted",
		label: "'…'",
		keys: &['\''],
		description: "Text inside single quotes, plus the quotes when outer",
	},
];

pub(crate) fn def(kind: ObjectKind) -> &'static ObjectDef {
	match kind {
		ObjectKind::Word => &OBJECTS[0],
		ObjectKind::Sentence => &OBJECTS[1],
		ObjectKind::Line => &OBJECTS[2],
		ObjectKind::Paragraph => &OBJECTS[3],
		ObjectKind::Parenthesized => &OBJECTS[4],
		ObjectKind::Bracketed => &OBJECTS[5],
		ObjectKind::Braced => &OBJECTS[6],
		ObjectKind::DoubleQuoted => &OBJECTS[7],
		ObjectKind::SingleQuoted => &OBJECTS[8],
	}
}
