//! End-to-end key sequences against a host document.

use textobj_editor::{ObjectSession, Operation, Outcome, SessionEvent};
use textobj_input::{KeySymbol, Keymap};
use textobj_primitives::{CharIdx, Document, DocumentMut, EditError, Range, RopeDocument, TextUnit};

/// A host document that records every mutation it receives.
struct RecordingDoc {
	inner: RopeDocument,
	deletes: Vec<Range>,
	selections: Vec<Range>,
}

impl RecordingDoc {
	fn new(text: &str, cursor: CharIdx) -> Self {
		Self {
			inner: RopeDocument::new(text).with_cursor(cursor),
			deletes: Vec::new(),
			selections: Vec::new(),
		}
	}
}

impl Document for RecordingDoc {
	fn cursor(&self) -> CharIdx {
		self.inner.cursor()
	}
	fn len_chars(&self) -> CharIdx {
		self.inner.len_chars()
	}
	fn char_at(&self, pos: CharIdx) -> Option<char> {
		self.inner.char_at(pos)
	}
	fn starts(&self, unit: TextUnit, pos: CharIdx) -> bool {
		self.inner.starts(unit, pos)
	}
	fn ends(&self, unit: TextUnit, pos: CharIdx) -> bool {
		self.inner.ends(unit, pos)
	}
	fn inside(&self, unit: TextUnit, pos: CharIdx) -> bool {
		self.inner.inside(unit, pos)
	}
	fn backward_start(&self, unit: TextUnit, pos: CharIdx) -> Option<CharIdx> {
		self.inner.backward_start(unit, pos)
	}
	fn forward_end(&self, unit: TextUnit, pos: CharIdx) -> Option<CharIdx> {
		self.inner.forward_end(unit, pos)
	}
	fn line_start(&self, pos: CharIdx) -> CharIdx {
		self.inner.line_start(pos)
	}
	fn line_content_end(&self, pos: CharIdx) -> CharIdx {
		self.inner.line_content_end(pos)
	}
	fn next_line_start(&self, pos: CharIdx) -> CharIdx {
		self.inner.next_line_start(pos)
	}
	fn prev_line_start(&self, pos: CharIdx) -> Option<CharIdx> {
		self.inner.prev_line_start(pos)
	}
}

impl DocumentMut for RecordingDoc {
	fn delete_range(&mut self, range: Range) -> Result<(), EditError> {
		self.deletes.push(range);
		self.inner.delete_range(range)
	}

	fn set_selection(&mut self, range: Range) -> Result<(), EditError> {
		self.selections.push(range);
		self.inner.set_selection(range)
	}
}

fn run(operation: Operation, doc: &mut RecordingDoc, keys: &str) -> Vec<SessionEvent> {
	let _ = tracing_subscriber::fmt::try_init();
	let mut session = ObjectSession::new(operation, Keymap::builtin());
	keys.chars()
		.map(|c| session.handle_key(KeySymbol::Char(c), &mut *doc).unwrap())
		.collect()
}

#[test]
fn delete_is_a_single_edit() {
	let mut doc = RecordingDoc::new("line1\nline2\nline3", 8);
	let events = run(Operation::Delete, &mut doc, "al");

	assert_eq!(
		events.last(),
		Some(&SessionEvent::Finished(Outcome::Applied {
			operation: Operation::Delete,
			range: Range::new(6, 12)
		}))
	);
	assert_eq!(doc.deletes, vec![Range::new(6, 12)]);
	assert_eq!(doc.inner.to_string(), "line1\nline3");
	assert_eq!(doc.inner.revision(), 1);
}

#[test]
fn select_quoted_text() {
	let mut doc = RecordingDoc::new("text 'quoted' text", 8);

	run(Operation::Select, &mut doc, "i'");
	let inner = doc.selections[0];
	assert_eq!(doc.inner.slice_to_string(inner), "quoted");

	run(Operation::Select, &mut doc, "a'");
	let outer = doc.selections[1];
	assert_eq!(doc.inner.slice_to_string(outer), "'quoted'");
	assert!(outer.contains_range(&inner));
	assert!(doc.deletes.is_empty());
}

#[test]
fn unmatched_delimiter_never_mutates() {
	let mut doc = RecordingDoc::new("(foo", 4);

	for keys in ["a(", "i)", "a("] {
		let events = run(Operation::Delete, &mut doc, keys);
		assert_eq!(events.last(), Some(&SessionEvent::Finished(Outcome::NoOp)));
	}
	assert!(doc.deletes.is_empty());
	assert_eq!(doc.inner.to_string(), "(foo");
}

#[test]
fn escape_after_modifier_leaves_document() {
	let _ = tracing_subscriber::fmt::try_init();
	let mut doc = RecordingDoc::new("foo bar", 1);
	let mut session = ObjectSession::new(Operation::Delete, Keymap::builtin());

	session.handle_key(KeySymbol::Char('i'), &mut doc).unwrap();
	assert_eq!(session.handle_key(KeySymbol::Escape, &mut doc).unwrap(), SessionEvent::Cancelled);
	assert_eq!(session.handle_key(KeySymbol::Char('w'), &mut doc).unwrap(), SessionEvent::Ignored);
	assert!(doc.deletes.is_empty());
	assert_eq!(doc.inner.to_string(), "foo bar");
}

#[test]
fn nearest_delimiters_win() {
	let mut doc = RecordingDoc::new("(a (b) c)", 1);
	run(Operation::Delete, &mut doc, "a(");

	assert_eq!(doc.deletes, vec![Range::new(0, 6)]);
	assert_eq!(doc.inner.to_string(), " c)");
}

#[test]
fn paragraph_delete() {
	let mut doc = RecordingDoc::new("one\ntwo\n\n\nthree", 5);
	run(Operation::Delete, &mut doc, "ap");

	assert_eq!(doc.inner.to_string(), "three");
}
