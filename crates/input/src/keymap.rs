//! Key bindings for the two grammar states.

use indexmap::IndexMap;
use textobj_objects::{Modifier, OBJECTS, ObjectKind};

/// Maps keys to modifiers (first key) and object kinds (second key).
///
/// Both maps are plain data; insertion order is kept so help text lists
/// bindings in a stable order. The two maps are consulted in different parser
/// states, so one key may appear in both.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Keymap {
	modifiers: IndexMap<char, Modifier>,
	objects: IndexMap<char, ObjectKind>,
}

impl Keymap {
	/// Creates a keymap with no bindings.
	pub fn empty() -> Self {
		Self {
			modifiers: IndexMap::new(),
			objects: IndexMap::new(),
		}
	}

	/// Creates the default keymap: `a`/`i` modifiers and the keys listed in
	/// [`OBJECTS`].
	pub fn builtin() -> Self {
		let mut keymap = Self::empty();
		keymap.bind_modifier('a', Modifier::Outer);
		keymap.bind_modifier('i', Modifier::Inner);
		for def in OBJECTS {
			for &key in def.keys {
				keymap.bind_object(key, def.kind);
			}
		}
		keymap
	}

	/// Binds `key` to `modifier`, returning the previous binding.
	pub fn bind_modifier(&mut self, key: char, modifier: Modifier) -> Option<Modifier> {
		self.modifiers.insert(key, modifier)
	}

	/// Binds `key` to `kind`, returning the previous binding.
	pub fn bind_object(&mut self, key: char, kind: ObjectKind) -> Option<ObjectKind> {
		self.objects.insert(key, kind)
	}

	/// Returns the modifier bound to `key`.
	pub fn modifier(&self, key: char) -> Option<Modifier> {
		self.modifiers.get(&key).copied()
	}

	/// Returns the object kind bound to `key`.
	pub fn object(&self, key: char) -> Option<ObjectKind> {
		self.objects.get(&key).copied()
	}

	/// Iterates modifier bindings in insertion order.
	pub fn modifiers(&self) -> impl Iterator<Item = (char, Modifier)> + '_ {
		self.modifiers.iter().map(|(&k, &m)| (k, m))
	}

	/// Iterates object bindings in insertion order.
	pub fn objects(&self) -> impl Iterator<Item = (char, ObjectKind)> + '_ {
		self.objects.iter().map(|(&k, &o)| (k, o))
	}
}

impl Default for Keymap {
	fn default() -> Self {
		Self::builtin()
	}
}
