//! Key symbols as delivered by a host.

/// A single key press, reduced to what the command grammar cares about.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum KeySymbol {
	/// A key that produces a character.
	Char(char),
	/// The cancel key.
	Escape,
	/// A bare modifier press (Shift, Control, Alt, ...) with no character.
	ModifierKey,
	/// Any other named key (function keys, arrows, ...).
	Other(String),
}

/// X11/GDK keyval names of the printable ASCII punctuation keys.
const PUNCTUATION_NAMES: &[(&str, char)] = &[
	("space", ' '),
	("exclam", '!'),
	("quotedbl", '"'),
	("numbersign", '#'),
	("dollar", '$'),
	("percent", '%'),
	("ampersand", '&'),
	("apostrophe", '\''),
	("quoteright", '\''),
	("parenleft", '('),
	("parenright", ')'),
	("asterisk", '*'),
	("plus", '+'),
	("comma", ','),
	("minus", '-'),
	("period", '.'),
	("slash", '/'),
	("colon", ':'),
	("semicolon", ';'),
	("less", '<'),
	("equal", '='),
	("greater", '>'),
	("question", '?'),
	("at", '@'),
	("bracketleft", '['),
	("backslash", '\\'),
	("bracketright", ']'),
	("asciicircum", '^'),
	("underscore", '_'),
	("grave", '`'),
	("quoteleft", '`'),
	("braceleft", '{'),
	("bar", '|'),
	("braceright", '}'),
	("asciitilde", '~'),
];

const MODIFIER_NAMES: &[&str] = &[
	"Shift_L",
	"Shift_R",
	"Control_L",
	"Control_R",
	"Alt_L",
	"Alt_R",
	"Meta_L",
	"Meta_R",
	"Super_L",
	"Super_R",
	"Hyper_L",
	"Hyper_R",
	"Caps_Lock",
	"Shift_Lock",
	"ISO_Level3_Shift",
	"ISO_Level5_Shift",
];

impl KeySymbol {
	/// Parses an X11/GDK keyval name (`"parenleft"`, `"w"`, `"Escape"`,
	/// `"Shift_L"`, ...).
	///
	/// Single-character names map to themselves; unknown names become
	/// [`KeySymbol::Other`].
	pub fn from_keyval_name(name: &str) -> Self {
		let mut chars = name.chars();
		if let (Some(c), None) = (chars.next(), chars.next()) {
			return Self::Char(c);
		}

		if name == "Escape" {
			return Self::Escape;
		}
		if MODIFIER_NAMES.contains(&name) {
			return Self::ModifierKey;
		}
		PUNCTUATION_NAMES
			.iter()
			.find(|(n, _)| *n == name)
			.map_or_else(|| Self::Other(name.to_string()), |&(_, c)| Self::Char(c))
	}

	/// Returns the character this key produces, if any.
	pub fn as_char(&self) -> Option<char> {
		match self {
			Self::Char(c) => Some(*c),
			_ => None,
		}
	}

	/// Returns true for the cancel key.
	pub fn is_escape(&self) -> bool {
		matches!(self, Self::Escape)
	}

	/// Returns true for a bare modifier press.
	pub fn is_modifier_key(&self) -> bool {
		matches!(self, Self::ModifierKey)
	}
}

impl From<char> for KeySymbol {
	fn from(c: char) -> Self {
		Self::Char(c)
	}
}
