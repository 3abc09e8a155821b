//! Text object command grammar.
//!
//! A command is two keys: a modifier (`a` or `i`) followed by an object key
//! (`w`, `(`, `"`, ...). [`CommandParser`] consumes one [`KeySymbol`] at a
//! time and reports a [`ParseResult`]; the keys it accepts come from a
//! [`Keymap`].

pub mod key;
pub mod keymap;
pub mod parser;

pub use key::KeySymbol;
pub use keymap::Keymap;
pub use parser::{CommandParser, ParseResult, ParserState};
