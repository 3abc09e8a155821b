//! Configuration for the text object engine.
//!
//! Configuration is written in TOML:
//!
//! ```toml
//! [keys.modifiers]
//! o = "outer"
//!
//! [keys.objects]
//! b = "parenthesized"
//! parenleft = "parenthesized"
//! q = "double-quoted"
//!
//! [log]
//! filter = "textobj=info"
//! ```
//!
//! Every section is optional. Extra bindings are layered over
//! [`Keymap::builtin`]; rebinding a builtin key replaces it and is logged.

use std::path::Path;

use indexmap::IndexMap;
use serde::Deserialize;
use textobj_input::{KeySymbol, Keymap};
use textobj_objects::{Modifier, ObjectKind};
use tracing::{debug, warn};

mod error;

pub use error::{ConfigError, Result};

/// Parsed configuration.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
	/// Extra key bindings.
	pub keys: KeyConfig,
	/// Logging options.
	pub log: LogConfig,
}

/// Key bindings added to the builtin keymap, keyed by key name.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct KeyConfig {
	/// Keys accepted as the first key of a command.
	pub modifiers: IndexMap<String, Modifier>,
	/// Keys accepted as the second key of a command.
	pub objects: IndexMap<String, ObjectKind>,
}

/// Logging options.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LogConfig {
	/// A `tracing` filter directive, used when `RUST_LOG` is unset.
	pub filter: Option<String>,
}

impl Config {
	/// Reads and parses the file at `path`.
	pub fn load(path: impl AsRef<Path>) -> Result<Self> {
		let path = path.as_ref();
		let content = std::fs::read_to_string(path).map_err(|error| ConfigError::Io {
			path: path.to_path_buf(),
			error,
		})?;
		let config = Self::from_toml_str(&content)?;
		debug!(
			path = %path.display(),
			modifiers = config.keys.modifiers.len(),
			objects = config.keys.objects.len(),
			"loaded config"
		);
		Ok(config)
	}

	/// Parses configuration from a TOML string.
	pub fn from_toml_str(input: &str) -> Result<Self> {
		Ok(toml::from_str(input)?)
	}

	/// Builds the keymap: builtin bindings plus the configured ones.
	pub fn keymap(&self) -> Result<Keymap> {
		let mut keymap = Keymap::builtin();

		for (name, &modifier) in &self.keys.modifiers {
			let key = parse_key(name)?;
			if let Some(prev) = keymap.bind_modifier(key, modifier)
				&& prev != modifier
			{
				warn!(%key, ?prev, ?modifier, "config overrides builtin modifier key");
			}
		}

		for (name, &kind) in &self.keys.objects {
			let key = parse_key(name)?;
			if let Some(prev) = keymap.bind_object(key, kind)
				&& prev != kind
			{
				warn!(%key, ?prev, ?kind, "config overrides builtin object key");
			}
		}

		Ok(keymap)
	}
}

/// Resolves a configured key name to the character it produces.
fn parse_key(name: &str) -> Result<char> {
	KeySymbol::from_keyval_name(name)
		.as_char()
		.ok_or_else(|| ConfigError::InvalidKey(name.to_string()))
}
