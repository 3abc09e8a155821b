//! Built-in text object resolution.

pub(crate) mod line;
pub(crate) mod surround;
pub(crate) mod word;
