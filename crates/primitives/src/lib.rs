//! Core types for text objects: character ranges, the document navigation
//! interface, and a rope-backed reference document.

/// Document navigation and mutation interface.
pub mod document;
/// Edit errors reported by host documents.
pub mod edit;
/// Half-open character ranges.
pub mod range;
/// Rope line utilities.
pub mod rope;
/// Rope-backed reference document.
pub mod rope_document;
/// Word and sentence segmentation.
pub mod segment;

pub use document::{Document, DocumentMut, TextUnit};
pub use edit::EditError;
pub use range::{CharIdx, CharLen, Range};
pub use rope_document::RopeDocument;
pub use ropey::{Rope, RopeSlice};
