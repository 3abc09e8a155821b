//! Applying text object commands to documents.
//!
//! [`apply`] resolves a [`TextObjectRequest`] and performs one operation on
//! the resolved range. [`ObjectSession`] wraps the command parser and the
//! dispatcher into the headless state a popup or prompt needs: which keys
//! were accepted so far, what the help line says, and when the interaction
//! is over.
//!
//! [`TextObjectRequest`]: textobj_objects::TextObjectRequest

mod dispatch;
mod session;

pub use dispatch::{Operation, Outcome, apply, apply_at_cursor};
pub use session::{ObjectSession, SessionEvent};
