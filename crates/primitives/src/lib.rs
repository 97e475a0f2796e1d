//! Core text types for template insertion: ranges, selections and transactions.

/// Edit failure types.
pub mod edit;
/// Identifier types for editor entities.
pub mod ids;
/// Character-indexed ranges.
pub mod range;
/// Cursor and selection state for a single view.
pub mod selection;
/// Atomic, invertible document changes.
pub mod transaction;

pub use edit::EditError;
pub use ids::ViewId;
pub use range::{CharIdx, CharLen, Range};
pub use ropey::{Rope, RopeSlice};
pub use selection::Selection;
pub use transaction::{Bias, ChangeSet, Transaction};
