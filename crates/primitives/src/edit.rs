use thiserror::Error;

use crate::range::{CharIdx, CharLen};

/// Reasons an edit cannot be applied to a document.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EditError {
	/// The edit position lies past the end of the document.
	#[error("position {pos} is out of bounds for document of length {len}")]
	OutOfBounds {
		/// Requested character position.
		pos: CharIdx,
		/// Document length in characters.
		len: CharLen,
	},
	/// The target view does not accept edits.
	#[error("view is read-only")]
	ReadOnly,
	/// The target view no longer exists.
	#[error("view not found")]
	ViewNotFound,
}
