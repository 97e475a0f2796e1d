//! Views: a window onto a document with its own selection.

use skel_primitives::{Selection, ViewId};

use crate::document::DocumentId;

/// A view of a document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct View {
	/// View identifier.
	pub id: ViewId,
	/// Document shown in this view.
	pub doc: DocumentId,
	/// Current selection.
	pub selection: Selection,
	/// Whether programmatic edits are refused.
	pub readonly: bool,
}

impl View {
	/// Creates an editable view with the cursor at the start.
	pub fn new(id: ViewId, doc: DocumentId) -> Self {
		Self {
			id,
			doc,
			selection: Selection::default(),
			readonly: false,
		}
	}
}
