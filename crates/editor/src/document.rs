//! Documents: text content plus undo history.

use skel_primitives::{Rope, RopeSlice, Selection, Transaction};
use tracing::trace;

use crate::undo_store::{TxnUndoStep, TxnUndoStore};

/// Identifier of a document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct DocumentId(pub u64);

/// A text buffer owned by the editor.
#[derive(Debug)]
pub struct Document {
	id: DocumentId,
	content: Rope,
	history: TxnUndoStore,
	version: u64,
}

impl Document {
	/// Creates a document holding `text`.
	pub fn new(id: DocumentId, text: &str, undo_limit: usize) -> Self {
		Self {
			id,
			content: Rope::from(text),
			history: TxnUndoStore::with_limit(undo_limit),
			version: 0,
		}
	}

	/// Returns the document content.
	pub fn content(&self) -> RopeSlice<'_> {
		self.content.slice(..)
	}

	/// Returns the content length in characters.
	pub fn len_chars(&self) -> usize {
		self.content.len_chars()
	}

	/// Returns the edit counter, bumped by every commit, undo and redo.
	pub fn version(&self) -> u64 {
		self.version
	}

	/// Applies `tx` and records it as one undo step.
	pub fn commit(&mut self, tx: Transaction, before: Selection, after: Selection) {
		let original = self.content.clone();
		tx.apply(&mut self.content);
		let undo_tx = tx.invert(&original);
		self.history.record(TxnUndoStep {
			undo_tx,
			redo_tx: tx,
			before,
			after,
		});
		self.version += 1;
		trace!(doc = self.id.0, version = self.version, len = self.len_chars(), "committed edit");
	}

	/// Reverts the newest edit, returning the selection it started from.
	pub fn undo(&mut self) -> Option<Selection> {
		let step = self.history.undo()?;
		step.undo_tx.apply(&mut self.content);
		let before = step.before;
		self.version += 1;
		Some(before)
	}

	/// Re-applies the newest undone edit, returning the selection after it.
	pub fn redo(&mut self) -> Option<Selection> {
		let step = self.history.redo()?;
		step.redo_tx.apply(&mut self.content);
		let after = step.after;
		self.version += 1;
		Some(after)
	}
}

impl std::fmt::Display for Document {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		write!(f, "{}", self.content)
	}
}
