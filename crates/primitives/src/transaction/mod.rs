//! Atomic document changes.
//!
//! A [`Transaction`] wraps a [`ChangeSet`]. Hosts commit one transaction per
//! user-visible edit, which makes it the unit of undo.

mod changeset;
mod types;


pub use changeset::ChangeSet;
use types::Change;
pub use types::{Bias, Insertion, Operation};

use crate::edit::EditError;
use crate::range::CharIdx;
use crate::{Rope, RopeSlice, Selection};

/// A changeset committed as one edit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transaction {
	changes: ChangeSet,
}

impl Transaction {
	/// Builds a transaction from sorted, non-overlapping changes.
	///
	/// Change bounds are clamped to the document length.
	fn change<I>(doc: RopeSlice, changes: I) -> Self
	where
		I: IntoIterator<Item = Change>,
	{
		let len = doc.len_chars();
		let mut cs = ChangeSet::default();
		let mut last = 0;

		for change in changes {
			let start = change.start.clamp(last, len);
			let end = change.end.clamp(start, len);
			cs.retain(start - last);
			cs.delete(end - start);
			if let Some(text) = change.replacement {
				cs.insert(text);
			}
			last = end;
		}
		cs.retain(len - last);

		Self { changes: cs }
	}

	/// Builds a single insertion of `text` at `pos`.
	///
	/// # Errors
	///
	/// Returns [`EditError::OutOfBounds`] if `pos` is past the end of `doc`.
	pub fn insert_at(doc: RopeSlice, pos: CharIdx, text: String) -> Result<Self, EditError> {
		let len = doc.len_chars();
		if pos > len {
			return Err(EditError::OutOfBounds { pos, len });
		}

		Ok(Self::change(
			doc,
			[Change {
				start: pos,
				end: pos,
				replacement: Some(text),
			}],
		))
	}

	/// Returns the underlying changeset.
	pub fn changes(&self) -> &ChangeSet {
		&self.changes
	}

	/// Applies the changes to `doc` in place.
	pub fn apply(&self, doc: &mut Rope) {
		self.changes.apply(doc);
	}

	/// Builds the transaction that undoes this one.
	///
	/// `original` must be the document before this transaction was applied.
	pub fn invert(&self, original: &Rope) -> Self {
		Self {
			changes: self.changes.invert(original),
		}
	}

	/// Maps a selection through the changes.
	pub fn map_selection(&self, selection: &Selection) -> Selection {
		selection.map(&self.changes)
	}
}
