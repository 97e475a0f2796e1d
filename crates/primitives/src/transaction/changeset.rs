use super::types::{Bias, Insertion, Operation};
use crate::Rope;
use crate::range::{CharIdx, CharLen};

/// A sequence of retain, delete and insert operations over a document.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ChangeSet {
	pub(super) changes: Vec<Operation>,
	/// Length of the source document before changes.
	pub(super) len: CharLen,
	/// Length of the document after applying changes.
	pub(super) len_after: CharLen,
}

impl ChangeSet {
	/// Returns the length of the document after applying changes.
	pub fn len_after(&self) -> CharLen {
		self.len_after
	}

	/// Returns a slice of all operations in this changeset.
	pub fn changes(&self) -> &[Operation] {
		&self.changes
	}

	/// Adds a retain operation, merging with a preceding retain.
	pub(crate) fn retain(&mut self, n: CharLen) {
		if n == 0 {
			return;
		}

		self.len += n;
		self.len_after += n;

		if let Some(Operation::Retain(count)) = self.changes.last_mut() {
			*count += n;
		} else {
			self.changes.push(Operation::Retain(n));
		}
	}

	/// Adds a delete operation, merging with a preceding delete.
	pub(crate) fn delete(&mut self, n: CharLen) {
		if n == 0 {
			return;
		}

		self.len += n;

		if let Some(Operation::Delete(count)) = self.changes.last_mut() {
			*count += n;
		} else {
			self.changes.push(Operation::Delete(n));
		}
	}

	/// Adds an insert operation.
	///
	/// Inserts are kept ahead of an adjacent delete so that equivalent
	/// changesets share one canonical form.
	pub(crate) fn insert(&mut self, text: String) {
		if text.is_empty() {
			return;
		}

		let ins = Insertion::new(text);
		self.len_after += ins.char_len();

		match self.changes.as_mut_slice() {
			[.., Operation::Insert(prev)] | [.., Operation::Insert(prev), Operation::Delete(_)] => {
				prev.push_str(&ins);
			}
			[.., last @ Operation::Delete(_)] => {
				let del = std::mem::replace(last, Operation::Insert(ins));
				self.changes.push(del);
			}
			_ => {
				self.changes.push(Operation::Insert(ins));
			}
		}
	}

	/// Applies this changeset to a document in place.
	pub fn apply(&self, doc: &mut Rope) {
		debug_assert_eq!(doc.len_chars(), self.len);

		let mut pos = 0;
		for op in &self.changes {
			match op {
				Operation::Retain(n) => {
					pos += n;
				}
				Operation::Delete(n) => {
					doc.remove(pos..pos + n);
				}
				Operation::Insert(ins) => {
					doc.insert(pos, ins.text());
					pos += ins.char_len();
				}
			}
		}
	}

	/// Builds the changeset that undoes this one.
	///
	/// `doc` must be the document as it was before this changeset was applied.
	pub fn invert(&self, doc: &Rope) -> ChangeSet {
		let mut result = ChangeSet {
			changes: Vec::new(),
			len: 0,
			len_after: 0,
		};

		let mut pos = 0;
		for op in &self.changes {
			match op {
				Operation::Retain(n) => {
					result.retain(*n);
					pos += n;
				}
				Operation::Delete(n) => {
					let deleted: String = doc.slice(pos..pos + n).chars().collect();
					result.insert(deleted);
					pos += n;
				}
				Operation::Insert(ins) => {
					result.delete(ins.char_len());
				}
			}
		}

		result
	}

	/// Maps a position through this changeset using the specified bias.
	pub fn map_pos(&self, pos: CharIdx, bias: Bias) -> CharIdx {
		let mut old_pos = 0;
		let mut new_pos = 0;

		for op in &self.changes {
			if old_pos > pos {
				break;
			}

			match op {
				Operation::Retain(n) => {
					if old_pos + n > pos {
						return new_pos + (pos - old_pos);
					}
					old_pos += n;
					new_pos += n;
				}
				Operation::Delete(n) => {
					if old_pos + n > pos {
						return new_pos;
					}
					old_pos += n;
				}
				Operation::Insert(ins) => {
					if !(old_pos == pos && bias == Bias::Left) {
						new_pos += ins.char_len();
					}
				}
			}
		}

		new_pos + (pos - old_pos)
	}
}
