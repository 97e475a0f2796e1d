use crate::range::{CharIdx, Range};
use crate::transaction::{Bias, ChangeSet};

#[cfg(test)]
mod tests;

/// Cursor state of a view.
///
/// Only a primary range is tracked; edits always target its start.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Selection {
	primary: Range,
}

impl Selection {
	/// Creates a selection from a single range.
	pub fn new(primary: Range) -> Self {
		Self { primary }
	}

	/// Creates a single-range selection.
	pub fn single(anchor: CharIdx, head: CharIdx) -> Self {
		Self::new(Range::new(anchor, head))
	}

	/// Creates a point selection (zero-width cursor).
	pub fn point(pos: CharIdx) -> Self {
		Self::single(pos, pos)
	}

	/// Returns the primary range.
	pub fn primary(&self) -> Range {
		self.primary
	}

	/// Returns the start of the primary range.
	///
	/// This is the cursor position when the selection is empty.
	pub fn start(&self) -> CharIdx {
		self.primary.from()
	}

	/// Maps this selection through a changeset.
	///
	/// Both ends use [`Bias::Right`], so a cursor sitting on an insertion
	/// point ends up after the inserted text.
	pub fn map(&self, changes: &ChangeSet) -> Self {
		Self::new(self.primary.map(|pos| changes.map_pos(pos, Bias::Right)))
	}

	/// Clamps the selection to `[0, max_char]`.
	pub fn clamp(&mut self, max_char: CharIdx) {
		self.primary = self.primary.clamp(max_char);
	}

	/// Returns `true` if both range ends are within `[0, len]`.
	#[inline]
	pub fn is_in_bounds(&self, len: CharIdx) -> bool {
		self.primary.anchor <= len && self.primary.head <= len
	}
}

impl Default for Selection {
	fn default() -> Self {
		Self::point(0)
	}
}
