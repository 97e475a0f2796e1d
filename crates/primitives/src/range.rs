/// A position in the text, measured in characters (not bytes).
pub type CharIdx = usize;

/// A length or count in the text, measured in characters (not bytes).
pub type CharLen = usize;

/// A text range defined by anchor and head positions.
///
/// The anchor is the fixed end, and the head is the cursor. A range whose
/// anchor equals its head is a bare cursor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Range {
	/// The fixed end of the range.
	pub anchor: CharIdx,
	/// The moving end of the range (cursor position).
	pub head: CharIdx,
}

impl Range {
	/// Creates a new range from anchor to head.
	pub fn new(anchor: CharIdx, head: CharIdx) -> Self {
		Self { anchor, head }
	}

	/// Creates a zero-width range (cursor) at the given position.
	pub fn point(pos: CharIdx) -> Self {
		Self::new(pos, pos)
	}

	/// Returns the start of the range regardless of direction.
	#[inline]
	pub fn from(&self) -> CharIdx {
		std::cmp::min(self.anchor, self.head)
	}

	/// Returns the end of the range (exclusive) regardless of direction.
	#[inline]
	pub fn to(&self) -> CharIdx {
		std::cmp::max(self.anchor, self.head)
	}

	/// Applies a function to both anchor and head.
	pub fn map(self, mut f: impl FnMut(CharIdx) -> CharIdx) -> Self {
		Self {
			anchor: f(self.anchor),
			head: f(self.head),
		}
	}

	/// Clamps anchor and head to `[0, max_char]`.
	pub fn clamp(&self, max_char: CharIdx) -> Self {
		Self {
			anchor: self.anchor.min(max_char),
			head: self.head.min(max_char),
		}
	}
}

impl Default for Range {
	fn default() -> Self {
		Self::point(0)
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn forward_extent() {
		let r = Range::new(5, 10);
		assert_eq!(r.from(), 5);
		assert_eq!(r.to(), 10);
	}

	#[test]
	fn backward_extent_starts_at_head() {
		let r = Range::new(10, 5);
		assert_eq!(r.from(), 5);
		assert_eq!(r.to(), 10);
	}

	#[test]
	fn point_has_no_extent() {
		let r = Range::point(6);
		assert_eq!(r.from(), 6);
		assert_eq!(r.to(), 6);
	}

	#[test]
	fn clamp_limits_both_ends() {
		let r = Range::new(3, 42).clamp(7);
		assert_eq!(r, Range::new(3, 7));
	}
}
