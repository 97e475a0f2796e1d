//! Transaction-based undo history for a single document.
//!
//! Each committed edit stores its forward and inverse transaction plus the
//! selections around it. One committed edit is exactly one undo step.

use skel_primitives::{Selection, Transaction};

/// Default maximum undo history size.
pub const MAX_UNDO: usize = 100;

/// One undoable edit.
#[derive(Debug, Clone)]
pub struct TxnUndoStep {
	/// Transaction to apply for undo (reverses the original edit).
	pub undo_tx: Transaction,
	/// Transaction to apply for redo (re-applies the original edit).
	pub redo_tx: Transaction,
	/// Selection before the edit.
	pub before: Selection,
	/// Selection after the edit.
	pub after: Selection,
}

/// Undo and redo stacks with a bounded depth.
#[derive(Debug)]
pub struct TxnUndoStore {
	undo_stack: Vec<TxnUndoStep>,
	redo_stack: Vec<TxnUndoStep>,
	limit: usize,
}

impl TxnUndoStore {
	/// Creates an empty store keeping at most `limit` steps.
	pub fn with_limit(limit: usize) -> Self {
		Self {
			undo_stack: Vec::new(),
			redo_stack: Vec::new(),
			limit: limit.max(1),
		}
	}

	/// Records a committed edit, clearing redo history.
	///
	/// Drops the oldest step once the limit is exceeded.
	pub fn record(&mut self, step: TxnUndoStep) {
		self.undo_stack.push(step);
		self.redo_stack.clear();

		if self.undo_stack.len() > self.limit {
			self.undo_stack.remove(0);
		}
	}

	/// Moves the newest step to the redo stack and returns it.
	pub fn undo(&mut self) -> Option<&TxnUndoStep> {
		let step = self.undo_stack.pop()?;
		self.redo_stack.push(step);
		self.redo_stack.last()
	}

	/// Moves the newest undone step back to the undo stack and returns it.
	pub fn redo(&mut self) -> Option<&TxnUndoStep> {
		let step = self.redo_stack.pop()?;
		self.undo_stack.push(step);
		self.undo_stack.last()
	}
}
