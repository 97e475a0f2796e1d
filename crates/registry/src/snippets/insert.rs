use skel_primitives::{CharIdx, CharLen, EditError, ViewId};
use tracing::{debug, trace};

use crate::commands::CommandEditorOps;
use crate::notifications::keys;

/// Result of one guarded insertion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InsertOutcome {
	/// The text was inserted as one edit.
	Inserted {
		/// View whose document was edited.
		view: ViewId,
		/// Character offset the text was inserted at.
		at: CharIdx,
		/// Inserted length in characters.
		len: CharLen,
	},
	/// No editable view was focused; the user was notified and nothing changed.
	NoActiveEditor,
}

/// Inserts `text` at the start of the active view's selection.
///
/// With no editable view the user gets a [`keys::NO_ACTIVE_EDITOR`]
/// notification and the call still succeeds. Every invocation checks the
/// editor state afresh.
///
/// # Errors
///
/// Propagates the host's [`EditError`] if it rejects the insertion.
pub fn insert_template(editor: &mut dyn CommandEditorOps, text: &str) -> Result<InsertOutcome, EditError> {
	let Some(view) = editor.active_view() else {
		debug!("template insertion skipped: no active editor");
		editor.emit(keys::NO_ACTIVE_EDITOR.emit());
		return Ok(InsertOutcome::NoActiveEditor);
	};

	let at = view.selection.start();
	editor.insert_at(view.id, at, text)?;

	let len = text.chars().count();
	trace!(view = %view.id, at, len, "inserted template");
	Ok(InsertOutcome::Inserted { view: view.id, at, len })
}
