//! Command registry.
//!
//! A command is a static [`CommandDef`] binding an externally visible id to a
//! synchronous handler. Hosts run handlers with a [`CommandContext`] that
//! exposes the editor through [`CommandEditorOps`].

use std::any::Any;
use std::fmt;

use skel_primitives::{CharIdx, EditError, Selection, ViewId};

use crate::error::CommandError;
use crate::notifications::Notification;

#[macro_use]
mod macros;
#[cfg(feature = "commands-builtins")]
pub mod builtins;

/// Function signature for command handlers.
pub type CommandHandler = fn(&mut CommandContext<'_>) -> Result<CommandOutcome, CommandError>;

/// Simplified result type for command operations.
pub type CommandResult = Result<CommandOutcome, CommandError>;

/// Outcome of a command that did not fail.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandOutcome {
	/// Command changed the editor state.
	Applied,
	/// Command found nothing to act on and only informed the user.
	Skipped,
}

/// The view a command may edit, as reported by the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ActiveView {
	/// Host identifier of the focused view.
	pub id: ViewId,
	/// Current selection of that view.
	pub selection: Selection,
}

/// Editor operations available to commands.
///
/// This is the whole host contract commands rely on. Implementations own the
/// documents, their undo history and the notification surface.
pub trait CommandEditorOps {
	/// Emits a user-facing notification.
	fn emit(&mut self, notification: Notification);

	/// Returns the focused view if it accepts programmatic edits.
	///
	/// Read-only or missing views both report `None`.
	fn active_view(&self) -> Option<ActiveView>;

	/// Inserts `text` at `pos` in the document shown by `view`.
	///
	/// The insertion must be committed as a single undo step.
	fn insert_at(&mut self, view: ViewId, pos: CharIdx, text: &str) -> Result<(), EditError>;
}

/// Context provided to command handlers.
pub struct CommandContext<'a> {
	/// Editor operations interface.
	pub editor: &'a mut dyn CommandEditorOps,
	/// Extension-specific data attached to the command.
	pub user_data: Option<&'static (dyn Any + Sync)>,
}

impl<'a> CommandContext<'a> {
	/// Creates a context for running `def` against `editor`.
	pub fn new(editor: &'a mut dyn CommandEditorOps, def: &CommandDef) -> Self {
		Self {
			editor,
			user_data: def.user_data,
		}
	}

	/// Emits a type-safe notification.
	pub fn emit(&mut self, notification: impl Into<Notification>) {
		self.editor.emit(notification.into());
	}

	/// Extracts and downcasts user data to the expected type.
	pub fn require_user_data<T: Any + Sync>(&self) -> Result<&'static T, CommandError> {
		self.user_data
			.and_then(|d| {
				let any: &dyn Any = d;
				any.downcast_ref::<T>()
			})
			.ok_or_else(|| {
				CommandError::Other(format!(
					"Missing or invalid user data for command (expected {})",
					std::any::type_name::<T>()
				))
			})
	}
}

/// A registered command definition.
#[derive(Clone, Copy)]
pub struct CommandDef {
	/// Externally visible identifier, e.g. `snippet.if`.
	pub id: &'static str,
	/// Short handler name.
	pub name: &'static str,
	/// Human-readable description.
	pub description: &'static str,
	/// Function that executes the command.
	pub handler: CommandHandler,
	/// Extension-specific data attached to the command.
	pub user_data: Option<&'static (dyn Any + Sync)>,
}

impl CommandDef {
	/// Runs the handler against `editor`.
	pub fn execute(&self, editor: &mut dyn CommandEditorOps) -> CommandResult {
		let mut ctx = CommandContext::new(editor, self);
		(self.handler)(&mut ctx)
	}
}

impl fmt::Debug for CommandDef {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("CommandDef")
			.field("id", &self.id)
			.field("name", &self.name)
			.field("description", &self.description)
			.finish_non_exhaustive()
	}
}

/// Finds a builtin command by id.
#[cfg(feature = "commands-builtins")]
pub fn find_command(id: &str) -> Option<&'static CommandDef> {
	builtins::DEFS.iter().copied().find(|def| def.id == id)
}

/// Returns all builtin commands, sorted by id.
#[cfg(feature = "commands-builtins")]
pub fn all_commands() -> Vec<&'static CommandDef> {
	let mut defs = builtins::DEFS.to_vec();
	defs.sort_by_key(|def| def.id);
	defs
}
