//! Command error types.

use skel_primitives::EditError;
use thiserror::Error;

/// Errors that can occur while dispatching or executing a command.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CommandError {
	/// Command id was not found among registered commands.
	#[error("command not found: {0}")]
	NotFound(String),
	/// The host rejected the edit.
	#[error("edit failed: {0}")]
	Edit(#[from] EditError),
	/// Catch-all for other errors.
	#[error("{0}")]
	Other(String),
}
