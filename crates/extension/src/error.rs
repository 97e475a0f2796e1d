use thiserror::Error;

/// Errors raised while activating an extension.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ExtensionError {
	/// Another registration already owns this command id.
	#[error("command already registered: {0}")]
	DuplicateCommand(&'static str),
	/// The extension was activated twice without deactivating.
	#[error("extension already active")]
	AlreadyActive,
}
