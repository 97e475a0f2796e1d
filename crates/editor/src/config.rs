//! Editor configuration.
//!
//! Configuration is written in TOML. Every section and key is optional;
//! missing values fall back to [`EditorConfig::default`].
//!
//! ```toml
//! [notifications]
//! max_pending = 64
//!
//! [undo]
//! limit = 100
//! ```

use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

use crate::undo_store::MAX_UNDO;

/// Errors that can occur when loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
	/// Error parsing TOML syntax or schema.
	#[error("TOML parse error: {0}")]
	Toml(#[from] toml::de::Error),

	/// Error reading a configuration file.
	#[error("I/O error reading {path}: {error}")]
	Io {
		/// Path to the file that failed to read.
		path: PathBuf,
		/// The underlying I/O error.
		error: std::io::Error,
	},

	/// A value parsed but is not usable.
	#[error("invalid value: {0}")]
	Invalid(String),
}

/// Result type for configuration operations.
pub type Result<T> = std::result::Result<T, ConfigError>;

/// Root configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct EditorConfig {
	/// Notification queue settings.
	pub notifications: NotificationConfig,
	/// Per-document undo history settings.
	pub undo: UndoConfig,
}

/// Notification queue settings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct NotificationConfig {
	/// Pending notifications kept before the oldest are dropped.
	pub max_pending: usize,
}

impl Default for NotificationConfig {
	fn default() -> Self {
		Self { max_pending: 64 }
	}
}

/// Per-document undo history settings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct UndoConfig {
	/// Maximum undo steps kept per document.
	pub limit: usize,
}

impl Default for UndoConfig {
	fn default() -> Self {
		Self { limit: MAX_UNDO }
	}
}

impl EditorConfig {
	/// Parse a TOML string into an [`EditorConfig`].
	pub fn parse(input: &str) -> Result<Self> {
		let config: Self = toml::from_str(input)?;
		config.validate()?;
		Ok(config)
	}

	/// Load configuration from a file.
	pub fn load(path: impl AsRef<Path>) -> Result<Self> {
		let path = path.as_ref();
		let content = std::fs::read_to_string(path).map_err(|error| ConfigError::Io {
			path: path.to_path_buf(),
			error,
		})?;
		Self::parse(&content)
	}

	fn validate(&self) -> Result<()> {
		if self.notifications.max_pending == 0 {
			return Err(ConfigError::Invalid("notifications.max_pending must be greater than 0".into()));
		}
		if self.undo.limit == 0 {
			return Err(ConfigError::Invalid("undo.limit must be greater than 0".into()));
		}
		Ok(())
	}
}
