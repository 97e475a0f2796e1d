//! Notification registry.
//!
//! Notifications are declared once as static definitions and emitted through
//! typed [`NotificationKey`] handles, so every message a command can show is
//! known at build time.

use std::time::Duration;

#[macro_use]
mod macros;

pub mod keys;

/// Severity level for notifications.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Level {
	/// Warning message.
	Warn,
	/// Error message.
	Error,
}

/// Controls automatic dismissal of notifications.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AutoDismiss {
	/// Notification automatically dismisses after the specified duration.
	After(Duration),
}

impl AutoDismiss {
	/// Default auto-dismiss duration (4 seconds).
	pub const DEFAULT: Self = Self::After(Duration::from_secs(4));
}

/// Static notification definition.
#[derive(Debug, PartialEq, Eq)]
pub struct NotificationDef {
	/// Unique identifier for this notification type.
	pub id: &'static str,
	/// Severity level.
	pub level: Level,
	/// Auto-dismiss behavior.
	pub auto_dismiss: AutoDismiss,
}

impl NotificationDef {
	/// Creates a new notification definition.
	pub const fn new(id: &'static str, level: Level, auto_dismiss: AutoDismiss) -> Self {
		Self { id, level, auto_dismiss }
	}
}

/// Runtime notification instance ready to display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
	/// Reference to the static definition.
	pub def: &'static NotificationDef,
	/// The formatted message content.
	pub message: String,
}

impl Notification {
	/// Creates a new notification instance.
	pub fn new(def: &'static NotificationDef, message: impl Into<String>) -> Self {
		Self {
			def,
			message: message.into(),
		}
	}

	/// Returns the definition id.
	pub fn id(&self) -> &'static str {
		self.def.id
	}

	/// Returns the notification level.
	pub fn level(&self) -> Level {
		self.def.level
	}

	/// Returns the auto-dismiss behavior.
	pub fn auto_dismiss(&self) -> AutoDismiss {
		self.def.auto_dismiss
	}
}

/// Typed key referencing a notification definition with a static message.
#[derive(Clone, Copy)]
pub struct NotificationKey {
	def: &'static NotificationDef,
	message: &'static str,
}

impl NotificationKey {
	/// Creates a new notification key with a static message.
	pub const fn new(def: &'static NotificationDef, message: &'static str) -> Self {
		Self { def, message }
	}

	/// Creates a notification instance from this key.
	pub fn emit(self) -> Notification {
		Notification::new(self.def, self.message)
	}
}

impl core::fmt::Debug for NotificationKey {
	fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
		f.debug_struct("NotificationKey")
			.field("id", &self.def.id)
			.field("message", &self.message)
			.finish()
	}
}

impl From<NotificationKey> for Notification {
	fn from(key: NotificationKey) -> Self {
		key.emit()
	}
}
