//! Extension lifecycle.
//!
//! An [`Extension`] is started once with an [`ExtensionContext`], registers
//! its commands through the host's [`CommandHost`], and hands every returned
//! [`Disposable`] to the context. The [`ExtensionHost`] owns the single
//! extension instance and releases those handles on deactivation.

mod context;
mod disposable;
mod error;
mod host;
mod snippet;

#[cfg(test)]
mod tests;

pub use context::{CommandHost, ExtensionContext};
pub use disposable::{Disposable, RegistrationId, Subscriptions};
pub use error::ExtensionError;
pub use host::ExtensionHost;
pub use snippet::SnippetExtension;

/// An extension with an explicit start/stop lifecycle.
pub trait Extension {
	/// Stable identifier used in logs.
	fn id(&self) -> &'static str;

	/// Activates the extension.
	///
	/// Registrations made through `ctx` are released by the host after
	/// [`Extension::stop`], or immediately if this returns an error.
	fn start(&mut self, ctx: &mut ExtensionContext<'_>) -> Result<(), ExtensionError>;

	/// Deactivates the extension.
	fn stop(&mut self) {}
}
