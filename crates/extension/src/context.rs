use skel_registry::CommandDef;
use tracing::debug;

use crate::disposable::{Disposable, RegistrationId, Subscriptions};
use crate::error::ExtensionError;

/// Registration half of the host contract.
pub trait CommandHost {
	/// Binds `def.id` to `def`, returning the token that releases it.
	///
	/// # Errors
	///
	/// Returns [`ExtensionError::DuplicateCommand`] if the id is taken.
	fn register_command(&mut self, def: &'static CommandDef) -> Result<Disposable, ExtensionError>;

	/// Releases a registration. Returns `false` for unknown ids.
	fn unregister_command(&mut self, id: RegistrationId) -> bool;
}

/// Handle given to [`Extension::start`](crate::Extension::start).
pub struct ExtensionContext<'a> {
	host: &'a mut dyn CommandHost,
	subscriptions: &'a mut Subscriptions,
}

impl<'a> ExtensionContext<'a> {
	/// Creates a context that records registrations into `subscriptions`.
	pub fn new(host: &'a mut dyn CommandHost, subscriptions: &'a mut Subscriptions) -> Self {
		Self { host, subscriptions }
	}

	/// Registers a command and keeps its disposable for deactivation.
	pub fn register_command(&mut self, def: &'static CommandDef) -> Result<(), ExtensionError> {
		let disposable = self.host.register_command(def)?;
		debug!(command = def.id, registration = disposable.id().0, "registered command");
		self.subscriptions.push(disposable);
		Ok(())
	}
}
