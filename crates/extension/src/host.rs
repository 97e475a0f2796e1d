use tracing::{debug, warn};

use crate::context::{CommandHost, ExtensionContext};
use crate::disposable::Subscriptions;
use crate::error::ExtensionError;
use crate::Extension;

/// Owns one extension instance and drives its lifecycle.
#[derive(Debug)]
pub struct ExtensionHost<E> {
	extension: E,
	subscriptions: Subscriptions,
	active: bool,
}

impl<E: Extension> ExtensionHost<E> {
	/// Wraps an inactive extension.
	pub fn new(extension: E) -> Self {
		Self {
			extension,
			subscriptions: Subscriptions::new(),
			active: false,
		}
	}

	/// Starts the extension against `host`.
	///
	/// A failed start releases whatever was registered before the failure.
	pub fn activate(&mut self, host: &mut dyn CommandHost) -> Result<(), ExtensionError> {
		if self.active {
			return Err(ExtensionError::AlreadyActive);
		}

		let result = {
			let mut ctx = ExtensionContext::new(&mut *host, &mut self.subscriptions);
			self.extension.start(&mut ctx)
		};

		if let Err(err) = result {
			warn!(extension = self.extension.id(), error = %err, "activation failed");
			self.subscriptions.dispose_all(host);
			return Err(err);
		}

		self.active = true;
		debug!(extension = self.extension.id(), subscriptions = self.subscriptions.len(), "activated");
		Ok(())
	}

	/// Stops the extension and disposes its subscriptions.
	///
	/// Does nothing if the extension is not active.
	pub fn deactivate(&mut self, host: &mut dyn CommandHost) {
		if !self.active {
			return;
		}

		self.extension.stop();
		let released = self.subscriptions.dispose_all(host);
		self.active = false;
		debug!(extension = self.extension.id(), released, "deactivated");
	}

	/// Returns true between a successful activation and deactivation.
	pub fn is_active(&self) -> bool {
		self.active
	}

	/// Disposables held for the active extension.
	pub fn subscriptions(&self) -> &Subscriptions {
		&self.subscriptions
	}

	/// The hosted extension.
	pub fn extension(&self) -> &E {
		&self.extension
	}
}
