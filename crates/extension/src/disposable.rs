use tracing::trace;

use crate::context::CommandHost;

/// Host-issued identifier of a single registration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RegistrationId(pub u64);

/// Release token for a registration.
///
/// Consuming [`Disposable::dispose`] unregisters the command from the host
/// that issued it.
#[derive(Debug, PartialEq, Eq)]
#[must_use = "dropping a Disposable leaks its registration until the host is torn down"]
pub struct Disposable {
	id: RegistrationId,
	command_id: &'static str,
}

impl Disposable {
	/// Creates a token for a registration the host just made.
	pub fn new(id: RegistrationId, command_id: &'static str) -> Self {
		Self { id, command_id }
	}

	/// Returns the registration id.
	pub fn id(&self) -> RegistrationId {
		self.id
	}

	/// Returns the command id this token releases.
	pub fn command_id(&self) -> &'static str {
		self.command_id
	}

	/// Releases the registration.
	///
	/// Returns `false` if the host no longer knew about it.
	pub fn dispose(self, host: &mut dyn CommandHost) -> bool {
		let released = host.unregister_command(self.id);
		trace!(command = self.command_id, released, "disposed registration");
		released
	}
}

/// Owned list of disposables collected during activation.
#[derive(Debug, Default)]
pub struct Subscriptions {
	items: Vec<Disposable>,
}

impl Subscriptions {
	/// Creates an empty list.
	pub fn new() -> Self {
		Self::default()
	}

	/// Takes ownership of a disposable.
	pub fn push(&mut self, disposable: Disposable) {
		self.items.push(disposable);
	}

	/// Number of held disposables.
	pub fn len(&self) -> usize {
		self.items.len()
	}

	/// Returns true if nothing is held.
	pub fn is_empty(&self) -> bool {
		self.items.is_empty()
	}

	/// Iterates over the held disposables in registration order.
	pub fn iter(&self) -> impl Iterator<Item = &Disposable> {
		self.items.iter()
	}

	/// Disposes everything in registration order, leaving the list empty.
	///
	/// Returns how many registrations the host actually released.
	pub fn dispose_all(&mut self, host: &mut dyn CommandHost) -> usize {
		self.items.drain(..).map(|d| d.dispose(host)).filter(|released| *released).count()
	}
}
