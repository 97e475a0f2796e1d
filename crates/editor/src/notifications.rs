//! Editor notification center.
//!
//! Queues typed notifications for whatever presentation layer drains them.
//! Notifications are fire-and-forget: nothing tracks acknowledgment.

use std::collections::VecDeque;

use skel_registry::notifications::Notification;
use tracing::trace;

pub struct NotificationCenter {
	pending: VecDeque<Notification>,
	max_pending: usize,
}

impl NotificationCenter {
	pub fn new(max_pending: usize) -> Self {
		Self {
			pending: VecDeque::new(),
			max_pending: max_pending.max(1),
		}
	}

	pub fn is_empty(&self) -> bool {
		self.pending.is_empty()
	}

	pub fn len(&self) -> usize {
		self.pending.len()
	}

	/// Queues a notification, dropping the oldest once full.
	pub fn push(&mut self, notification: Notification) {
		if self.pending.len() == self.max_pending
			&& let Some(dropped) = self.pending.pop_front()
		{
			trace!(id = dropped.id(), "notification queue full, dropped oldest");
		}
		self.pending.push_back(notification);
	}

	pub fn take_pending(&mut self) -> Vec<Notification> {
		self.pending.drain(..).collect()
	}
}

#[cfg(test)]
mod tests {
	use skel_registry::notifications::keys;

	use super::*;

	#[test]
	fn take_pending_drains_in_order() {
		let mut center = NotificationCenter::new(8);
		center.push(keys::NO_ACTIVE_EDITOR.emit());
		center.push(keys::UNKNOWN_COMMAND.emit());
		let taken: Vec<_> = center.take_pending().into_iter().map(|n| n.message).collect();
		assert_eq!(taken, ["No active editor", "Unknown command"]);
		assert!(center.is_empty());
	}

	#[test]
	fn full_queue_drops_oldest() {
		let mut center = NotificationCenter::new(2);
		center.push(keys::UNKNOWN_COMMAND.emit());
		center.push(keys::NO_ACTIVE_EDITOR.emit());
		center.push(keys::NO_ACTIVE_EDITOR.emit());
		assert_eq!(center.len(), 2);
		assert!(center.take_pending().iter().all(|n| n.message == "No active editor"));
	}

	#[test]
	fn zero_capacity_keeps_newest() {
		let mut center = NotificationCenter::new(0);
		center.push(keys::UNKNOWN_COMMAND.emit());
		center.push(keys::NO_ACTIVE_EDITOR.emit());
		let taken: Vec<_> = center.take_pending().into_iter().map(|n| n.message).collect();
		assert_eq!(taken, ["No active editor"]);
	}
}
