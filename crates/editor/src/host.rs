use std::collections::{BTreeMap, HashMap};

use skel_extension::{CommandHost, Disposable, ExtensionError, RegistrationId};
use skel_primitives::{CharIdx, EditError, Selection, Transaction, ViewId};
use skel_registry::commands::CommandResult;
use skel_registry::notifications::{Notification, keys};
use skel_registry::{ActiveView, CommandDef, CommandEditorOps, CommandError};
use tracing::{debug, trace, trace_span, warn};

use crate::config::EditorConfig;
use crate::document::{Document, DocumentId};
use crate::notifications::NotificationCenter;
use crate::view::View;

#[cfg(test)]
mod tests;

/// A live command registration.
#[derive(Debug, Clone, Copy)]
struct Registration {
	id: RegistrationId,
	def: &'static CommandDef,
}

/// The editor: documents, views, focus, registered commands and
/// notifications.
pub struct Editor {
	config: EditorConfig,
	documents: HashMap<DocumentId, Document>,
	views: BTreeMap<ViewId, View>,
	focused: Option<ViewId>,
	commands: BTreeMap<&'static str, Registration>,
	notifications: NotificationCenter,
	next_id: u64,
}

impl Default for Editor {
	fn default() -> Self {
		Self::new(EditorConfig::default())
	}
}

impl Editor {
	/// Creates an empty editor with no views.
	pub fn new(config: EditorConfig) -> Self {
		let notifications = NotificationCenter::new(config.notifications.max_pending);
		Self {
			config,
			documents: HashMap::new(),
			views: BTreeMap::new(),
			focused: None,
			commands: BTreeMap::new(),
			notifications,
			next_id: 0,
		}
	}

	fn alloc_id(&mut self) -> u64 {
		self.next_id += 1;
		self.next_id
	}

	/// Returns the active configuration.
	pub fn config(&self) -> &EditorConfig {
		&self.config
	}

	/// Opens a new document holding `text` in a new, focused view.
	pub fn open(&mut self, text: &str) -> ViewId {
		let doc_id = DocumentId(self.alloc_id());
		let view_id = ViewId(self.alloc_id());
		self.documents
			.insert(doc_id, Document::new(doc_id, text, self.config.undo.limit));
		self.views.insert(view_id, View::new(view_id, doc_id));
		self.focused = Some(view_id);
		debug!(view = %view_id, doc = doc_id.0, "opened document");
		view_id
	}

	/// Opens another view onto the document shown by `view`.
	pub fn split(&mut self, view: ViewId) -> Option<ViewId> {
		let doc = self.views.get(&view)?.doc;
		let new_id = ViewId(self.alloc_id());
		self.views.insert(new_id, View::new(new_id, doc));
		Some(new_id)
	}

	/// Closes a view, dropping its document once no view shows it.
	pub fn close(&mut self, view: ViewId) -> bool {
		let Some(closed) = self.views.remove(&view) else {
			return false;
		};
		if self.focused == Some(view) {
			self.focused = None;
		}
		if !self.views.values().any(|v| v.doc == closed.doc) {
			self.documents.remove(&closed.doc);
		}
		debug!(view = %view, "closed view");
		true
	}

	/// Focuses `view`. Returns `false` if it does not exist.
	pub fn focus(&mut self, view: ViewId) -> bool {
		if !self.views.contains_key(&view) {
			return false;
		}
		self.focused = Some(view);
		true
	}

	/// Moves focus away from every text view.
	pub fn blur(&mut self) {
		self.focused = None;
	}

	/// Returns the focused view, editable or not.
	pub fn focused_view(&self) -> Option<ViewId> {
		self.focused
	}

	/// Marks a view read-only or editable.
	pub fn set_readonly(&mut self, view: ViewId, readonly: bool) -> bool {
		match self.views.get_mut(&view) {
			Some(v) => {
				v.readonly = readonly;
				true
			}
			None => false,
		}
	}

	/// Returns the view with the given id.
	pub fn view(&self, view: ViewId) -> Option<&View> {
		self.views.get(&view)
	}

	/// Returns the document shown by `view`.
	pub fn document(&self, view: ViewId) -> Option<&Document> {
		let doc = self.views.get(&view)?.doc;
		self.documents.get(&doc)
	}

	/// Returns the full text shown by `view`.
	pub fn text(&self, view: ViewId) -> Option<String> {
		self.document(view).map(|doc| doc.to_string())
	}

	/// Returns the selection of `view`.
	pub fn selection(&self, view: ViewId) -> Option<Selection> {
		self.views.get(&view).map(|v| v.selection)
	}

	/// Replaces the selection of `view`.
	///
	/// # Errors
	///
	/// Fails if the view is unknown or the selection exceeds the document.
	pub fn set_selection(&mut self, view: ViewId, selection: Selection) -> Result<(), EditError> {
		let len = self.document(view).ok_or(EditError::ViewNotFound)?.len_chars();
		if !selection.is_in_bounds(len) {
			return Err(EditError::OutOfBounds {
				pos: selection.primary().to(),
				len,
			});
		}
		let v = self.views.get_mut(&view).ok_or(EditError::ViewNotFound)?;
		v.selection = selection;
		Ok(())
	}

	/// Reverts the newest edit of the document shown by `view`.
	pub fn undo(&mut self, view: ViewId) -> bool {
		self.step_history(view, Document::undo)
	}

	/// Re-applies the newest undone edit of the document shown by `view`.
	pub fn redo(&mut self, view: ViewId) -> bool {
		self.step_history(view, Document::redo)
	}

	fn step_history(&mut self, view: ViewId, step: fn(&mut Document) -> Option<Selection>) -> bool {
		let Some(doc_id) = self.views.get(&view).map(|v| v.doc) else {
			return false;
		};
		let Some(doc) = self.documents.get_mut(&doc_id) else {
			return false;
		};
		let Some(selection) = step(doc) else {
			return false;
		};
		let len = doc.len_chars();

		for v in self.views.values_mut().filter(|v| v.doc == doc_id) {
			if v.id == view {
				v.selection = selection;
			}
			v.selection.clamp(len);
		}
		true
	}

	/// Runs the command registered under `id`.
	///
	/// Unknown ids notify the user and return [`CommandError::NotFound`].
	pub fn execute_command(&mut self, id: &str) -> CommandResult {
		let _span = trace_span!("command", id).entered();
		let Some(def) = self.commands.get(id).map(|reg| reg.def) else {
			warn!(id, "command not registered");
			self.emit(keys::UNKNOWN_COMMAND.emit());
			return Err(CommandError::NotFound(id.to_string()));
		};
		let outcome = def.execute(self);
		trace!(?outcome, "command finished");
		outcome
	}

	/// Returns the ids of all registered commands, sorted.
	pub fn registered_commands(&self) -> Vec<&'static str> {
		self.commands.keys().copied().collect()
	}

	/// Returns true if a command is registered under `id`.
	pub fn is_registered(&self, id: &str) -> bool {
		self.commands.contains_key(id)
	}

	/// Returns queued notifications.
	pub fn notifications(&self) -> &NotificationCenter {
		&self.notifications
	}

	/// Drains queued notifications.
	pub fn take_notifications(&mut self) -> Vec<Notification> {
		self.notifications.take_pending()
	}
}

impl CommandEditorOps for Editor {
	fn emit(&mut self, notification: Notification) {
		debug!(id = notification.id(), level = ?notification.level(), message = %notification.message, "notification");
		self.notifications.push(notification);
	}

	fn active_view(&self) -> Option<ActiveView> {
		let view = self.views.get(&self.focused?)?;
		if view.readonly {
			return None;
		}
		Some(ActiveView {
			id: view.id,
			selection: view.selection,
		})
	}

	fn insert_at(&mut self, view: ViewId, pos: CharIdx, text: &str) -> Result<(), EditError> {
		let target = self.views.get(&view).ok_or(EditError::ViewNotFound)?;
		if target.readonly {
			return Err(EditError::ReadOnly);
		}
		let doc_id = target.doc;
		let before = target.selection;

		let doc = self.documents.get_mut(&doc_id).ok_or(EditError::ViewNotFound)?;
		let tx = Transaction::insert_at(doc.content(), pos, text.to_owned())?;
		let after = tx.map_selection(&before);

		for v in self.views.values_mut().filter(|v| v.doc == doc_id) {
			v.selection = if v.id == view { after } else { tx.map_selection(&v.selection) };
		}
		doc.commit(tx, before, after);
		Ok(())
	}
}

impl CommandHost for Editor {
	fn register_command(&mut self, def: &'static CommandDef) -> Result<Disposable, ExtensionError> {
		if self.commands.contains_key(def.id) {
			return Err(ExtensionError::DuplicateCommand(def.id));
		}
		let id = RegistrationId(self.alloc_id());
		self.commands.insert(def.id, Registration { id, def });
		Ok(Disposable::new(id, def.id))
	}

	fn unregister_command(&mut self, id: RegistrationId) -> bool {
		let Some(command) = self.commands.iter().find(|(_, reg)| reg.id == id).map(|(k, _)| *k) else {
			return false;
		};
		self.commands.remove(command);
		debug!(command, "unregistered command");
		true
	}
}
