use pretty_assertions::assert_eq;
use skel_extension::CommandHost;
use skel_primitives::{EditError, Selection};
use skel_registry::CommandEditorOps;
use skel_registry::commands::builtins::{CMD_snippet_if, CMD_snippet_while};

use super::*;

#[test]
fn open_focuses_new_view() {
	let mut editor = Editor::default();
	let view = editor.open("abc");
	assert_eq!(editor.focused_view(), Some(view));
	assert_eq!(editor.text(view).as_deref(), Some("abc"));
	assert_eq!(editor.active_view().map(|v| v.id), Some(view));
}

#[test]
fn readonly_view_is_not_active() {
	let mut editor = Editor::default();
	let view = editor.open("abc");
	editor.set_readonly(view, true);
	assert_eq!(editor.active_view(), None);
	assert_eq!(editor.insert_at(view, 0, "x"), Err(EditError::ReadOnly));
	assert_eq!(editor.text(view).as_deref(), Some("abc"));
}

#[test]
fn blur_and_close_clear_active_view() {
	let mut editor = Editor::default();
	let view = editor.open("");
	editor.blur();
	assert!(editor.active_view().is_none());

	assert!(editor.focus(view));
	assert!(editor.close(view));
	assert!(editor.active_view().is_none());
	assert!(editor.document(view).is_none());
	assert!(!editor.close(view));
}

#[test]
fn insert_moves_cursor_past_text() {
	let mut editor = Editor::default();
	let view = editor.open("x = 1;");
	editor.set_selection(view, Selection::point(6)).expect("selection");
	editor.insert_at(view, 6, "abc").expect("insert");
	assert_eq!(editor.selection(view), Some(Selection::point(9)));
}

#[test]
fn insert_out_of_bounds_is_rejected() {
	let mut editor = Editor::default();
	let view = editor.open("ab");
	assert_eq!(editor.insert_at(view, 3, "x"), Err(EditError::OutOfBounds { pos: 3, len: 2 }));
	assert_eq!(editor.document(view).map(Document::version), Some(0));
}

#[test]
fn set_selection_checks_bounds() {
	let mut editor = Editor::default();
	let view = editor.open("ab");
	assert!(editor.set_selection(view, Selection::single(0, 5)).is_err());
	assert!(editor.set_selection(ViewId(999), Selection::point(0)).is_err());
}

#[test]
fn split_views_track_each_other() {
	let mut editor = Editor::default();
	let left = editor.open("hello");
	let right = editor.split(left).expect("split");
	editor.set_selection(right, Selection::point(5)).expect("selection");

	editor.insert_at(left, 0, ">> ").expect("insert");
	assert_eq!(editor.text(right).as_deref(), Some(">> hello"));
	assert_eq!(editor.selection(right), Some(Selection::point(8)));

	assert!(editor.close(left));
	assert_eq!(editor.text(right).as_deref(), Some(">> hello"));
}

#[test]
fn undo_restores_text_and_selection() {
	let mut editor = Editor::default();
	let view = editor.open("ab");
	editor.set_selection(view, Selection::point(1)).expect("selection");
	editor.insert_at(view, 1, "XYZ").expect("insert");

	assert!(editor.undo(view));
	assert_eq!(editor.text(view).as_deref(), Some("ab"));
	assert_eq!(editor.selection(view), Some(Selection::point(1)));
	assert!(!editor.undo(view));

	assert!(editor.redo(view));
	assert_eq!(editor.text(view).as_deref(), Some("aXYZb"));
	assert_eq!(editor.selection(view), Some(Selection::point(4)));
}

#[test]
fn duplicate_registration_is_rejected() {
	let mut editor = Editor::default();
	let first = editor.register_command(&CMD_snippet_if).expect("register");
	assert_eq!(
		editor.register_command(&CMD_snippet_if).unwrap_err(),
		ExtensionError::DuplicateCommand("snippet.if")
	);
	assert!(first.dispose(&mut editor));
	assert!(!editor.is_registered("snippet.if"));
}

#[test]
fn unregister_unknown_is_false() {
	let mut editor = Editor::default();
	let reg = editor.register_command(&CMD_snippet_while).expect("register");
	assert!(!editor.unregister_command(RegistrationId(reg.id().0 + 100)));
	assert_eq!(editor.registered_commands(), ["snippet.while"]);
	assert!(reg.dispose(&mut editor));
}

#[test]
fn unknown_command_notifies_and_errors() {
	let mut editor = Editor::default();
	editor.open("");
	assert_eq!(
		editor.execute_command("snippet.do"),
		Err(CommandError::NotFound("snippet.do".into()))
	);
	let notes = editor.take_notifications();
	assert_eq!(notes.len(), 1);
	assert_eq!(notes[0].message, "Unknown command");
}

#[test]
fn notification_queue_respects_config() {
	let config = EditorConfig::parse("[notifications]\nmax_pending = 2\n").expect("config");
	let mut editor = Editor::new(config);
	for _ in 0..5 {
		editor.emit(keys::NO_ACTIVE_EDITOR.emit());
	}
	assert_eq!(editor.notifications().len(), 2);
}
