//! Notification keys emitted by builtin commands.

notif!(no_active_editor, Error, "No active editor");
notif!(unknown_command, Warn, "Unknown command");
