//! Registry of editor commands, notifications and snippet templates.
//!
//! Everything here is static data fixed at build time plus the handlers that
//! act on it. Hosts reach the editor through [`commands::CommandEditorOps`].

pub mod commands;
pub mod error;
pub mod notifications;
pub mod snippets;

#[doc(hidden)]
pub use paste;

pub use commands::{ActiveView, CommandContext, CommandDef, CommandEditorOps, CommandHandler, CommandOutcome};
pub use error::CommandError;
pub use notifications::{AutoDismiss, Level, Notification, NotificationDef, NotificationKey};
pub use snippets::{InsertOutcome, SnippetTemplate, insert_template};
