#![cfg_attr(test, allow(unused_crate_dependencies))]
//! In-memory editor host.
//!
//! [`Editor`] implements both halves of the extension host contract: command
//! registration ([`CommandHost`](skel_extension::CommandHost)) and the
//! editing surface commands act on
//! ([`CommandEditorOps`](skel_registry::CommandEditorOps)).
//!
//! ```text
//! Editor
//! ├── documents: HashMap<DocumentId, Document>   // rope + undo history
//! ├── views: BTreeMap<ViewId, View>              // selection, read-only flag
//! ├── focused: Option<ViewId>                    // active editor, if any
//! ├── commands: BTreeMap<&str, Registration>     // registered command ids
//! └── notifications: NotificationCenter
//! ```

pub mod config;
pub mod document;
mod host;
pub mod notifications;
pub mod undo_store;
pub mod view;

pub use config::{ConfigError, EditorConfig};
pub use document::{Document, DocumentId};
pub use host::Editor;
pub use notifications::NotificationCenter;
pub use view::View;
