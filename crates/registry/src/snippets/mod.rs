//! Fixed code-skeleton templates and their insertion.
//!
//! The template set is closed: three statics created at build time, looked up
//! by the id of the command that inserts them.

mod insert;


pub use insert::{InsertOutcome, insert_template};

/// A literal code skeleton bound to the command that inserts it.
///
/// `text` is inserted verbatim; `\n` and `\t` are left to the host's renderer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SnippetTemplate {
	/// Id of the command inserting this template.
	pub command_id: &'static str,
	/// Template body.
	pub text: &'static str,
}

/// `if` statement skeleton.
pub static IF: SnippetTemplate = SnippetTemplate {
	command_id: "snippet.if",
	text: "if (condition) {\n\t\n}",
};

/// `for` loop skeleton.
pub static FOR: SnippetTemplate = SnippetTemplate {
	command_id: "snippet.for",
	text: "for (let i = 0; i < n; i++) {\n\t\n}",
};

/// `while` loop skeleton.
pub static WHILE: SnippetTemplate = SnippetTemplate {
	command_id: "snippet.while",
	text: "while (condition) {\n\t\n}",
};

/// All templates in registration order.
pub static TEMPLATES: [&SnippetTemplate; 3] = [&IF, &FOR, &WHILE];

/// Finds the template inserted by `command_id`.
pub fn find_template(command_id: &str) -> Option<&'static SnippetTemplate> {
	TEMPLATES.iter().copied().find(|t| t.command_id == command_id)
}
