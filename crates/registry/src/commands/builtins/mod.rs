//! Builtin commands.

mod snippet;

pub use snippet::{CMD_snippet_for, CMD_snippet_if, CMD_snippet_while};

/// Every builtin command definition.
pub static DEFS: &[&crate::commands::CommandDef] = &[&CMD_snippet_if, &CMD_snippet_for, &CMD_snippet_while];

#[cfg(test)]
mod tests {
	use super::*;
	use crate::commands::{all_commands, find_command};
	use crate::snippets::SnippetTemplate;

	#[test]
	fn builtin_ids_are_fixed() {
		let ids: Vec<_> = DEFS.iter().map(|def| def.id).collect();
		assert_eq!(ids, ["snippet.if", "snippet.for", "snippet.while"]);
	}

	#[test]
	fn all_commands_sorted_by_id() {
		let ids: Vec<_> = all_commands().iter().map(|def| def.id).collect();
		assert_eq!(ids, ["snippet.for", "snippet.if", "snippet.while"]);
	}

	#[test]
	fn each_command_carries_its_template() {
		for def in DEFS {
			let any: &dyn std::any::Any = def.user_data.expect("template attached");
			let template = any.downcast_ref::<SnippetTemplate>().expect("snippet template");
			assert_eq!(template.command_id, def.id);
		}
	}

	#[test]
	fn unknown_id_is_not_found() {
		assert!(find_command("snippet.do").is_none());
		assert_eq!(find_command("snippet.while").map(|d| d.name), Some("snippet_while"));
	}
}
