//! Template insertion commands.

use crate::command;
use crate::commands::{CommandContext, CommandOutcome, CommandResult};
use crate::snippets::{self, InsertOutcome, SnippetTemplate};

command!(snippet_if, {
	id: "snippet.if",
	description: "Insert an if statement skeleton",
	user_data: &snippets::IF
}, handler: cmd_insert_template);

command!(snippet_for, {
	id: "snippet.for",
	description: "Insert a for loop skeleton",
	user_data: &snippets::FOR
}, handler: cmd_insert_template);

command!(snippet_while, {
	id: "snippet.while",
	description: "Insert a while loop skeleton",
	user_data: &snippets::WHILE
}, handler: cmd_insert_template);

fn cmd_insert_template(ctx: &mut CommandContext<'_>) -> CommandResult {
	let template = ctx.require_user_data::<SnippetTemplate>()?;
	match snippets::insert_template(&mut *ctx.editor, template.text)? {
		InsertOutcome::Inserted { .. } => Ok(CommandOutcome::Applied),
		InsertOutcome::NoActiveEditor => Ok(CommandOutcome::Skipped),
	}
}
