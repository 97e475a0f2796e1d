use skel_registry::commands::builtins::DEFS;

use crate::{Extension, ExtensionContext, ExtensionError};

/// Registers the `snippet.*` template commands.
#[derive(Debug, Default)]
pub struct SnippetExtension;

impl Extension for SnippetExtension {
	fn id(&self) -> &'static str {
		"snippet"
	}

	fn start(&mut self, ctx: &mut ExtensionContext<'_>) -> Result<(), ExtensionError> {
		for &def in DEFS {
			ctx.register_command(def)?;
		}
		Ok(())
	}
}
