use std::collections::BTreeMap;

use pretty_assertions::assert_eq;
use skel_registry::CommandDef;
use skel_registry::commands::builtins::CMD_snippet_for;

use super::*;

/// Registration-only host keyed by command id.
#[derive(Default)]
struct FakeHost {
	commands: BTreeMap<&'static str, RegistrationId>,
	next_id: u64,
}

impl FakeHost {
	fn ids(&self) -> Vec<&'static str> {
		self.commands.keys().copied().collect()
	}
}

impl CommandHost for FakeHost {
	fn register_command(&mut self, def: &'static CommandDef) -> Result<Disposable, ExtensionError> {
		if self.commands.contains_key(def.id) {
			return Err(ExtensionError::DuplicateCommand(def.id));
		}
		self.next_id += 1;
		let id = RegistrationId(self.next_id);
		self.commands.insert(def.id, id);
		Ok(Disposable::new(id, def.id))
	}

	fn unregister_command(&mut self, id: RegistrationId) -> bool {
		let before = self.commands.len();
		self.commands.retain(|_, reg| *reg != id);
		self.commands.len() != before
	}
}

#[test]
fn activation_registers_three_commands() {
	let mut host = FakeHost::default();
	let mut ext = ExtensionHost::new(SnippetExtension);
	ext.activate(&mut host).expect("activate");

	assert!(ext.is_active());
	assert_eq!(host.ids(), ["snippet.for", "snippet.if", "snippet.while"]);
	let held: Vec<_> = ext.subscriptions().iter().map(Disposable::command_id).collect();
	assert_eq!(held, ["snippet.if", "snippet.for", "snippet.while"]);
}

#[test]
fn deactivation_releases_every_registration() {
	let mut host = FakeHost::default();
	let mut ext = ExtensionHost::new(SnippetExtension);
	ext.activate(&mut host).expect("activate");
	ext.deactivate(&mut host);

	assert!(!ext.is_active());
	assert!(ext.subscriptions().is_empty());
	assert!(host.ids().is_empty());
}

#[test]
fn deactivate_when_inactive_is_noop() {
	let mut host = FakeHost::default();
	let mut ext = ExtensionHost::new(SnippetExtension);
	ext.deactivate(&mut host);
	assert!(!ext.is_active());
}

#[test]
fn second_activation_is_rejected() {
	let mut host = FakeHost::default();
	let mut ext = ExtensionHost::new(SnippetExtension);
	ext.activate(&mut host).expect("activate");
	assert_eq!(ext.activate(&mut host), Err(ExtensionError::AlreadyActive));
	assert_eq!(ext.subscriptions().len(), 3);
}

#[test]
fn reactivation_after_deactivate() {
	let mut host = FakeHost::default();
	let mut ext = ExtensionHost::new(SnippetExtension);
	ext.activate(&mut host).expect("activate");
	ext.deactivate(&mut host);
	ext.activate(&mut host).expect("reactivate");
	assert_eq!(host.ids().len(), 3);
}

#[test]
fn failed_activation_rolls_back() {
	let mut host = FakeHost::default();
	let _taken = host.register_command(&CMD_snippet_for).expect("pre-register");

	let mut ext = ExtensionHost::new(SnippetExtension);
	let err = ext.activate(&mut host).unwrap_err();

	assert_eq!(err, ExtensionError::DuplicateCommand("snippet.for"));
	assert!(!ext.is_active());
	assert!(ext.subscriptions().is_empty());
	assert_eq!(host.ids(), ["snippet.for"]);
}

#[test]
fn disposing_twice_reports_unknown() {
	let mut host = FakeHost::default();
	let first = host.register_command(&CMD_snippet_for).expect("register");
	let stale = Disposable::new(first.id(), first.command_id());
	assert!(first.dispose(&mut host));
	assert!(!stale.dispose(&mut host));
}
