/// Defines a command bound to an externally visible id.
///
/// Expands to a `static` [`CommandDef`](crate::commands::CommandDef) named
/// `CMD_<name>`.
#[macro_export]
macro_rules! command {
	($name:ident, {
		id: $id:literal,
		description: $desc:expr
		$(, user_data: $data:expr)?
		$(,)?
	}, handler: $handler:expr) => {
		$crate::paste::paste! {
			#[allow(non_upper_case_globals)]
			pub static [<CMD_ $name>]: $crate::commands::CommandDef = $crate::commands::CommandDef {
				id: $id,
				name: stringify!($name),
				description: $desc,
				handler: $handler,
				user_data: $crate::__reg_opt!($({Some($data)})?, None),
			};
		}
	};
}
