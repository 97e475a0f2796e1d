//! Notification definition macros.

/// Defines a notification with a static message.
///
/// Expands to a `static` definition `NOTIF_<NAME>` and a `static`
/// [`NotificationKey`](crate::notifications::NotificationKey) `<NAME>`.
#[macro_export]
macro_rules! notif {
	($name:ident, $level:ident, $msg:literal $(, dismiss: $dismiss:expr)? $(,)?) => {
		$crate::paste::paste! {
			#[doc = concat!("Definition for `", stringify!($name), "`.")]
			pub static [<NOTIF_ $name:upper>]: $crate::notifications::NotificationDef =
				$crate::notifications::NotificationDef::new(
					concat!(env!("CARGO_PKG_NAME"), "::", stringify!($name)),
					$crate::notifications::Level::$level,
					$crate::__reg_opt!($({$dismiss})?, $crate::notifications::AutoDismiss::DEFAULT),
				);

			#[doc = concat!("Static notification handle for `", stringify!($name), "`: ", $msg)]
			pub static [<$name:upper>]: $crate::notifications::NotificationKey =
				$crate::notifications::NotificationKey::new(&[<NOTIF_ $name:upper>], $msg);
		}
	};
}

/// Selects an optional macro argument or falls back to a default.
#[doc(hidden)]
#[macro_export]
macro_rules! __reg_opt {
	({$val:expr}, $default:expr) => {
		$val
	};
	(, $default:expr) => {
		$default
	};
}
