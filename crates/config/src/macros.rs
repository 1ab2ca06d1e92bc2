//! Declarative macro generating `EnvRecord` implementations.
//!
//! # Example Usage
//!
//! ```
//! appenv::env_record! {
//!     #[derive(Debug, Default)]
//!     pub struct Settings {
//!         #[env = "DATABASE_URL"]
//!         pub database_url: String,
//!         #[env = "PORT"]
//!         pub port: i64,
//!         #[env = "DEBUG"]
//!         pub debug: bool,
//!         // Untagged: never assigned.
//!         pub retries: u32,
//!     }
//! }
//!
//! let mut settings = Settings::default();
//! let source: std::collections::HashMap<String, String> =
//!     [("PORT".to_string(), "8080".to_string())].into();
//! appenv::bind(&mut settings, &source).unwrap();
//! assert_eq!(settings.port, 8080);
//! ```

/// Define a struct and implement [`EnvRecord`](crate::EnvRecord) for it.
///
/// # Syntax
///
/// - `#[env = "KEY"]` must be the first attribute of a field to tag it.
/// - Tagged fields must be `String`, `i64` or `bool` (see [`EnvField`](crate::EnvField)).
/// - Tagged fields declared without a visibility qualifier are private and are
///   never assigned, even when `KEY` is present in a source.
/// - Other attributes on the struct and its fields are passed through.
#[macro_export]
macro_rules! env_record {
    // Tagged field
    (@munch $name:ident [$($head:tt)*] [$($fields:tt)*] [$($binds:tt)*]
        #[env = $key:literal]
        $(#[$fmeta:meta])*
        $fvis:vis $fname:ident : $fty:ty
        $(, $($rest:tt)*)?
    ) => {
        $crate::env_record!(@munch $name [$($head)*]
            [$($fields)* $(#[$fmeta])* $fvis $fname: $fty,]
            [$($binds)* ($key, $fname, stringify!($fvis))]
            $($($rest)*)?
        );
    };

    // Untagged field
    (@munch $name:ident [$($head:tt)*] [$($fields:tt)*] [$($binds:tt)*]
        $(#[$fmeta:meta])*
        $fvis:vis $fname:ident : $fty:ty
        $(, $($rest:tt)*)?
    ) => {
        $crate::env_record!(@munch $name [$($head)*]
            [$($fields)* $(#[$fmeta])* $fvis $fname: $fty,]
            [$($binds)*]
            $($($rest)*)?
        );
    };

    // Base case: all fields consumed
    (@munch $name:ident [$($head:tt)*] [$($fields:tt)*]
        [$( ($key:literal, $fname:ident, $vis:expr) )*]
    ) => {
        $($head)* {
            $($fields)*
        }

        impl $crate::EnvRecord for $name {
            #[allow(unused_variables)]
            fn visit_fields(
                &mut self,
                visit: &mut $crate::FieldVisitor<'_>,
            ) -> ::std::result::Result<(), $crate::AppEnvError> {
                $(
                    visit(
                        &$crate::FieldDescriptor {
                            key: $key,
                            name: stringify!($fname),
                            settable: !$vis.is_empty(),
                        },
                        $crate::EnvField::slot(&mut self.$fname),
                    )?;
                )*
                ::std::result::Result::Ok(())
            }
        }
    };

    (
        $(#[$meta:meta])*
        $vis:vis struct $name:ident {
            $($body:tt)*
        }
    ) => {
        $crate::env_record!(@munch $name [$(#[$meta])* $vis struct $name] [] []
            $($body)*
        );
    };
}
