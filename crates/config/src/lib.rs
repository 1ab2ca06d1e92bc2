//! Typed configuration loading from layered `.env` files.
//!
//! Values are applied to a record in three layers, later layers winning key by key:
//!
//! 1. `<dir>/<APP_ENV>.env` (mandatory)
//! 2. `<dir>/.env` (optional)
//! 3. the process environment
//!
//! Records declare which fields participate with [`env_record!`].
//!
//! ```no_run
//! appenv::env_record! {
//!     #[derive(Debug, Default)]
//!     pub struct Config {
//!         #[env = "DATABASE_URL"]
//!         pub database_url: String,
//!         #[env = "WORKERS"]
//!         pub workers: i64,
//!     }
//! }
//!
//! let mut config = Config::default();
//! appenv::load(&mut config, "config").expect("configuration");
//! ```

mod binder;
pub mod constants;
mod error;
mod keyset;
mod loader;
mod macros;
mod source;

pub use binder::{
    EnvField, EnvRecord, FieldDescriptor, FieldKind, FieldSlot, FieldVisitor, bind, parse_bool,
    parse_int,
};
pub use error::AppEnvError;
pub use keyset::KeySet;
pub use loader::{
    EnvLoader, FileTree, MemoryFileTree, OsFileTree, env_var_or_none, load, load_fs,
    load_fs_on_app_env, load_on_app_env, resolve_app_env,
};
pub use source::{DotenvSource, KeyValueSource, ProcessEnv};
