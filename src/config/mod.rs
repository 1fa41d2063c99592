//! Local configuration resolution for Capsid.
//!
//! Every machine-specific setting the tool needs (where the game is
//! installed, where the IDE lives, how to invoke the annotator) is a
//! *local property*: a named, typed value defined once in the [`key`]
//! registry and resolved on demand through an ordered chain of sources.
//!
//! ## Precedence (first match wins, no merging)
//!
//! 1. `local.properties` — flat `key=value` file at the project root,
//!    gitignored, loaded once per process and snapshotted
//! 2. `-P key=value` process overrides passed on the command line
//! 3. Environment variable (per-key name, e.g. `PZ_GAME_DIR`)
//! 4. The property's built-in default, when it has one
//!
//! A required property with no default fails resolution when every source
//! comes up empty. Absence of `local.properties` itself is a normal state,
//! not an error; `capsid init` creates it.
//!
//! Environment variables are read fresh on every resolution, so a caller
//! that mutates the environment observes the change on the next call. The
//! properties file snapshot is never reloaded.

pub mod key;
pub mod resolver;
pub mod store;
pub mod validate;

pub use key::{GAME_DIR, IDEA_HOME, LocalProperty, PropertyKind, PropertyValue, ZDOC_TOOL};
pub use resolver::{PropertySources, Resolved, ValueSource, resolve, resolve_required};
pub use store::LocalStore;
