//! Declarative command-line argument matching and help rendering.
//!
//! A caller declares a tree of [`Command`]s, each owning an ordered set of
//! [`Arg`]s (flags, options, positionals) and subcommands, then hands the
//! process argument vector to [`Command::get_matches`]. The matcher walks
//! the token list against the declared grammar and produces an
//! [`ArgMatches`] tree, or a [`MatchError`] describing the first bad input.
//!
//! ```
//! use argmatch::{arg, Arg, Command};
//!
//! let cmd = Command::new("convert", "Convert media files")
//!     .arg(arg("-v --verbose").about("Enable verbose mode"))
//!     .arg(
//!         Arg::option("fps")
//!             .short_alias('f')
//!             .value_name("fps")
//!             .default_value(60),
//!     )
//!     .arg(arg("<input>").about("File to convert"));
//!
//! let matches = cmd
//!     .get_matches_from(["convert", "-v", "clip.mov"])
//!     .unwrap();
//! assert!(matches.get_flag("verbose"));
//! assert_eq!(matches.get_one("input"), Some("clip.mov"));
//! assert_eq!(matches.get_one_as::<u32>("fps"), Ok(Some(60)));
//! ```
//!
//! User-input problems (unknown flags, missing values, missing required
//! arguments or subcommands) come back as data in [`MatchError`]; the
//! library never prints or exits on them. Grammar mistakes (duplicate
//! names, a non-last `multiple` positional, aliases on a positional) are
//! programmer errors and panic at declaration time.

pub mod arg;
pub mod command;
pub mod error;
pub mod matches;

mod help;
mod matcher;

pub use arg::{Arg, ArgKind, DefaultValue, arg};
pub use command::Command;
pub use error::{InvalidValue, MatchError};
pub use matches::ArgMatches;
