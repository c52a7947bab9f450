//! Twig - print a directory tree with icons and per-type counts

pub mod cli;
pub mod error;
pub mod output;
pub mod path;
pub mod tree;

#[cfg(feature = "test-utils")]
pub mod test_utils;

pub use cli::{Positionals, parse_positionals};
pub use error::{Result, TwigError};
pub use output::{JsonFormatter, OutputConfig, TextFormatter, TreeOutput};
pub use path::resolve_path;
pub use tree::{Counters, Entry, EntryKind, TraverseConfig, Traverser, compare_names, traverse};
