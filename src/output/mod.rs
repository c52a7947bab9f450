//! Tree rendering
//!
//! - `config` - icons and indentation
//! - `text` - the indented icon listing with a summary line
//! - `json` - a single JSON document built from the same entry stream

mod config;
mod json;
mod text;

use std::io;
use std::path::Path;

use crate::tree::{Counters, Entry};

pub use config::{ASCII_DIR_ICON, ASCII_FILE_ICON, DIR_ICON, FILE_ICON, OutputConfig};
pub use json::{JsonFormatter, JsonNode, JsonReport};
pub use text::TextFormatter;

/// Receives the walk as it happens: the root, every entry in pre-order,
/// then the final counts.
pub trait TreeOutput {
    fn output_root(&mut self, root: &Path) -> io::Result<()>;

    fn output_entry(&mut self, entry: &Entry, depth: usize) -> io::Result<()>;

    fn finish(&mut self, counters: &Counters) -> io::Result<()>;
}
