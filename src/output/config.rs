//! Output configuration types

use crate::tree::EntryKind;

pub const DIR_ICON: &str = "\u{1F4C1}";
pub const FILE_ICON: &str = "\u{1F4C4}";
pub const ASCII_DIR_ICON: &str = "[D]";
pub const ASCII_FILE_ICON: &str = "[F]";

const DEFAULT_INDENT_WIDTH: usize = 4;

/// Configuration for output formatting.
#[derive(Debug, Clone)]
pub struct OutputConfig {
    /// Spaces per depth level
    pub indent_width: usize,
    pub dir_icon: String,
    /// Used for files, symlinks and everything else
    pub file_icon: String,
}

impl OutputConfig {
    /// Plain ASCII markers for terminals without emoji glyphs.
    pub fn ascii() -> Self {
        Self {
            dir_icon: ASCII_DIR_ICON.to_string(),
            file_icon: ASCII_FILE_ICON.to_string(),
            ..Default::default()
        }
    }

    pub fn icon(&self, kind: EntryKind) -> &str {
        match kind {
            EntryKind::Directory => &self.dir_icon,
            EntryKind::File | EntryKind::Symlink | EntryKind::Other => &self.file_icon,
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            indent_width: DEFAULT_INDENT_WIDTH,
            dir_icon: DIR_ICON.to_string(),
            file_icon: FILE_ICON.to_string(),
        }
    }
}
