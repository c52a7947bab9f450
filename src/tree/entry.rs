//! Directory members and their classification

use std::ffi::OsString;
use std::fs::{DirEntry, FileType};

use serde::Serialize;

/// Broad category of a filesystem object, as reported by the listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum EntryKind {
    Directory,
    File,
    Symlink,
    /// Device nodes, pipes, sockets and anything unrecognized.
    Other,
}

impl EntryKind {
    /// Classify without following symlinks.
    pub fn from_file_type(file_type: FileType) -> Self {
        if file_type.is_symlink() {
            EntryKind::Symlink
        } else if file_type.is_dir() {
            EntryKind::Directory
        } else if file_type.is_file() {
            EntryKind::File
        } else {
            EntryKind::Other
        }
    }

    pub fn is_dir(self) -> bool {
        self == EntryKind::Directory
    }
}

/// One member of a single directory listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    /// Bare name for display and ordering, lossily converted to UTF-8.
    pub name: String,
    /// Name exactly as the filesystem reported it; used to build child paths.
    pub raw_name: OsString,
    pub kind: EntryKind,
}

impl Entry {
    pub fn new(name: impl Into<String>, kind: EntryKind) -> Self {
        let name = name.into();
        Self {
            raw_name: OsString::from(&name),
            name,
            kind,
        }
    }

    /// Build an entry from a `read_dir` item.
    pub fn from_dir_entry(entry: &DirEntry) -> std::io::Result<Self> {
        let kind = EntryKind::from_file_type(entry.file_type()?);
        let raw_name = entry.file_name();
        let name = raw_name.to_string_lossy().into_owned();
        Ok(Self {
            name,
            raw_name,
            kind,
        })
    }
}
