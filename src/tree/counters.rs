//! Aggregate entry counts

use serde::Serialize;

use super::entry::EntryKind;

/// Running totals of every entry listed during a walk.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Counters {
    pub directories: usize,
    pub files: usize,
    pub sym_links: usize,
    pub other: usize,
}

impl Counters {
    pub fn new() -> Self {
        Self::default()
    }

    /// Count one entry of the given kind.
    pub fn record(&mut self, kind: EntryKind) {
        match kind {
            EntryKind::Directory => self.directories += 1,
            EntryKind::File => self.files += 1,
            EntryKind::Symlink => self.sym_links += 1,
            EntryKind::Other => self.other += 1,
        }
    }

    pub fn total(&self) -> usize {
        self.directories + self.files + self.sym_links + self.other
    }

    /// The summary line printed after the tree.
    pub fn summary(&self) -> String {
        format!(
            "{} directories, {} files, {} sym-links, {} other",
            self.directories, self.files, self.sym_links, self.other
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_each_kind() {
        let mut c = Counters::new();
        for kind in [
            EntryKind::Directory,
            EntryKind::Directory,
            EntryKind::File,
            EntryKind::Symlink,
            EntryKind::Other,
            EntryKind::Other,
            EntryKind::Other,
        ] {
            c.record(kind);
        }
        assert_eq!(
            c,
            Counters {
                directories: 2,
                files: 1,
                sym_links: 1,
                other: 3
            }
        );
        assert_eq!(c.total(), 7);
    }

    #[test]
    fn test_summary_format() {
        let c = Counters {
            directories: 3,
            files: 2,
            sym_links: 1,
            other: 0,
        };
        assert_eq!(c.summary(), "3 directories, 2 files, 1 sym-links, 0 other");
    }
}
