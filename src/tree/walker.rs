//! Depth-limited recursive listing

use std::fs;
use std::path::Path;

use crate::error::{Result, TwigError};
use crate::output::TreeOutput;

use super::config::TraverseConfig;
use super::counters::Counters;
use super::entry::Entry;
use super::sort::sort_entries;

/// Walks a directory tree and streams each entry to a [`TreeOutput`].
pub struct Traverser {
    config: TraverseConfig,
}

impl Traverser {
    pub fn new(config: TraverseConfig) -> Self {
        Self { config }
    }

    /// Print the whole tree under `root`: header, entries, then the summary.
    pub fn walk<O: TreeOutput>(&self, root: &Path, output: &mut O) -> Result<Counters> {
        let mut counters = Counters::new();
        output.output_root(root)?;
        traverse(root, self.config.max_depth, 0, output, &mut counters)?;
        tracing::debug!(?counters, "walk finished");
        output.finish(&counters)?;
        Ok(counters)
    }
}

/// List `path` at `current_depth` and recurse into subdirectories while
/// another level remains under `max_depth`.
///
/// Every failure aborts the walk; lines already written stay written.
pub fn traverse<O: TreeOutput>(
    path: &Path,
    max_depth: usize,
    current_depth: usize,
    output: &mut O,
    counters: &mut Counters,
) -> Result<()> {
    if current_depth >= max_depth {
        return Ok(());
    }

    tracing::debug!(path = %path.display(), depth = current_depth, "opening directory");
    let listing = fs::read_dir(path).map_err(|source| TwigError::DirectoryOpen {
        path: path.to_path_buf(),
        source,
    })?;

    let mut entries = listing
        .map(|item| item.and_then(|e| Entry::from_dir_entry(&e)))
        .collect::<std::io::Result<Vec<_>>>()
        .map_err(|source| TwigError::Enumeration {
            path: path.to_path_buf(),
            source,
        })?;
    sort_entries(&mut entries);

    for entry in &entries {
        output.output_entry(entry, current_depth)?;
        counters.record(entry.kind);

        if entry.kind.is_dir() {
            if current_depth + 1 < max_depth {
                traverse(
                    &path.join(&entry.raw_name),
                    max_depth,
                    current_depth + 1,
                    output,
                    counters,
                )?;
            } else {
                tracing::debug!(name = %entry.name, "depth limit reached, not descending");
            }
        }
    }

    Ok(())
}
