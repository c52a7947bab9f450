//! Configuration for the traverser

use crate::cli::DEFAULT_DEPTH;

/// Configuration for tree walking behavior.
#[derive(Debug, Clone)]
pub struct TraverseConfig {
    /// Number of levels listed below the root. 0 lists nothing.
    pub max_depth: usize,
}

impl Default for TraverseConfig {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_DEPTH,
        }
    }
}
