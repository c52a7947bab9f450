//! Directory tree walking
//!
//! The [`Traverser`] lists one directory at a time, sorts the listing,
//! hands each entry to a [`TreeOutput`](crate::output::TreeOutput) and
//! recurses depth-first while the depth bound allows.

mod config;
mod counters;
mod entry;
mod sort;
mod walker;

pub use config::TraverseConfig;
pub use counters::Counters;
pub use entry::{Entry, EntryKind};
pub use sort::{compare_names, sort_entries};
pub use walker::{Traverser, traverse};
