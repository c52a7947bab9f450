//! Indented icon listing

use std::io::{self, BufWriter, Write};
use std::path::Path;

use crate::tree::{Counters, Entry};

use super::TreeOutput;
use super::config::OutputConfig;

/// Writes the tree as text through a buffer that is flushed once in `finish`.
pub struct TextFormatter<W: Write> {
    config: OutputConfig,
    out: BufWriter<W>,
}

impl<W: Write> TextFormatter<W> {
    pub fn new(config: OutputConfig, writer: W) -> Self {
        Self {
            config,
            out: BufWriter::new(writer),
        }
    }

    /// Recover the underlying writer, flushing anything still buffered.
    pub fn into_inner(self) -> io::Result<W> {
        self.out.into_inner().map_err(|e| e.into_error())
    }
}

impl TextFormatter<io::Stdout> {
    pub fn stdout(config: OutputConfig) -> Self {
        Self::new(config, io::stdout())
    }
}

impl<W: Write> TreeOutput for TextFormatter<W> {
    fn output_root(&mut self, root: &Path) -> io::Result<()> {
        writeln!(self.out, "{}", root.display())
    }

    fn output_entry(&mut self, entry: &Entry, depth: usize) -> io::Result<()> {
        let indent = depth * self.config.indent_width;
        writeln!(
            self.out,
            "{:indent$}{} {}",
            "",
            self.config.icon(entry.kind),
            entry.name,
            indent = indent
        )
    }

    fn finish(&mut self, counters: &Counters) -> io::Result<()> {
        writeln!(self.out)?;
        writeln!(self.out, "{}", counters.summary())?;
        self.out.flush()
    }
}
