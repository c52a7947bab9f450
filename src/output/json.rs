//! JSON output formatting

use std::io::{self, BufWriter, Write};
use std::path::Path;

use serde::Serialize;

use crate::tree::{Counters, Entry, EntryKind};

use super::TreeOutput;

/// A node in the JSON tree.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct JsonNode {
    pub name: String,
    #[serde(rename = "type")]
    pub kind: EntryKind,
    /// Present for directories only; empty when the depth bound stopped descent.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub children: Option<Vec<JsonNode>>,
}

impl JsonNode {
    fn from_entry(entry: &Entry) -> Self {
        Self {
            name: entry.name.clone(),
            kind: entry.kind,
            children: entry.kind.is_dir().then(Vec::new),
        }
    }
}

/// The complete document written by [`JsonFormatter`].
#[derive(Debug, Clone, Serialize)]
pub struct JsonReport {
    pub root: String,
    pub tree: Vec<JsonNode>,
    pub counts: Counters,
}

/// Rebuilds the nested tree from the pre-order entry stream and prints it
/// as one pretty-printed document in `finish`, flushed once.
pub struct JsonFormatter<W: Write> {
    out: BufWriter<W>,
    root: String,
    top: Vec<JsonNode>,
    /// Open nodes; index i holds the most recent node at depth i.
    open: Vec<JsonNode>,
}

impl<W: Write> JsonFormatter<W> {
    pub fn new(writer: W) -> Self {
        Self {
            out: BufWriter::new(writer),
            root: String::new(),
            top: Vec::new(),
            open: Vec::new(),
        }
    }

    /// Recover the underlying writer, flushing anything still buffered.
    pub fn into_inner(self) -> io::Result<W> {
        self.out.into_inner().map_err(|e| e.into_error())
    }

    /// Close nodes until only `depth` remain open.
    fn close_to(&mut self, depth: usize) {
        while self.open.len() > depth {
            let Some(node) = self.open.pop() else { break };
            match self.open.last_mut() {
                Some(parent) => parent.children.get_or_insert_with(Vec::new).push(node),
                None => self.top.push(node),
            }
        }
    }

    fn report(&mut self, counters: &Counters) -> JsonReport {
        self.close_to(0);
        JsonReport {
            root: std::mem::take(&mut self.root),
            tree: std::mem::take(&mut self.top),
            counts: *counters,
        }
    }
}

impl JsonFormatter<io::Stdout> {
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write> TreeOutput for JsonFormatter<W> {
    fn output_root(&mut self, root: &Path) -> io::Result<()> {
        self.root = root.display().to_string();
        Ok(())
    }

    fn output_entry(&mut self, entry: &Entry, depth: usize) -> io::Result<()> {
        self.close_to(depth);
        self.open.push(JsonNode::from_entry(entry));
        Ok(())
    }

    fn finish(&mut self, counters: &Counters) -> io::Result<()> {
        let report = self.report(counters);
        serde_json::to_writer_pretty(&mut self.out, &report).map_err(io::Error::other)?;
        writeln!(self.out)?;
        self.out.flush()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn feed(entries: &[(&str, EntryKind, usize)]) -> serde_json::Value {
        let mut f = JsonFormatter::new(Vec::new());
        let mut counters = Counters::new();
        f.output_root(Path::new("/r")).unwrap();
        for (name, kind, depth) in entries {
            f.output_entry(&Entry::new(*name, *kind), *depth).unwrap();
            counters.record(*kind);
        }
        f.finish(&counters).unwrap();
        serde_json::from_slice(&f.into_inner().unwrap()).unwrap()
    }

    #[test]
    fn test_nesting_follows_depth() {
        let json = feed(&[
            ("a", EntryKind::Directory, 0),
            ("x", EntryKind::File, 1),
            ("b", EntryKind::Directory, 1),
            ("y", EntryKind::File, 2),
            ("z", EntryKind::Symlink, 0),
        ]);

        assert_eq!(json["root"], "/r");
        let tree = json["tree"].as_array().unwrap();
        assert_eq!(tree.len(), 2);
        assert_eq!(tree[0]["name"], "a");
        assert_eq!(tree[0]["type"], "directory");
        assert_eq!(tree[0]["children"][0]["name"], "x");
        assert_eq!(tree[0]["children"][1]["children"][0]["name"], "y");
        assert_eq!(tree[1]["type"], "symlink");
        assert!(tree[1].get("children").is_none());
        assert_eq!(json["counts"]["directories"], 2);
        assert_eq!(json["counts"]["sym_links"], 1);
    }

    #[test]
    fn test_unexpanded_directory_has_empty_children() {
        let json = feed(&[("d", EntryKind::Directory, 0)]);
        assert_eq!(json["tree"][0]["children"], serde_json::json!([]));
    }

    #[test]
    fn test_document_written_in_one_flush() {
        #[derive(Default)]
        struct CountingWriter {
            writes: usize,
            bytes: Vec<u8>,
        }

        impl Write for CountingWriter {
            fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
                self.writes += 1;
                self.bytes.extend_from_slice(buf);
                Ok(buf.len())
            }

            fn flush(&mut self) -> io::Result<()> {
                Ok(())
            }
        }

        let mut f = JsonFormatter::new(CountingWriter::default());
        let mut counters = Counters::new();
        f.output_root(Path::new("/r")).unwrap();
        for (name, kind, depth) in [
            ("a", EntryKind::Directory, 0),
            ("x", EntryKind::File, 1),
            ("y", EntryKind::File, 1),
        ] {
            f.output_entry(&Entry::new(name, kind), depth).unwrap();
            counters.record(kind);
        }
        f.finish(&counters).unwrap();

        let inner = f.into_inner().unwrap();
        assert_eq!(inner.writes, 1);
        assert!(inner.bytes.ends_with(b"}\n"));
    }

    #[test]
    fn test_empty_walk() {
        let json = feed(&[]);
        assert_eq!(json["tree"], serde_json::json!([]));
        assert_eq!(json["counts"]["files"], 0);
    }
}
