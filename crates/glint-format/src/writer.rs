//! ---
//! glint_section: "03-rendering-engine"
//! glint_subsection: "module"
//! glint_type: "source"
//! glint_scope: "code"
//! glint_description: "Ordered delivery of rendered entries to output sinks."
//! glint_version: "v0.0.0-prealpha"
//! glint_owner: "tbd"
//! ---
use std::io::Write;

use glint_model::{Entry, TopicTable};
use tracing::trace;

use crate::assembler::LineFormatter;
use crate::console::{ConsoleAdapter, HostConsole};
use crate::errors::Result;

/// Final stage of the pipeline: consumes entries one at a time, in order.
pub trait EntrySink {
    fn emit(&mut self, entry: &Entry) -> Result<()>;

    fn flush(&mut self) -> Result<()> {
        Ok(())
    }
}

/// Writes one formatted chunk per entry to `out`.
///
/// Nothing is buffered across entries: each chunk is handed to the writer
/// before the next entry is formatted.
#[derive(Debug)]
pub struct LineWriter<F, W> {
    formatter: F,
    out: W,
    written: u64,
}

impl<F: LineFormatter, W: Write> LineWriter<F, W> {
    pub fn new(formatter: F, out: W) -> Self {
        Self {
            formatter,
            out,
            written: 0,
        }
    }

    /// Format and write a single entry.
    pub fn write_entry(&mut self, entry: &Entry) -> Result<()> {
        let chunk = self.formatter.format(entry)?;
        self.out.write_all(chunk.as_bytes())?;
        self.written += 1;
        trace!(
            topic = %entry.topic,
            ns = %entry.ns,
            bytes = chunk.len(),
            "entry written"
        );
        Ok(())
    }

    /// Write entries in iteration order, stopping at the first failure.
    /// Chunks written before the failure stay in the output.
    pub fn write_all<'a, I>(&mut self, entries: I) -> Result<usize>
    where
        I: IntoIterator<Item = &'a Entry>,
    {
        let mut count = 0;
        for entry in entries {
            self.write_entry(entry)?;
            count += 1;
        }
        Ok(count)
    }

    /// Number of chunks written so far.
    pub fn written(&self) -> u64 {
        self.written
    }

    pub fn get_ref(&self) -> &W {
        &self.out
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<F: LineFormatter, W: Write> EntrySink for LineWriter<F, W> {
    fn emit(&mut self, entry: &Entry) -> Result<()> {
        self.write_entry(entry)
    }

    fn flush(&mut self) -> Result<()> {
        self.out.flush()?;
        Ok(())
    }
}

impl<H: HostConsole, T: TopicTable> EntrySink for ConsoleAdapter<H, T> {
    fn emit(&mut self, entry: &Entry) -> Result<()> {
        self.write(entry)
    }
}
