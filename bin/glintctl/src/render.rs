//! ---
//! glint_section: "04-command-line"
//! glint_subsection: "binary"
//! glint_type: "source"
//! glint_scope: "code"
//! glint_description: "Input loop feeding decoded entries to the selected adapter."
//! glint_version: "v0.0.0-prealpha"
//! glint_owner: "tbd"
//! ---
use std::io::{self, BufRead};

use anyhow::{Context, Result};
use glint_common::config::AdapterKind;
use glint_format::{
    Ansi, BasicFormatter, ConsoleAdapter, EntrySink, FancyFormatter, FormatError, LineWriter,
    NoColor, StdoutConsole,
};
use glint_model::{ConsoleOptions, Entry, FormatOptions};
use tracing::warn;

/// Effective rendering choices after merging configuration and flags.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderSettings {
    pub adapter: AdapterKind,
    pub color: bool,
    pub options: FormatOptions,
    pub console: ConsoleOptions,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RenderSummary {
    pub rendered: usize,
    pub skipped: usize,
}

/// Build the sink for `settings`, writing to stdout.
pub fn build_sink(settings: &RenderSettings) -> Box<dyn EntrySink> {
    let options = settings.options;
    let out = io::stdout();
    match (settings.adapter, settings.color) {
        (AdapterKind::Basic, _) => Box::new(LineWriter::new(BasicFormatter::new(options), out)),
        (AdapterKind::Fancy, true) => Box::new(LineWriter::new(FancyFormatter::new(options), out)),
        (AdapterKind::Fancy, false) => Box::new(LineWriter::new(
            FancyFormatter::with_palette(options, NoColor),
            out,
        )),
        (AdapterKind::Console, true) => {
            Box::new(ConsoleAdapter::new(settings.console, StdoutConsole::new(Ansi)))
        }
        (AdapterKind::Console, false) => {
            Box::new(ConsoleAdapter::new(settings.console, StdoutConsole::new(NoColor)))
        }
    }
}

/// Render every non-blank line of `input` through `sink`.
///
/// Lines that fail to decode or name an unknown topic are reported and
/// skipped. Output failures end the run.
pub fn run<R: BufRead>(input: R, sink: &mut dyn EntrySink) -> Result<RenderSummary> {
    let mut summary = RenderSummary::default();
    for (index, line) in input.lines().enumerate() {
        let line_no = index + 1;
        let line = line.with_context(|| format!("failed to read input line {}", line_no))?;
        if line.trim().is_empty() {
            continue;
        }

        let entry = match Entry::from_json_line(line_no, &line) {
            Ok(entry) => entry,
            Err(err) => {
                warn!(line = line_no, error = %err, "skipping undecodable line");
                summary.skipped += 1;
                continue;
            }
        };

        match sink.emit(&entry) {
            Ok(()) => summary.rendered += 1,
            Err(FormatError::UnknownTopic(topic)) => {
                warn!(line = line_no, %topic, "skipping entry with unknown topic");
                summary.skipped += 1;
            }
            Err(err) => {
                return Err(err)
                    .with_context(|| format!("failed to write entry from line {}", line_no));
            }
        }
    }
    sink.flush().context("failed to flush output")?;
    Ok(summary)
}
