//! ---
//! glint_section: "03-rendering-engine"
//! glint_subsection: "module"
//! glint_type: "source"
//! glint_scope: "code"
//! glint_description: "Pass-through adapter for host console functions."
//! glint_version: "v0.0.0-prealpha"
//! glint_owner: "tbd"
//! ---
use std::io::{self, Write};

use glint_common::time::local_clock_time;
use glint_model::{ConsoleOptions, Entry, StudioTopics, TopicTable, Value};

use crate::errors::{FormatError, Result};
use crate::palette::{NoColor, Palette};
use crate::stringify::{DecoratedStringifier, Stringifier};

/// One positional argument handed to the host console.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ConsoleArg<'a> {
    /// Message, stack or cause text.
    Text(&'a str),
    /// The raw payload; the host decides how to print it.
    Data(&'a Value),
}

/// A host logging function receiving a header and positional arguments.
pub trait HostConsole {
    fn log(&self, header: &str, args: &[ConsoleArg<'_>]) -> io::Result<()>;
}

impl<F> HostConsole for F
where
    F: Fn(&str, &[ConsoleArg<'_>]) -> io::Result<()>,
{
    fn log(&self, header: &str, args: &[ConsoleArg<'_>]) -> io::Result<()> {
        self(header, args)
    }
}

/// Prints to stdout the way an interactive console shows its arguments:
/// text verbatim, structured values in their inspected form.
#[derive(Debug, Clone, Copy, Default)]
pub struct StdoutConsole<P = NoColor> {
    stringifier: DecoratedStringifier<P>,
}

impl<P: Palette> StdoutConsole<P> {
    pub fn new(palette: P) -> Self {
        Self {
            stringifier: DecoratedStringifier::new(palette),
        }
    }

    /// The line that [`HostConsole::log`] writes, without its newline.
    pub fn render_line(&self, header: &str, args: &[ConsoleArg<'_>]) -> String {
        let mut line = header.to_owned();
        for arg in args {
            line.push(' ');
            match arg {
                ConsoleArg::Text(text) => line.push_str(text),
                ConsoleArg::Data(Value::String(text)) => line.push_str(text),
                ConsoleArg::Data(value) => line.push_str(&self.stringifier.render(value)),
            }
        }
        line
    }

    /// Write the rendered line and its newline to `out`.
    pub fn log_to<W: Write>(
        &self,
        out: &mut W,
        header: &str,
        args: &[ConsoleArg<'_>],
    ) -> io::Result<()> {
        writeln!(out, "{}", self.render_line(header, args))
    }
}

impl<P: Palette> HostConsole for StdoutConsole<P> {
    fn log(&self, header: &str, args: &[ConsoleArg<'_>]) -> io::Result<()> {
        self.log_to(&mut io::stdout().lock(), header, args)
    }
}

/// Forwards each entry to a [`HostConsole`] as
/// `("HH:MM:SS.mmm <glyph> <ns>", [msg, data, stack, cause])`, leaving out
/// the arguments the entry does not carry.
#[derive(Debug, Clone)]
pub struct ConsoleAdapter<H, T = StudioTopics> {
    options: ConsoleOptions,
    host: H,
    topics: T,
}

impl<H: HostConsole> ConsoleAdapter<H> {
    pub fn new(options: ConsoleOptions, host: H) -> Self {
        Self::with_topics(options, host, StudioTopics)
    }
}

impl<H: HostConsole, T: TopicTable> ConsoleAdapter<H, T> {
    pub fn with_topics(options: ConsoleOptions, host: H, topics: T) -> Self {
        Self {
            options,
            host,
            topics,
        }
    }

    pub fn options(&self) -> &ConsoleOptions {
        &self.options
    }

    pub fn header(&self, entry: &Entry) -> Result<String> {
        let mut glyph = self
            .topics
            .glyph(&entry.topic)
            .ok_or_else(|| FormatError::UnknownTopic(entry.topic.clone()))?;
        if self.options.trim {
            glyph = glyph.trim();
        }
        Ok(format!("{} {} {}", local_clock_time(&entry.ts), glyph, entry.ns))
    }

    /// Call the host once for `entry`.
    pub fn write(&self, entry: &Entry) -> Result<()> {
        let header = self.header(entry)?;
        let args: Vec<ConsoleArg<'_>> = [
            entry.msg.as_deref().map(ConsoleArg::Text),
            entry.data.as_ref().map(ConsoleArg::Data),
            entry.stack.as_deref().map(ConsoleArg::Text),
            entry.cause.as_deref().map(ConsoleArg::Text),
        ]
        .into_iter()
        .flatten()
        .collect();
        self.host.log(&header, &args)?;
        Ok(())
    }
}
