//! ---
//! glint_section: "03-rendering-engine"
//! glint_subsection: "module"
//! glint_type: "source"
//! glint_scope: "code"
//! glint_description: "Line adapters turning log entries into terminal and file output."
//! glint_version: "v0.0.0-prealpha"
//! glint_owner: "tbd"
//! ---
//! Rendering engine for structured log entries.
//!
//! Three adapters share one data model: [`BasicFormatter`] produces plain
//! lines for files, [`FancyFormatter`] decorates them for a terminal, and
//! [`ConsoleAdapter`] hands the raw fields to a host console function.

pub mod assembler;
pub mod basic;
pub mod console;
pub mod errors;
pub mod escape;
pub mod fancy;
pub mod palette;
pub mod stack;
pub mod stringify;
pub mod units;
pub mod writer;

pub use assembler::{Decor, LineAssembler, LineFormatter};
pub use basic::{BasicFormatter, PlainDecor};
pub use console::{ConsoleAdapter, ConsoleArg, HostConsole, StdoutConsole};
pub use errors::{FormatError, Result};
pub use escape::{escape_char, escape_str};
pub use fancy::{FancyDecor, FancyFormatter};
pub use palette::{Ansi, NoColor, Palette};
pub use stringify::{DecoratedStringifier, JsonStringifier, Stringifier};
pub use units::{format_value, unit_for_key, Formatted, UnitFamily, UnitStep, UNIT_FAMILIES};
pub use writer::{EntrySink, LineWriter};
