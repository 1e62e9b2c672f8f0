//! ---
//! glint_section: "04-command-line"
//! glint_subsection: "binary"
//! glint_type: "source"
//! glint_scope: "code"
//! glint_description: "Command-line renderer for newline-delimited JSON log entries."
//! glint_version: "v0.0.0-prealpha"
//! glint_owner: "tbd"
//! ---
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use glint_common::config::{AdapterKind, AppConfig, LoadedAppConfig};
use glint_common::logging;
use glint_model::StackStyle;
use tracing::{debug, info};

mod render;

use render::RenderSettings;

const CONFIG_CANDIDATES: &[&str] = &["glint.toml", "/etc/glint/glint.toml"];

#[derive(Debug, Parser)]
#[command(
    author,
    version,
    about = "Render structured log entries for humans",
    long_about = "Reads one JSON log entry per line from INPUT (or stdin) and prints \
                  each as a human-readable line. Flags override the configuration file."
)]
struct Cli {
    /// NDJSON file to read; stdin when omitted or `-`.
    #[arg(value_name = "INPUT")]
    input: Option<PathBuf>,

    /// Output adapter.
    #[arg(long, value_enum, value_name = "ADAPTER")]
    format: Option<FormatArg>,

    /// Leave out the timestamp.
    #[arg(long)]
    no_ts: bool,

    /// Leave out the topic glyph.
    #[arg(long)]
    no_topic: bool,

    /// Leave out the namespace.
    #[arg(long)]
    no_ns: bool,

    /// Leave out data fields.
    #[arg(long)]
    no_data: bool,

    /// How much of an error stack to show.
    #[arg(long, value_enum, value_name = "STYLE")]
    stack: Option<StackArg>,

    /// Keep the padding of narrow topic glyphs in console output.
    #[arg(long)]
    no_trim: bool,

    /// Disable colors.
    #[arg(long)]
    no_color: bool,

    /// Configuration file (overrides GLINT_CONFIG and the default locations).
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum FormatArg {
    Basic,
    Fancy,
    Console,
}

impl From<FormatArg> for AdapterKind {
    fn from(value: FormatArg) -> Self {
        match value {
            FormatArg::Basic => AdapterKind::Basic,
            FormatArg::Fancy => AdapterKind::Fancy,
            FormatArg::Console => AdapterKind::Console,
        }
    }
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum StackArg {
    Off,
    Message,
    Peek,
    Full,
}

impl From<StackArg> for StackStyle {
    fn from(value: StackArg) -> Self {
        match value {
            StackArg::Off => StackStyle::Off,
            StackArg::Message => StackStyle::Message,
            StackArg::Peek => StackStyle::Peek,
            StackArg::Full => StackStyle::Full,
        }
    }
}

impl Cli {
    /// Merge command-line overrides into the configured defaults.
    fn settings(&self, config: &AppConfig) -> RenderSettings {
        let format = &config.format;
        let mut settings = RenderSettings {
            adapter: format.adapter,
            color: format.color,
            options: format.options,
            console: format.console,
        };
        if let Some(adapter) = self.format {
            settings.adapter = adapter.into();
        }
        if let Some(stack) = self.stack {
            settings.options.stack = stack.into();
        }
        settings.options.ts &= !self.no_ts;
        settings.options.topic &= !self.no_topic;
        settings.options.ns &= !self.no_ns;
        settings.options.data &= !self.no_data;
        settings.console.trim &= !self.no_trim;
        settings.color &= !self.no_color;
        settings
    }

    fn open_input(&self) -> Result<Box<dyn BufRead>> {
        match self.input.as_deref() {
            Some(path) if path != Path::new("-") => {
                let file = File::open(path)
                    .with_context(|| format!("unable to open input {}", path.display()))?;
                Ok(Box::new(BufReader::new(file)))
            }
            _ => Ok(Box::new(io::stdin().lock())),
        }
    }
}

fn load_config(explicit: Option<&Path>) -> Result<LoadedAppConfig> {
    match explicit {
        Some(path) => Ok(LoadedAppConfig {
            config: AppConfig::from_path(path)?,
            source: Some(path.to_path_buf()),
        }),
        None => AppConfig::load_with_source(CONFIG_CANDIDATES),
    }
}

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();
    let loaded = load_config(cli.config.as_deref())?;
    logging::init_tracing("glintctl", &loaded.config.logging)?;
    if let Some(source) = &loaded.source {
        debug!(config = %source.display(), "configuration loaded");
    }

    let settings = cli.settings(&loaded.config);
    let mut sink = render::build_sink(&settings);
    let summary = render::run(cli.open_input()?, sink.as_mut())?;
    info!(
        rendered = summary.rendered,
        skipped = summary.skipped,
        "input exhausted"
    );

    if summary.skipped > 0 {
        Ok(ExitCode::FAILURE)
    } else {
        Ok(ExitCode::SUCCESS)
    }
}
