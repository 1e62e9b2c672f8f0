//! ---
//! glint_section: "01-core-functionality"
//! glint_subsection: "module"
//! glint_type: "source"
//! glint_scope: "code"
//! glint_description: "Shared time, configuration and logging utilities."
//! glint_version: "v0.0.0-prealpha"
//! glint_owner: "tbd"
//! ---
//! Core shared primitives for the Glint workspace.
//! This crate exposes configuration loading, tracing bootstrap, and the
//! time-of-day formatting consumed by the rendering adapters.

pub mod config;
pub mod logging;
pub mod time;

pub use config::{AdapterKind, AppConfig, FormatConfig, LoadedAppConfig, LoggingConfig};
pub use logging::{init_tracing, LogFormat};
pub use time::{clock_time, iso_instant, local_clock_time};
