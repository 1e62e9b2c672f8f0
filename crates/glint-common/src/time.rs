//! ---
//! glint_section: "01-core-functionality"
//! glint_subsection: "module"
//! glint_type: "source"
//! glint_scope: "code"
//! glint_description: "Clock and instant formatting helpers."
//! glint_version: "v0.0.0-prealpha"
//! glint_owner: "tbd"
//! ---
use chrono::{DateTime, Local, TimeZone, Timelike, Utc};

/// Format the wall-clock time of `instant` as `HH:MM:SS.mmm`.
///
/// The fields are taken from the timezone carried by `instant`, so callers
/// choose between local and UTC rendering by converting beforehand.
pub fn clock_time<Tz: TimeZone>(instant: &DateTime<Tz>) -> String {
    // Leap seconds surface as millis >= 1000 in chrono; clamp to the last frame.
    let millis = instant.timestamp_subsec_millis().min(999);
    format!(
        "{:02}:{:02}:{:02}.{:03}",
        instant.hour(),
        instant.minute(),
        instant.second(),
        millis
    )
}

/// Format `instant` in the local timezone of the host.
pub fn local_clock_time(instant: &DateTime<Utc>) -> String {
    clock_time(&instant.with_timezone(&Local))
}

/// Render `instant` the way log files expect it: `YYYY-MM-DDTHH:MM:SS.mmmZ`.
pub fn iso_instant(instant: &DateTime<Utc>) -> String {
    instant.to_rfc3339_opts(chrono::SecondsFormat::Millis, true)
}
