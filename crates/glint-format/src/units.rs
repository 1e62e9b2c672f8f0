//! ---
//! glint_section: "03-rendering-engine"
//! glint_subsection: "module"
//! glint_type: "source"
//! glint_scope: "code"
//! glint_description: "Key-driven unit inference and value formatting."
//! glint_version: "v0.0.0-prealpha"
//! glint_owner: "tbd"
//! ---
use glint_model::Value;
use serde_json::Number;

use crate::stringify::{number_text, Stringifier};

/// One rung of a unit ladder: values of at least `factor` base units are
/// shown in `unit`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct UnitStep {
    pub unit: &'static str,
    pub factor: f64,
}

/// A key naming convention and the ladder its numbers are scaled along.
/// The first step is the base unit and must have a factor of one.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct UnitFamily {
    pub token: &'static str,
    pub steps: &'static [UnitStep],
}

const KIB: f64 = 1024.0;

/// Recognised unit conventions, matched in order.
pub const UNIT_FAMILIES: &[UnitFamily] = &[
    UnitFamily {
        token: "ms",
        steps: &[
            UnitStep { unit: "ms", factor: 1.0 },
            UnitStep { unit: "s", factor: 1_000.0 },
            UnitStep { unit: "m", factor: 60_000.0 },
        ],
    },
    UnitFamily {
        token: "bytes",
        steps: &[
            UnitStep { unit: "B", factor: 1.0 },
            UnitStep { unit: "KB", factor: KIB },
            UnitStep { unit: "MB", factor: KIB * KIB },
            UnitStep { unit: "GB", factor: KIB * KIB * KIB },
        ],
    },
];

/// Result of formatting one data field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Formatted<'a> {
    /// Key to print before `=`, if any.
    pub key: Option<&'a str>,
    pub value: String,
    /// Set only for unit-bearing keys; `value` is then plain numeric text.
    pub unit: Option<&'static str>,
}

impl UnitFamily {
    /// Match `key` against this convention and return the display key.
    ///
    /// The bare token drops the key entirely; `<stem>_<token>` and
    /// `<token>_<stem>` keep the stem.
    fn match_key<'a>(&self, key: &'a str) -> Option<Option<&'a str>> {
        if key == self.token {
            return Some(None);
        }
        let suffixed = key
            .strip_suffix(self.token)
            .and_then(|stem| stem.strip_suffix('_'));
        let prefixed = key
            .strip_prefix(self.token)
            .and_then(|stem| stem.strip_prefix('_'));
        suffixed
            .or(prefixed)
            .filter(|stem| !stem.is_empty())
            .map(Some)
    }

    /// Scale `number` to the largest step it reaches.
    pub fn scale(&self, number: &Number) -> (String, &'static str) {
        let magnitude = number.as_f64().map_or(0.0, f64::abs);
        let index = self
            .steps
            .iter()
            .rposition(|step| step.factor <= magnitude)
            .unwrap_or(0);
        let step = self.steps[index];
        if index == 0 {
            return (number_text(number), step.unit);
        }
        let scaled = number.as_f64().unwrap_or_default() / step.factor;
        (format!("{:.1}", scaled), step.unit)
    }
}

/// Find the unit family a key belongs to together with its display key.
pub fn unit_for_key(key: &str) -> Option<(&'static UnitFamily, Option<&str>)> {
    UNIT_FAMILIES
        .iter()
        .find_map(|family| family.match_key(key).map(|display| (family, display)))
}

/// Format one top-level data field.
///
/// Numbers under a unit-bearing key are rescaled; everything else goes
/// through `stringifier` with the key kept verbatim. Nested values never see
/// unit inference.
pub fn format_value<'a, S>(key: Option<&'a str>, value: &Value, stringifier: &S) -> Formatted<'a>
where
    S: Stringifier + ?Sized,
{
    if let (Some(key), Value::Number(number)) = (key, value) {
        if let Some((family, display)) = unit_for_key(key) {
            let (scaled, unit) = family.scale(number);
            return Formatted {
                key: display,
                value: scaled,
                unit: Some(unit),
            };
        }
    }
    Formatted {
        key,
        value: stringifier.render(value),
        unit: None,
    }
}
