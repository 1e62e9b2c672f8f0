//! ---
//! glint_section: "03-rendering-engine"
//! glint_subsection: "module"
//! glint_type: "source"
//! glint_scope: "code"
//! glint_description: "Display-safe escaping of control characters."
//! glint_version: "v0.0.0-prealpha"
//! glint_owner: "tbd"
//! ---
use std::borrow::Cow;

/// Display form of a single character.
///
/// Printable ASCII and everything from U+0080 upwards is returned as is, so
/// accented letters, symbols and emoji survive untouched. Control codes get a
/// mnemonic where one exists and `\xHH` otherwise; DEL has no mnemonic.
pub fn escape_char(c: char) -> Cow<'static, str> {
    let code = c as u32;
    if (0x20..=0x7e).contains(&code) || code >= 0x80 {
        return Cow::Owned(c.to_string());
    }
    let mnemonic = match code {
        0 => "\\0",
        7 => "\\a",
        8 => "\\b",
        9 => "\\t",
        10 => "\\n",
        11 => "\\v",
        12 => "\\f",
        13 => "\\r",
        27 => "\\e",
        _ => return Cow::Owned(format!("\\x{:02x}", code)),
    };
    Cow::Borrowed(mnemonic)
}

/// Escape a string for display between single quotes.
pub fn escape_str(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '\'' => escaped.push_str("\\'"),
            ' '..='~' => escaped.push(c),
            c if (c as u32) >= 0x80 => escaped.push(c),
            c => escaped.push_str(&escape_char(c)),
        }
    }
    escaped
}
