//! ---
//! glint_section: "03-rendering-engine"
//! glint_subsection: "module"
//! glint_type: "source"
//! glint_scope: "code"
//! glint_description: "Condensed renderings of error stacks."
//! glint_version: "v0.0.0-prealpha"
//! glint_owner: "tbd"
//! ---
use glint_model::StackStyle;

use crate::palette::Palette;

/// Marker placed in front of a rendered cause.
pub const CAUSED_BY: &str = "caused by";

struct StackParts<'a> {
    message: &'a str,
    /// Everything after the first line break.
    trace: Option<&'a str>,
}

impl<'a> StackParts<'a> {
    fn split(stack: &'a str) -> Self {
        match stack.split_once('\n') {
            Some((message, trace)) => Self {
                message,
                trace: Some(trace),
            },
            None => Self {
                message: stack,
                trace: None,
            },
        }
    }

    /// First trace line without its indentation.
    fn peek(&self) -> Option<&'a str> {
        self.trace
            .map(|trace| trace.split('\n').next().unwrap_or(trace).trim())
            .filter(|line| !line.is_empty())
    }
}

/// Render `stack` for plain text output. [`StackStyle::Off`] renders nothing.
///
/// Peek drops the trace part entirely when the line after the message is
/// blank, so no trailing space is left behind.
pub fn plain(style: StackStyle, stack: &str) -> String {
    let parts = StackParts::split(stack);
    match style {
        StackStyle::Off => String::new(),
        StackStyle::Full => stack.to_owned(),
        StackStyle::Message => parts.message.to_owned(),
        StackStyle::Peek => match parts.peek() {
            Some(peek) => format!("{} {}", parts.message, peek),
            None => parts.message.to_owned(),
        },
    }
}

/// Render `stack` with the message line highlighted in every style.
pub fn decorated<P: Palette + ?Sized>(style: StackStyle, stack: &str, palette: &P) -> String {
    let parts = StackParts::split(stack);
    let message = palette.alert(parts.message);
    match (style, parts.trace) {
        (StackStyle::Off, _) => String::new(),
        (StackStyle::Message, _) | (_, None) => message,
        (StackStyle::Peek, Some(_)) => match parts.peek() {
            Some(peek) => format!("{} {}", message, palette.muted(peek)),
            None => message,
        },
        (StackStyle::Full, Some(trace)) => format!("{}\n{}", message, palette.muted(trace)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::palette::tests::Tags;

    const STACK: &str = "Error: Ouch!\n    at foo\n    at bar";

    #[test]
    fn plain_message_keeps_first_line() {
        assert_eq!(plain(StackStyle::Message, STACK), "Error: Ouch!");
    }

    #[test]
    fn plain_peek_joins_trimmed_second_line() {
        assert_eq!(plain(StackStyle::Peek, STACK), "Error: Ouch! at foo");
    }

    #[test]
    fn plain_full_is_verbatim() {
        assert_eq!(plain(StackStyle::Full, STACK), STACK);
    }

    #[test]
    fn single_line_stacks_render_whole() {
        for style in [StackStyle::Message, StackStyle::Peek, StackStyle::Full] {
            assert_eq!(plain(style, "Error: Ouch!"), "Error: Ouch!");
        }
    }

    #[test]
    fn peek_without_further_line_break_uses_the_remainder() {
        assert_eq!(plain(StackStyle::Peek, "Error: Ouch!\n   at foo  "), "Error: Ouch! at foo");
        assert_eq!(plain(StackStyle::Peek, "Error: Ouch!\n"), "Error: Ouch!");
        assert_eq!(plain(StackStyle::Peek, "Error: Ouch!\n   \n    at foo"), "Error: Ouch!");
    }

    #[test]
    fn off_renders_nothing() {
        assert_eq!(plain(StackStyle::Off, STACK), "");
        assert_eq!(decorated(StackStyle::Off, STACK, &Tags), "");
    }

    #[test]
    fn decorated_message_highlights_first_line() {
        assert_eq!(
            decorated(StackStyle::Message, STACK, &Tags),
            "<alert>Error: Ouch!</alert>"
        );
    }

    #[test]
    fn decorated_peek_mutes_trace_line() {
        assert_eq!(
            decorated(StackStyle::Peek, STACK, &Tags),
            "<alert>Error: Ouch!</alert> <muted>at foo</muted>"
        );
    }

    #[test]
    fn decorated_full_highlights_and_mutes_the_rest() {
        assert_eq!(
            decorated(StackStyle::Full, STACK, &Tags),
            "<alert>Error: Ouch!</alert>\n<muted>    at foo\n    at bar</muted>"
        );
        assert_eq!(
            decorated(StackStyle::Full, "Error: Ouch!", &Tags),
            "<alert>Error: Ouch!</alert>"
        );
    }
}
