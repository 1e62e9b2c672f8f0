//! ---
//! glint_section: "03-rendering-engine"
//! glint_subsection: "module"
//! glint_type: "source"
//! glint_scope: "code"
//! glint_description: "Named color styles applied to rendered segments."
//! glint_version: "v0.0.0-prealpha"
//! glint_owner: "tbd"
//! ---
use crossterm::style::Stylize;

/// One style per semantic role of a rendered segment.
///
/// Implementations wrap the text with whatever decoration they produce;
/// [`NoColor`] returns it unchanged.
pub trait Palette: Send + Sync {
    /// Timestamps and secondary stack lines.
    fn muted(&self, text: &str) -> String;
    fn namespace(&self, text: &str) -> String;
    /// The message line of an error stack.
    fn alert(&self, text: &str) -> String;
    /// Brackets, separators and the `caused by` marker.
    fn accent(&self, text: &str) -> String;
    /// Data keys.
    fn key(&self, text: &str) -> String;
    /// Numbers, booleans and dates.
    fn number(&self, text: &str) -> String;
    fn string(&self, text: &str) -> String;
    fn null(&self, text: &str) -> String;
}

/// Identity palette for uncolored output.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoColor;

impl Palette for NoColor {
    fn muted(&self, text: &str) -> String {
        text.to_owned()
    }

    fn namespace(&self, text: &str) -> String {
        text.to_owned()
    }

    fn alert(&self, text: &str) -> String {
        text.to_owned()
    }

    fn accent(&self, text: &str) -> String {
        text.to_owned()
    }

    fn key(&self, text: &str) -> String {
        text.to_owned()
    }

    fn number(&self, text: &str) -> String {
        text.to_owned()
    }

    fn string(&self, text: &str) -> String {
        text.to_owned()
    }

    fn null(&self, text: &str) -> String {
        text.to_owned()
    }
}

/// ANSI terminal styles.
#[derive(Debug, Clone, Copy, Default)]
pub struct Ansi;

impl Palette for Ansi {
    fn muted(&self, text: &str) -> String {
        text.dark_grey().to_string()
    }

    fn namespace(&self, text: &str) -> String {
        text.blue().to_string()
    }

    fn alert(&self, text: &str) -> String {
        text.white().on_red().bold().to_string()
    }

    fn accent(&self, text: &str) -> String {
        text.magenta().to_string()
    }

    fn key(&self, text: &str) -> String {
        text.bold().to_string()
    }

    fn number(&self, text: &str) -> String {
        text.yellow().to_string()
    }

    fn string(&self, text: &str) -> String {
        text.green().to_string()
    }

    fn null(&self, text: &str) -> String {
        text.bold().to_string()
    }
}

impl<P: Palette + ?Sized> Palette for &P {
    fn muted(&self, text: &str) -> String {
        (**self).muted(text)
    }

    fn namespace(&self, text: &str) -> String {
        (**self).namespace(text)
    }

    fn alert(&self, text: &str) -> String {
        (**self).alert(text)
    }

    fn accent(&self, text: &str) -> String {
        (**self).accent(text)
    }

    fn key(&self, text: &str) -> String {
        (**self).key(text)
    }

    fn number(&self, text: &str) -> String {
        (**self).number(text)
    }

    fn string(&self, text: &str) -> String {
        (**self).string(text)
    }

    fn null(&self, text: &str) -> String {
        (**self).null(text)
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    /// Wraps text in role tags so decorated output can be asserted literally.
    #[derive(Debug, Clone, Copy, Default)]
    pub(crate) struct Tags;

    impl Palette for Tags {
        fn muted(&self, text: &str) -> String {
            format!("<muted>{text}</muted>")
        }

        fn namespace(&self, text: &str) -> String {
            format!("<ns>{text}</ns>")
        }

        fn alert(&self, text: &str) -> String {
            format!("<alert>{text}</alert>")
        }

        fn accent(&self, text: &str) -> String {
            format!("<accent>{text}</accent>")
        }

        fn key(&self, text: &str) -> String {
            format!("<key>{text}</key>")
        }

        fn number(&self, text: &str) -> String {
            format!("<num>{text}</num>")
        }

        fn string(&self, text: &str) -> String {
            format!("<str>{text}</str>")
        }

        fn null(&self, text: &str) -> String {
            format!("<null>{text}</null>")
        }
    }

    #[test]
    fn no_color_is_identity() {
        let palette = NoColor;
        for role in [
            palette.muted("x"),
            palette.namespace("x"),
            palette.alert("x"),
            palette.accent("x"),
            palette.key("x"),
            palette.number("x"),
            palette.string("x"),
            palette.null("x"),
        ] {
            assert_eq!(role, "x");
        }
    }

    #[test]
    fn ansi_wraps_text_in_escape_sequences() {
        let bold = Ansi.key("name");
        assert!(bold.starts_with("\u{1b}["), "{bold:?}");
        assert!(bold.contains("name"));
        assert_ne!(bold, "name");
    }

    #[test]
    fn references_delegate() {
        let palette = &Tags;
        assert_eq!(Palette::accent(&palette, "{}"), "<accent>{}</accent>");
    }
}
