//! The [`format`](self) module implements the fallback rendering of arguments
//! for matchers that do not provide their own [`FormatArgument`](crate::matcher::FormatArgument)
//! capability.

use crate::types::Argument;

/// Renders arguments for diagnostic output.
///
/// Arguments that did not match are surrounded by the highlight markers.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct ArgumentFormatter {
    null_literal: &'static str,
    highlight_open: &'static str,
    highlight_close: &'static str,
}

impl ArgumentFormatter {
    /// Formatter used by [`ArgumentSpecification`](crate::ArgumentSpecification)
    /// if the matcher does not format arguments itself.
    pub const DEFAULT: Self = Self {
        null_literal: "<null>",
        highlight_open: "*",
        highlight_close: "*",
    };

    /// Set the text that is printed for absent arguments.
    #[must_use]
    pub const fn with_null_literal(mut self, value: &'static str) -> Self {
        self.null_literal = value;

        self
    }

    /// Set the markers that surround mismatched arguments.
    #[must_use]
    pub const fn with_highlight(mut self, open: &'static str, close: &'static str) -> Self {
        self.highlight_open = open;
        self.highlight_close = close;

        self
    }

    /// Render `argument`, highlighted if `highlight_as_mismatch` is set.
    #[must_use]
    pub fn format(&self, argument: Option<&dyn Argument>, highlight_as_mismatch: bool) -> String {
        let mut out = String::new();

        if highlight_as_mismatch {
            out.push_str(self.highlight_open);
        }

        match argument {
            Some(argument) => out.push_str(&argument.literal().to_string()),
            None => out.push_str(self.null_literal),
        }

        if highlight_as_mismatch {
            out.push_str(self.highlight_close);
        }

        out
    }
}

impl Default for ArgumentFormatter {
    fn default() -> Self {
        Self::DEFAULT
    }
}

#[cfg(test)]
mod tests {
    use super::ArgumentFormatter;

    #[test]
    fn matched_values_are_printed_plain() {
        let f = ArgumentFormatter::default();

        assert_eq!("42", f.format(Some(&42), false));
        assert_eq!("\"fuu\"", f.format(Some(&String::from("fuu")), false));
        assert_eq!("<null>", f.format(None, false));
    }

    #[test]
    fn mismatched_values_are_highlighted() {
        let f = ArgumentFormatter::DEFAULT;

        assert_eq!("*42*", f.format(Some(&42), true));
        assert_eq!("*<null>*", f.format(None, true));
    }

    #[test]
    fn custom() {
        let f = ArgumentFormatter::DEFAULT
            .with_null_literal("None")
            .with_highlight(">>", "<<");

        assert_eq!(">>None<<", f.format(None, true));
        assert_eq!("Some(1)", f.format(Some(&Some(1)), false));
    }
}
