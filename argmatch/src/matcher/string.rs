use std::fmt::{Formatter, Result as FmtResult};

use crate::types::Argument;

use super::ArgumentMatcher;

/* IsEmpty */

pub fn is_empty() -> IsEmpty {
    IsEmpty
}

/// Matcher that accepts empty strings.
#[must_use]
#[derive(Debug)]
pub struct IsEmpty;

impl ArgumentMatcher for IsEmpty {
    fn is_satisfied_by(&self, argument: Option<&dyn Argument>) -> bool {
        argument
            .and_then(|argument| argument.as_str())
            .is_some_and(str::is_empty)
    }

    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "IsEmpty")
    }
}

macro_rules! impl_str_matcher {
    ($type:ident, str::$method:ident, $fmt:tt) => {
        pub fn $method<P: Into<String>>(pattern: P) -> $type {
            $type(pattern.into())
        }

        #[must_use]
        #[derive(Debug)]
        pub struct $type(String);

        impl ArgumentMatcher for $type {
            fn is_satisfied_by(&self, argument: Option<&dyn Argument>) -> bool {
                argument
                    .and_then(|argument| argument.as_str())
                    .is_some_and(|value| value.$method(self.0.as_str()))
            }

            fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
                write!(f, $fmt, self.0)
            }
        }
    };
}

impl_str_matcher!(StartsWith, str::starts_with, "StartsWith({:?})");
impl_str_matcher!(EndsWith, str::ends_with, "EndsWith({:?})");
impl_str_matcher!(Contains, str::contains, "Contains({:?})");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn owned_and_static_strings() {
        let owned = String::from("hello world");
        let borrowed: &'static str = "hello";

        assert!(starts_with("hello").is_satisfied_by(Some(&owned)));
        assert!(starts_with("hello").is_satisfied_by(Some(&borrowed)));
        assert!(ends_with("world").is_satisfied_by(Some(&owned)));
        assert!(!ends_with("world").is_satisfied_by(Some(&borrowed)));
        assert!(contains("o w").is_satisfied_by(Some(&owned)));
    }

    #[test]
    fn empty() {
        assert!(is_empty().is_satisfied_by(Some(&String::new())));
        assert!(!is_empty().is_satisfied_by(Some(&"x")));
        assert!(!is_empty().is_satisfied_by(Some(&0u8)));
        assert!(!is_empty().is_satisfied_by(None));
    }
}
