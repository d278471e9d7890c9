use std::any::Any;
use std::fmt::{Debug, Formatter, Result as FmtResult};

use super::ArgType;

/// A value passed to a mocked call, seen without its static type.
///
/// Implemented for every `'static` type that implements [`Debug`]. Matchers
/// receive arguments as `Option<&dyn Argument>`, where `None` stands for an
/// absent value.
pub trait Argument: Any + 'static {
    /// Dynamic type of the value.
    fn arg_type(&self) -> ArgType;

    /// Returns the value as [`Any`] to allow downcasting.
    fn as_any(&self) -> &dyn Any;

    /// Write the literal representation of the value.
    ///
    /// # Errors
    /// Returns an error if writing to the formatter failed.
    fn fmt_literal(&self, f: &mut Formatter<'_>) -> FmtResult;
}

impl<T> Argument for T
where
    T: Any + Debug,
{
    fn arg_type(&self) -> ArgType {
        ArgType::of::<T>()
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn fmt_literal(&self, f: &mut Formatter<'_>) -> FmtResult {
        Debug::fmt(self, f)
    }
}

impl dyn Argument {
    /// Returns a reference to the inner value if it is of type `T`.
    #[must_use]
    pub fn downcast_ref<T: Any>(&self) -> Option<&T> {
        self.as_any().downcast_ref::<T>()
    }

    /// Returns the value as string slice if it is a [`String`] or a `&str`.
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        if let Some(s) = self.downcast_ref::<String>() {
            Some(s.as_str())
        } else {
            self.downcast_ref::<&'static str>().copied()
        }
    }

    /// Returns a [`Display`](std::fmt::Display)able wrapper that renders the
    /// literal representation of the value.
    #[must_use]
    pub fn literal(&self) -> Literal<'_> {
        Literal(self)
    }
}

/// Helper that implements [`Display`](std::fmt::Display) for a
/// [`Argument`] using its [`fmt_literal`](Argument::fmt_literal) method.
pub struct Literal<'a>(&'a dyn Argument);

impl std::fmt::Display for Literal<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        self.0.fmt_literal(f)
    }
}

impl Debug for Literal<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        self.0.fmt_literal(f)
    }
}

#[cfg(test)]
mod tests {
    use super::Argument;
    use crate::types::ArgType;

    #[test]
    fn downcast() {
        let value = 5u32;
        let arg: &dyn Argument = &value;

        assert_eq!(Some(&5u32), arg.downcast_ref::<u32>());
        assert_eq!(None, arg.downcast_ref::<i32>());
        assert_eq!(ArgType::of::<u32>(), arg.arg_type());
    }

    #[test]
    fn strings() {
        let owned = String::from("fuu");
        let borrowed: &'static str = "bar";

        assert_eq!(Some("fuu"), (&owned as &dyn Argument).as_str());
        assert_eq!(Some("bar"), (&borrowed as &dyn Argument).as_str());
        assert_eq!(None, (&1u8 as &dyn Argument).as_str());
    }

    #[test]
    fn literal() {
        let value = String::from("fuu");
        let arg: &dyn Argument = &value;

        assert_eq!("\"fuu\"", arg.literal().to_string());
    }
}
