//! The [`matcher`](self) module defines the [`ArgumentMatcher`] trait, the
//! optional diagnostic capabilities a matcher may provide and a set of
//! pre-defined matchers.

mod any;
mod closure;
mod compare;
mod range;
mod string;

use std::fmt::{Display, Formatter, Result as FmtResult};

use crate::types::Argument;

pub use any::{any, any_of, any_of_type, AnyArg};
pub use closure::{closure, Closure};
pub use compare::{eq, ge, gt, le, lt, ne, Eq, Ge, Gt, Le, Lt, Ne};
pub use range::{range, Range};
pub use string::{
    contains as str_contains, ends_with as str_ends_with, is_empty, starts_with as str_starts_with,
    Contains as StrContains, EndsWith as StrEndsWith, IsEmpty, StartsWith as StrStartsWith,
};

/// A matcher decides whether an argument passed to a mocked call is acceptable
/// for a recorded call expectation.
///
/// Matchers only have to implement [`is_satisfied_by`](Self::is_satisfied_by).
/// Additional diagnostics are opt-in: a matcher that wants to explain a
/// mismatch or to render arguments itself implements [`DescribeNonMatch`] or
/// [`FormatArgument`] and returns itself from the corresponding query method.
pub trait ArgumentMatcher: Send + Sync {
    /// Returns `true` if the passed `argument` is acceptable, `false` otherwise.
    ///
    /// `None` represents an absent argument.
    fn is_satisfied_by(&self, argument: Option<&dyn Argument>) -> bool;

    /// Write a human readable representation of the matcher to the passed
    /// formatter. Writes nothing by default.
    ///
    /// # Errors
    /// Returns an error if writing to the formatter failed.
    fn fmt(&self, _f: &mut Formatter<'_>) -> FmtResult {
        Ok(())
    }

    /// Returns the [`DescribeNonMatch`] capability of this matcher, if any.
    fn describe_non_match(&self) -> Option<&dyn DescribeNonMatch> {
        None
    }

    /// Returns the [`FormatArgument`] capability of this matcher, if any.
    fn argument_formatter(&self) -> Option<&dyn FormatArgument> {
        None
    }
}

/// Optional matcher capability to explain why an argument did not match.
pub trait DescribeNonMatch {
    /// Returns a description why `argument` is not acceptable.
    fn describe_for(&self, argument: Option<&dyn Argument>) -> String;
}

/// Optional matcher capability to render an argument for diagnostic output.
pub trait FormatArgument {
    /// Render `argument`. `highlight_as_mismatch` is `true` if the argument did
    /// not satisfy the matcher.
    fn format(&self, argument: Option<&dyn Argument>, highlight_as_mismatch: bool) -> String;
}

/// Helper that implements [`Display`] for any [`ArgumentMatcher`].
pub struct Describe<'a, M: ?Sized>(pub &'a M);

impl<M> Display for Describe<'_, M>
where
    M: ArgumentMatcher + ?Sized,
{
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        ArgumentMatcher::fmt(self.0, f)
    }
}

impl<M> std::fmt::Debug for Describe<'_, M>
where
    M: ArgumentMatcher + ?Sized,
{
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        ArgumentMatcher::fmt(self.0, f)
    }
}

/// Shared wording for matchers that describe a mismatch in terms of
/// themselves.
pub(crate) fn describe_mismatch<M>(matcher: &M, argument: Option<&dyn Argument>) -> String
where
    M: ArgumentMatcher + ?Sized,
{
    match argument {
        Some(argument) => format!(
            "{} does not satisfy {}",
            argument.literal(),
            Describe(matcher)
        ),
        None => format!("<null> does not satisfy {}", Describe(matcher)),
    }
}
