#![warn(
    unused,
    future_incompatible,
    missing_debug_implementations,
    nonstandard_style,
    rust_2018_idioms,
    rust_2021_compatibility
)]

//! Argument specifications for mocked call expectations.
//!
//! An [`ArgumentSpecification`] describes what a single argument of an expected
//! call has to look like: the [`ArgType`] it must be compatible with and an
//! [`ArgumentMatcher`] that decides whether the actual value is acceptable.
//! Optionally an action is attached that is run with the argument once the
//! call was matched.

pub mod action;
pub mod error;
pub mod format;
pub mod matcher;
pub mod specification;
pub mod types;

pub use action::ActionFn;
pub use error::MatchError;
pub use format::ArgumentFormatter;
pub use matcher::{ArgumentMatcher, DescribeNonMatch, FormatArgument};
pub use specification::ArgumentSpecification;
pub use types::{is_compatible, ArgType, Argument};
