//! The [`specification`](self) module implements [`ArgumentSpecification`],
//! the constraint a recorded call expectation puts on a single argument.

use std::any::Any;
use std::fmt::{Debug, Display, Formatter, Result as FmtResult};
use std::panic::{catch_unwind, AssertUnwindSafe};
use std::sync::Arc;

use tracing::debug;

use crate::action::{self, ActionFn};
use crate::error::MatchError;
use crate::format::ArgumentFormatter;
use crate::matcher::{any_of_type, ArgumentMatcher, Describe};
use crate::types::{is_compatible, ArgType, Argument};

/// Constraint on one argument of an expected call.
///
/// Pairs the type the argument must be compatible with, the [`ArgumentMatcher`]
/// that decides whether the value is acceptable and an optional action that is
/// run with the argument once the call was matched.
///
/// Matcher and action are shared, so cloning a specification is cheap.
#[derive(Clone)]
pub struct ArgumentSpecification {
    for_type: ArgType,
    matcher: Arc<dyn ArgumentMatcher>,
    action: ActionFn,
}

impl ArgumentSpecification {
    /// Create a new specification without an action.
    pub fn new<M>(for_type: ArgType, matcher: M) -> Self
    where
        M: ArgumentMatcher + 'static,
    {
        Self::from_parts(for_type, Arc::new(matcher), action::no_op())
    }

    /// Create a new specification that runs `action` for matched arguments.
    pub fn with_action<M, A>(for_type: ArgType, matcher: M, action: A) -> Self
    where
        M: ArgumentMatcher + 'static,
        A: Fn(Option<&dyn Argument>) + Send + Sync + 'static,
    {
        Self::from_parts(for_type, Arc::new(matcher), Arc::new(action))
    }

    /// Create a new specification from already shared parts.
    ///
    /// Pass [`action::no_op()`] if the specification should not have an action.
    pub fn from_parts(
        for_type: ArgType,
        matcher: Arc<dyn ArgumentMatcher>,
        action: ActionFn,
    ) -> Self {
        Self {
            for_type,
            matcher,
            action,
        }
    }

    /// Type the argument must be compatible with.
    #[must_use]
    pub fn for_type(&self) -> ArgType {
        self.for_type
    }

    /// Returns `true` if an action was configured for this specification.
    #[must_use]
    pub fn has_action(&self) -> bool {
        !action::is_no_op(&self.action)
    }

    /// Returns `true` if `argument` is compatible with [`for_type`](Self::for_type)
    /// and is accepted by the matcher.
    ///
    /// Matchers are user code. A matcher that panics is treated as not
    /// satisfied instead of tearing down the whole call matching.
    #[must_use]
    pub fn is_satisfied_by(&self, argument: Option<&dyn Argument>) -> bool {
        match self.try_is_satisfied_by(argument) {
            Ok(satisfied) => satisfied,
            Err(error) => {
                debug!(%error, "Argument matcher failed, treating argument as mismatch");

                false
            }
        }
    }

    /// Like [`is_satisfied_by`](Self::is_satisfied_by), but reports a
    /// panicking matcher as error.
    ///
    /// Panics can only be caught if the binary is built with `panic = "unwind"`.
    ///
    /// # Errors
    /// Returns [`MatchError::Panicked`] if the matcher panicked.
    pub fn try_is_satisfied_by(&self, argument: Option<&dyn Argument>) -> Result<bool, MatchError> {
        if !self.is_compatible_with(argument) {
            return Ok(false);
        }

        catch_unwind(AssertUnwindSafe(|| self.matcher.is_satisfied_by(argument))).map_err(
            |payload| MatchError::Panicked {
                matcher: self.matcher_text(),
                message: panic_message(payload.as_ref()),
            },
        )
    }

    /// Explain why `argument` does not satisfy this specification.
    ///
    /// Returns an empty string if the matcher is not able to describe
    /// mismatches.
    #[must_use]
    pub fn describe_non_match(&self, argument: Option<&dyn Argument>) -> String {
        let Some(describable) = self.matcher.describe_non_match() else {
            return String::new();
        };

        if self.is_compatible_with(argument) {
            describable.describe_for(argument)
        } else {
            self.incompatible_type_message(argument)
        }
    }

    /// Render `argument` for diagnostic output, highlighted if it does not
    /// satisfy this specification.
    #[must_use]
    pub fn format_argument(&self, argument: Option<&dyn Argument>) -> String {
        let highlight_as_mismatch = !self.is_satisfied_by(argument);

        match self.matcher.argument_formatter() {
            Some(formatter) => formatter.format(argument, highlight_as_mismatch),
            None => ArgumentFormatter::DEFAULT.format(argument, highlight_as_mismatch),
        }
    }

    /// Create a specification that accepts any argument compatible with
    /// `required_type`.
    ///
    /// If this specification has an action the copy runs it as well, but only
    /// for arguments compatible with `required_type`.
    #[must_use]
    pub fn create_copy_matching_any_arg_of_type(&self, required_type: ArgType) -> Self {
        let action = if self.has_action() {
            action::guarded(required_type, self.action.clone())
        } else {
            action::no_op()
        };

        Self::from_parts(required_type, Arc::new(any_of_type(required_type)), action)
    }

    /// Run the action of this specification with `argument`.
    ///
    /// Does not check whether the argument matches.
    pub fn run_action(&self, argument: Option<&dyn Argument>) {
        (self.action)(argument);
    }

    /// Textual form of the matcher; a panicking `fmt` must not escape the
    /// matching either.
    fn matcher_text(&self) -> String {
        catch_unwind(AssertUnwindSafe(|| self.to_string()))
            .unwrap_or_else(|_| "<unprintable>".to_owned())
    }

    fn is_compatible_with(&self, argument: Option<&dyn Argument>) -> bool {
        is_compatible(argument, &self.for_type)
    }

    fn incompatible_type_message(&self, argument: Option<&dyn Argument>) -> String {
        let actual = argument.map_or_else(ArgType::object, |argument| argument.arg_type());

        format!(
            "Expected an argument compatible with type {}. Actual type was {}.",
            self.for_type, actual
        )
    }
}

impl Display for ArgumentSpecification {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        Display::fmt(&Describe(&*self.matcher), f)
    }
}

impl Debug for ArgumentSpecification {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.debug_struct("ArgumentSpecification")
            .field("for_type", &self.for_type)
            .field("matcher", &Describe(&*self.matcher))
            .field("has_action", &self.has_action())
            .finish()
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&'static str>() {
        (*s).to_owned()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "Box<dyn Any>".to_owned()
    }
}
