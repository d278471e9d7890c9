use std::any::Any;
use std::fmt::{Debug, Formatter, Result as FmtResult};
use std::marker::PhantomData;

use crate::types::Argument;

use super::ArgumentMatcher;

/// Create a [`Closure`] matcher that forwards arguments of type `T` to `f`.
pub fn closure<T, F>(f: F) -> Closure<T, F>
where
    F: Fn(&T) -> bool,
{
    Closure {
        f,
        _marker: PhantomData,
    }
}

/// Matcher that downcasts the argument to `T` and asks a closure.
///
/// Arguments of any other type and absent arguments do not match.
#[must_use]
pub struct Closure<T, F> {
    f: F,
    _marker: PhantomData<fn(&T)>,
}

impl<T, F> ArgumentMatcher for Closure<T, F>
where
    T: Any,
    F: Fn(&T) -> bool + Send + Sync,
{
    fn is_satisfied_by(&self, argument: Option<&dyn Argument>) -> bool {
        argument
            .and_then(|argument| argument.downcast_ref::<T>())
            .is_some_and(|value| (self.f)(value))
    }

    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "closure")
    }
}

impl<T, F> Debug for Closure<T, F> {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "Closure")
    }
}
