use std::any::Any;
use std::fmt::{Debug, Formatter, Result as FmtResult};
use std::marker::PhantomData;
use std::ops::{Bound, RangeBounds};

use crate::types::Argument;

use super::{describe_mismatch, ArgumentMatcher, DescribeNonMatch};

pub fn range<R, T>(range: R) -> Range<R, T>
where
    R: RangeBounds<T>,
{
    Range::new(range)
}

/// Matcher that accepts arguments of type `T` that are contained in a range.
#[must_use]
#[derive(Debug)]
pub struct Range<R, T> {
    range: R,
    _marker: PhantomData<fn(&T)>,
}

impl<R, T> Range<R, T> {
    pub fn new(range: R) -> Self {
        Self {
            range,
            _marker: PhantomData,
        }
    }
}

impl<R, T> ArgumentMatcher for Range<R, T>
where
    R: RangeBounds<T> + Send + Sync,
    T: PartialOrd + Any + Debug,
{
    fn is_satisfied_by(&self, argument: Option<&dyn Argument>) -> bool {
        argument
            .and_then(|argument| argument.downcast_ref::<T>())
            .is_some_and(|value| self.range.contains(value))
    }

    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self.range.start_bound() {
            Bound::Unbounded => write!(f, "[_, "),
            Bound::Included(x) => write!(f, "[{x:?}, "),
            Bound::Excluded(x) => write!(f, "({x:?}, "),
        }?;

        match self.range.end_bound() {
            Bound::Unbounded => write!(f, "_]"),
            Bound::Included(x) => write!(f, "{x:?}]"),
            Bound::Excluded(x) => write!(f, "{x:?})"),
        }?;

        Ok(())
    }

    fn describe_non_match(&self) -> Option<&dyn DescribeNonMatch> {
        Some(self)
    }
}

impl<R, T> DescribeNonMatch for Range<R, T>
where
    R: RangeBounds<T> + Send + Sync,
    T: PartialOrd + Any + Debug,
{
    fn describe_for(&self, argument: Option<&dyn Argument>) -> String {
        describe_mismatch(self, argument)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::matcher::Describe;

    #[test]
    fn contains() {
        let matcher = range(4..=6);

        assert!(!matcher.is_satisfied_by(Some(&3)));
        assert!(matcher.is_satisfied_by(Some(&4)));
        assert!(matcher.is_satisfied_by(Some(&6)));
        assert!(!matcher.is_satisfied_by(Some(&7)));
        assert!(!matcher.is_satisfied_by(Some(&5u8)));
    }

    #[test]
    fn display() {
        assert_eq!("[4, 6]", Describe(&range(4..=6)).to_string());
        assert_eq!("[4, 6)", Describe(&range(4..6)).to_string());
        assert_eq!("[4, _]", Describe(&range(4..)).to_string());
        assert_eq!("[_, 6]", Describe(&range(..=6)).to_string());
    }
}
