use std::any::Any;
use std::fmt::{Debug, Formatter, Result as FmtResult};

use crate::types::Argument;

use super::{describe_mismatch, ArgumentMatcher, DescribeNonMatch};

macro_rules! impl_matcher {
    ($type:ident, $trait:ident::$method:ident, $fmt:tt) => {
        pub fn $method<T>(value: T) -> $type<T> {
            $type(value)
        }

        #[must_use]
        #[derive(Debug)]
        pub struct $type<T>(pub T);

        impl<T> ArgumentMatcher for $type<T>
        where
            T: $trait + Any + Debug + Send + Sync,
        {
            fn is_satisfied_by(&self, argument: Option<&dyn Argument>) -> bool {
                argument
                    .and_then(|argument| argument.downcast_ref::<T>())
                    .is_some_and(|value| value.$method(&self.0))
            }

            fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
                write!(f, $fmt, self.0)
            }

            fn describe_non_match(&self) -> Option<&dyn DescribeNonMatch> {
                Some(self)
            }
        }

        impl<T> DescribeNonMatch for $type<T>
        where
            T: $trait + Any + Debug + Send + Sync,
        {
            fn describe_for(&self, argument: Option<&dyn Argument>) -> String {
                describe_mismatch(self, argument)
            }
        }
    };
}

impl_matcher!(Eq, PartialEq::eq, "Eq({:?})");
impl_matcher!(Ne, PartialEq::ne, "Ne({:?})");

impl_matcher!(Lt, PartialOrd::lt, "Lt({:?})");
impl_matcher!(Le, PartialOrd::le, "Le({:?})");
impl_matcher!(Gt, PartialOrd::gt, "Gt({:?})");
impl_matcher!(Ge, PartialOrd::ge, "Ge({:?})");
