use std::any::Any;
use std::fmt::{Formatter, Result as FmtResult};

use crate::types::{is_compatible, ArgType, Argument};

use super::ArgumentMatcher;

/// Create an [`AnyArg`] matcher that accepts every argument, including absent
/// ones.
pub fn any() -> AnyArg {
    AnyArg(ArgType::object())
}

/// Create an [`AnyArg`] matcher that accepts every value of type `T`.
pub fn any_of<T: Any>() -> AnyArg {
    AnyArg(ArgType::of::<T>())
}

/// Create an [`AnyArg`] matcher that accepts every argument compatible with
/// the passed type.
pub fn any_of_type(ty: ArgType) -> AnyArg {
    AnyArg(ty)
}

/// Matcher that accepts any argument that is compatible with a certain type.
#[must_use]
#[derive(Debug, Clone, Copy)]
pub struct AnyArg(pub ArgType);

impl ArgumentMatcher for AnyArg {
    fn is_satisfied_by(&self, argument: Option<&dyn Argument>) -> bool {
        is_compatible(argument, &self.0)
    }

    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "any {}", self.0)
    }
}
