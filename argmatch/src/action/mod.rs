//! The [`action`](self) module contains the callbacks that may be attached to
//! an [`ArgumentSpecification`](crate::ArgumentSpecification) and run when a
//! matching call is replayed.

mod capture;
mod invoke;

use std::sync::Arc;

use once_cell::sync::Lazy;
use tracing::trace;

use crate::types::{is_compatible, ArgType, Argument};

pub use capture::{capture, Captured};
pub use invoke::invoke;

/// Callback that is executed with the actual argument of a matched call.
pub type ActionFn = Arc<dyn Fn(Option<&dyn Argument>) + Send + Sync>;

/// Get the canonical action that does nothing.
///
/// A specification created without an explicit action stores exactly this
/// instance, which is what [`is_no_op`] checks for.
#[must_use]
pub fn no_op() -> ActionFn {
    NO_OP.clone()
}

/// Returns `true` if `action` is the instance returned by [`no_op`].
///
/// This is an identity check. An explicitly passed action that does nothing
/// is not the no-op action.
#[must_use]
pub fn is_no_op(action: &ActionFn) -> bool {
    Arc::ptr_eq(action, &*NO_OP)
}

/// Wrap `action` so it only runs for arguments compatible with `required`.
///
/// The returned action only keeps `required` and `action` alive.
#[must_use]
pub fn guarded(required: ArgType, action: ActionFn) -> ActionFn {
    Arc::new(move |argument: Option<&dyn Argument>| {
        if is_compatible(argument, &required) {
            action(argument);
        } else {
            trace!(%required, "Skip action for incompatible argument");
        }
    })
}

fn do_nothing(_argument: Option<&dyn Argument>) {}

fn new_no_op() -> ActionFn {
    Arc::new(do_nothing)
}

static NO_OP: Lazy<ActionFn> = Lazy::new(new_no_op);
