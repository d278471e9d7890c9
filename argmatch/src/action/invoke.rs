use std::any::Any;
use std::sync::Arc;

use crate::types::Argument;

use super::ActionFn;

/// Create an action that downcasts the argument to `T` and passes it to `f`.
///
/// The closure is not called for absent arguments or arguments of another type.
pub fn invoke<T, F>(f: F) -> ActionFn
where
    T: Any,
    F: Fn(&T) + Send + Sync + 'static,
{
    Arc::new(move |argument: Option<&dyn Argument>| {
        if let Some(value) = argument.and_then(|argument| argument.downcast_ref::<T>()) {
            f(value);
        }
    })
}
