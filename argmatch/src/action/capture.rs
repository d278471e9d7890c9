use std::any::Any;
use std::sync::Arc;

use parking_lot::Mutex;

use super::{invoke, ActionFn};

/// Create an action that records a clone of every argument of type `T` it is
/// executed with, and the [`Captured`] handle to read them back.
pub fn capture<T>() -> (Captured<T>, ActionFn)
where
    T: Any + Clone + Send,
{
    let captured = Captured::default();
    let values = captured.values.clone();
    let action = invoke(move |value: &T| values.lock().push(value.clone()));

    (captured, action)
}

/// Values recorded by a [`capture`] action.
#[derive(Debug)]
pub struct Captured<T> {
    values: Arc<Mutex<Vec<T>>>,
}

impl<T> Captured<T>
where
    T: Clone,
{
    /// Get all values recorded so far.
    #[must_use]
    pub fn values(&self) -> Vec<T> {
        self.values.lock().clone()
    }

    /// Get the most recently recorded value.
    #[must_use]
    pub fn last(&self) -> Option<T> {
        self.values.lock().last().cloned()
    }
}

impl<T> Captured<T> {
    /// Number of recorded values.
    #[must_use]
    pub fn len(&self) -> usize {
        self.values.lock().len()
    }

    /// Returns `true` if no value was recorded yet.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.lock().is_empty()
    }
}

impl<T> Default for Captured<T> {
    fn default() -> Self {
        Self {
            values: Arc::new(Mutex::new(Vec::new())),
        }
    }
}

impl<T> Clone for Captured<T> {
    fn clone(&self) -> Self {
        Self {
            values: self.values.clone(),
        }
    }
}
