//! Function values passed down as props.

use core::fmt;
use std::sync::Arc;

/// A shared, cloneable handler taking one argument.
///
/// Owners build a `Callback` once and hand clones to each consumer. Clones
/// point at the same closure, which [`ptr_eq`](Self::ptr_eq) can confirm.
/// The consumer knows nothing about what the handler does; it only calls
/// [`emit`](Self::emit) with its data.
///
/// # Example
///
/// ```rust
/// use std::sync::atomic::{AtomicUsize, Ordering};
/// use std::sync::Arc;
/// use color_lift::Callback;
///
/// let total = Arc::new(AtomicUsize::new(0));
/// let sink = total.clone();
/// let on_add = Callback::new(move |n: usize| {
///     sink.fetch_add(n, Ordering::SeqCst);
/// });
///
/// let handed_down = on_add.clone();
/// handed_down.emit(3);
/// on_add.emit(4);
///
/// assert_eq!(total.load(Ordering::SeqCst), 7);
/// assert!(on_add.ptr_eq(&handed_down));
/// ```
pub struct Callback<T>(Arc<dyn Fn(T) + Send + Sync>);

impl<T> Callback<T> {
    pub fn new<F>(handler: F) -> Self
    where
        F: Fn(T) + Send + Sync + 'static,
    {
        Self(Arc::new(handler))
    }

    /// Invoke the handler with `value`.
    pub fn emit(&self, value: T) {
        (self.0)(value);
    }

    /// Whether both handles refer to the same handler.
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

impl<T> Clone for Callback<T> {
    fn clone(&self) -> Self {
        Self(self.0.clone())
    }
}

impl<T> fmt::Debug for Callback<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Callback({:p})", Arc::as_ptr(&self.0))
    }
}
