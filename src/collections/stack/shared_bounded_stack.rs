use alloc::sync::Arc;
use core::marker::PhantomData;

use spin::Mutex;

use super::{PushError, StackBackend, StackError, VecBoundedStack};

#[cfg(test)]
mod tests;

/// Cloneable handle sharing one bounded stack behind a spin lock.
///
/// Every method locks for the duration of a single O(1) stack operation. Use
/// [`with_mut`](Self::with_mut) to run several operations under one lock.
pub struct SharedBoundedStack<T, B = VecBoundedStack<T>>
where
  B: StackBackend<T>, {
  inner: Arc<Mutex<B>>,
  _pd:   PhantomData<fn(T) -> T>,
}

impl<T, B> SharedBoundedStack<T, B>
where
  B: StackBackend<T>,
{
  /// Wraps `backend` so it can be shared.
  #[must_use]
  pub fn new(backend: B) -> Self {
    Self { inner: Arc::new(Mutex::new(backend)), _pd: PhantomData }
  }

  /// Pushes an item onto the stack.
  ///
  /// # Errors
  ///
  /// Returns [`StackError::Full`] when the stack is full; the item is dropped.
  pub fn push(&self, item: T) -> Result<(), StackError> {
    self.inner.lock().push(item)
  }

  /// Pushes an item onto the stack, handing it back when the stack is full.
  ///
  /// # Errors
  ///
  /// Returns [`PushError::Full`] carrying the item when the stack is full.
  pub fn try_push(&self, item: T) -> Result<(), PushError<T>> {
    self.inner.lock().try_push(item)
  }

  /// Pops the top item from the stack.
  ///
  /// # Errors
  ///
  /// Returns [`StackError::Empty`] when the stack holds no elements.
  pub fn pop(&self) -> Result<T, StackError> {
    self.inner.lock().pop()
  }

  /// Returns a clone of the top item without removing it.
  ///
  /// # Errors
  ///
  /// Returns [`StackError::Empty`] when the stack holds no elements.
  pub fn peek(&self) -> Result<T, StackError>
  where
    T: Clone, {
    self.inner.lock().peek().cloned()
  }

  /// Drops every stored element.
  pub fn clear(&self) {
    self.inner.lock().clear();
  }

  /// Returns the number of stored elements.
  #[must_use]
  pub fn len(&self) -> usize {
    self.inner.lock().len()
  }

  /// Returns the storage capacity.
  #[must_use]
  pub fn capacity(&self) -> usize {
    self.inner.lock().capacity()
  }

  /// Indicates whether the stack is empty.
  #[must_use]
  pub fn is_empty(&self) -> bool {
    self.inner.lock().is_empty()
  }

  /// Indicates whether the stack is full.
  #[must_use]
  pub fn is_full(&self) -> bool {
    self.inner.lock().is_full()
  }

  /// Runs `f` with exclusive access to the backend.
  pub fn with_mut<R>(&self, f: impl FnOnce(&mut B) -> R) -> R {
    f(&mut self.inner.lock())
  }

  /// Returns the backend if this is the last handle, or the handle itself otherwise.
  ///
  /// # Errors
  ///
  /// Returns `Err(self)` while other clones of the handle are alive.
  pub fn into_inner(self) -> Result<B, Self> {
    Arc::try_unwrap(self.inner).map(Mutex::into_inner).map_err(|inner| Self { inner, _pd: PhantomData })
  }
}

impl<T, B> Clone for SharedBoundedStack<T, B>
where
  B: StackBackend<T>,
{
  fn clone(&self) -> Self {
    Self { inner: Arc::clone(&self.inner), _pd: PhantomData }
  }
}
