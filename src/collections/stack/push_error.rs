use core::fmt;

use super::StackError;

#[cfg(test)]
mod tests;

/// Error returned by [`try_push`](super::BoundedStack::try_push) when the element was rejected.
///
/// Unlike [`StackError`], it hands the rejected element back to the caller.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PushError<T> {
  /// The stack is full. Contains the element that was attempted to be pushed.
  Full(T),
}

impl<T> PushError<T> {
  /// Extracts the rejected element.
  #[must_use]
  pub fn into_inner(self) -> T {
    match self {
      | PushError::Full(item) => item,
    }
  }

  /// Returns the payload-free error kind.
  #[must_use]
  pub const fn kind(&self) -> StackError {
    match self {
      | PushError::Full(_) => StackError::Full,
    }
  }
}

impl<T> From<PushError<T>> for StackError {
  fn from(err: PushError<T>) -> Self {
    err.kind()
  }
}

impl<T> fmt::Display for PushError<T> {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    fmt::Display::fmt(&self.kind(), f)
  }
}

impl<T: fmt::Debug> core::error::Error for PushError<T> {}
