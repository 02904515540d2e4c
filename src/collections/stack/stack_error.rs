use core::fmt;


/// Errors that may arise while operating on a bounded stack.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StackError {
  /// The stack holds `capacity` elements and cannot accept another one.
  Full,
  /// The stack contains no elements.
  Empty,
}

impl fmt::Display for StackError {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      | StackError::Full => write!(f, "stack is full"),
      | StackError::Empty => write!(f, "stack is empty"),
    }
  }
}

impl core::error::Error for StackError {}
