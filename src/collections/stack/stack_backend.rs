use super::{PushError, StackError};

/// Operations shared by bounded stack implementations.
pub trait StackBackend<T> {
  /// Pushes an element, handing it back if the stack is full.
  ///
  /// # Errors
  ///
  /// Returns [`PushError::Full`] carrying `item` when no slot is free. The stack is unchanged.
  fn try_push(&mut self, item: T) -> Result<(), PushError<T>>;

  /// Pops the most recently pushed element from the stack.
  ///
  /// # Errors
  ///
  /// Returns [`StackError::Empty`] when the stack holds no elements.
  fn pop(&mut self) -> Result<T, StackError>;

  /// Returns a reference to the element at the top of the stack without removing it.
  ///
  /// # Errors
  ///
  /// Returns [`StackError::Empty`] when the stack holds no elements.
  fn peek(&self) -> Result<&T, StackError>;

  /// Drops every stored element.
  fn clear(&mut self);

  /// Returns the number of elements currently stored.
  fn len(&self) -> usize;

  /// Returns the maximum number of elements the stack can hold.
  fn capacity(&self) -> usize;

  /// Pushes an element, discarding it if the stack is full.
  ///
  /// # Errors
  ///
  /// Returns [`StackError::Full`] when no slot is free. The stack is unchanged.
  fn push(&mut self, item: T) -> Result<(), StackError> {
    self.try_push(item).map_err(StackError::from)
  }

  /// Indicates whether the stack is empty.
  fn is_empty(&self) -> bool {
    self.len() == 0
  }

  /// Indicates whether the stack is full.
  fn is_full(&self) -> bool {
    self.len() == self.capacity()
  }
}
