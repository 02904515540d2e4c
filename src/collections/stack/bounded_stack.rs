use core::{fmt, marker::PhantomData};

use tracing::debug;

use super::{
  ArrayStackStorage, PushError, StackBackend, StackError, StackState, StackStorage, VecStackStorage,
};


const LOG_TARGET: &str = "bounded_stack::stack";

/// Bounded stack with heap storage sized at construction.
pub type VecBoundedStack<T> = BoundedStack<T, VecStackStorage<T>>;

/// Bounded stack with inline storage whose capacity `N` is a compile-time constant.
pub type ArrayBoundedStack<T, const N: usize> = BoundedStack<T, ArrayStackStorage<T, N>>;

/// Fixed-capacity LIFO stack.
///
/// Variables:
///   slots : [Option<T>; capacity]  `slots[..len]` are `Some`, bottom first, the rest `None`
///   len   : usize                  `0 <= len <= capacity`
///
/// Equations:
///   push(x): slots[len] = x, len' = len + 1       O(1), rejected when len == capacity
///   pop():   len' = len - 1, takes slots[len - 1]  O(1), rejected when len == 0
///   peek():  returns &slots[len - 1]             O(1), rejected when len == 0
///
/// Rejected operations leave the stack untouched and return a [`StackError`].
///
/// The stack is not synchronized. Mutation goes through `&mut self`; use
/// [`SharedBoundedStack`](super::SharedBoundedStack) to share one between threads.
pub struct BoundedStack<T, S = VecStackStorage<T>>
where
  S: StackStorage<T>, {
  storage: S,
  len:     usize,
  _pd:     PhantomData<T>,
}

impl<T> BoundedStack<T, VecStackStorage<T>> {
  /// Creates an empty stack holding at most `capacity` elements.
  #[must_use]
  pub fn with_capacity(capacity: usize) -> Self {
    Self { storage: VecStackStorage::with_capacity(capacity), len: 0, _pd: PhantomData }
  }
}

impl<T, const N: usize> BoundedStack<T, ArrayStackStorage<T, N>> {
  /// Creates an empty stack holding at most `N` elements without allocating.
  #[must_use]
  pub const fn new_inline() -> Self {
    Self { storage: ArrayStackStorage::new(), len: 0, _pd: PhantomData }
  }
}

impl<T, const N: usize> Default for BoundedStack<T, ArrayStackStorage<T, N>> {
  fn default() -> Self {
    Self::new_inline()
  }
}

impl<T, S> BoundedStack<T, S>
where
  S: StackStorage<T>,
{
  /// Creates an empty stack on top of `storage`.
  ///
  /// Elements already present in `storage` are dropped.
  #[must_use]
  pub fn new(mut storage: S) -> Self {
    storage.slots_mut().iter_mut().for_each(|slot| *slot = None);
    Self { storage, len: 0, _pd: PhantomData }
  }

  /// Returns the number of stored elements.
  #[must_use]
  pub const fn len(&self) -> usize {
    self.len
  }

  /// Returns the maximum number of elements the stack can hold.
  #[must_use]
  pub fn capacity(&self) -> usize {
    self.storage.capacity()
  }

  /// Returns the number of free slots.
  #[must_use]
  pub fn remaining(&self) -> usize {
    self.capacity().saturating_sub(self.len)
  }

  /// Indicates whether the stack is empty.
  #[must_use]
  pub const fn is_empty(&self) -> bool {
    self.len == 0
  }

  /// Indicates whether the stack is full.
  #[must_use]
  pub fn is_full(&self) -> bool {
    self.len == self.capacity()
  }

  /// Returns the current occupancy state.
  #[must_use]
  pub fn state(&self) -> StackState {
    StackState::of(self.len, self.capacity())
  }

  /// Pushes an element onto the stack, dropping it if the stack is full.
  ///
  /// # Errors
  ///
  /// Returns [`StackError::Full`] when no slot is free. The stack is unchanged.
  pub fn push(&mut self, item: T) -> Result<(), StackError> {
    self.try_push(item).map_err(StackError::from)
  }

  /// Pushes an element onto the stack, handing it back if the stack is full.
  ///
  /// # Errors
  ///
  /// Returns [`PushError::Full`] carrying `item` when no slot is free. The stack is unchanged.
  pub fn try_push(&mut self, item: T) -> Result<(), PushError<T>> {
    let len = self.len;
    let capacity = self.capacity();
    match self.storage.slots_mut().get_mut(len).filter(|_| len < capacity) {
      | Some(slot) => {
        *slot = Some(item);
        self.len = len + 1;
        Ok(())
      },
      | None => {
        debug!(target: LOG_TARGET, len, capacity, "push rejected: stack overflow");
        Err(PushError::Full(item))
      },
    }
  }

  /// Removes and returns the top element.
  ///
  /// # Errors
  ///
  /// Returns [`StackError::Empty`] when the stack holds no elements.
  pub fn pop(&mut self) -> Result<T, StackError> {
    let Some(top) = self.top_index() else {
      debug!(target: LOG_TARGET, capacity = self.capacity(), "pop rejected: stack underflow");
      return Err(StackError::Empty);
    };
    let item = self.storage.slots_mut().get_mut(top).and_then(Option::take).ok_or(StackError::Empty)?;
    self.len = top;
    Ok(item)
  }

  /// Returns the top element without removing it.
  ///
  /// # Errors
  ///
  /// Returns [`StackError::Empty`] when the stack holds no elements.
  pub fn peek(&self) -> Result<&T, StackError> {
    match self.top_index().and_then(|top| self.storage.slots().get(top)) {
      | Some(Some(item)) => Ok(item),
      | _ => {
        debug!(target: LOG_TARGET, capacity = self.capacity(), "peek rejected: stack is empty");
        Err(StackError::Empty)
      },
    }
  }

  /// Returns the top element mutably without removing it.
  ///
  /// # Errors
  ///
  /// Returns [`StackError::Empty`] when the stack holds no elements.
  pub fn peek_mut(&mut self) -> Result<&mut T, StackError> {
    let top = self.top_index().ok_or(StackError::Empty)?;
    self.storage.slots_mut().get_mut(top).and_then(Option::as_mut).ok_or(StackError::Empty)
  }

  /// Drops every stored element and resets the stack to empty.
  pub fn clear(&mut self) {
    let len = self.len;
    self.storage.slots_mut().iter_mut().take(len).for_each(|slot| *slot = None);
    self.len = 0;
  }

  /// Iterates over the stored elements from top to bottom.
  pub fn iter(&self) -> impl DoubleEndedIterator<Item = &T> + '_ {
    self.occupied().iter().rev().filter_map(Option::as_ref)
  }

  /// Consumes the stack and returns its storage, emptied of elements.
  #[must_use]
  pub fn into_storage(mut self) -> S {
    self.clear();
    self.storage
  }

  const fn top_index(&self) -> Option<usize> {
    self.len.checked_sub(1)
  }

  fn occupied(&self) -> &[Option<T>] {
    let slots = self.storage.slots();
    &slots[..self.len.min(slots.len())]
  }
}

impl<T, S> StackBackend<T> for BoundedStack<T, S>
where
  S: StackStorage<T>,
{
  fn try_push(&mut self, item: T) -> Result<(), PushError<T>> {
    Self::try_push(self, item)
  }

  fn pop(&mut self) -> Result<T, StackError> {
    Self::pop(self)
  }

  fn peek(&self) -> Result<&T, StackError> {
    Self::peek(self)
  }

  fn clear(&mut self) {
    Self::clear(self);
  }

  fn len(&self) -> usize {
    self.len
  }

  fn capacity(&self) -> usize {
    Self::capacity(self)
  }
}

impl<T, S> fmt::Debug for BoundedStack<T, S>
where
  T: fmt::Debug,
  S: StackStorage<T>,
{
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_struct("BoundedStack")
      .field("capacity", &self.capacity())
      .field("elements", &Elements(self.occupied()))
      .finish()
  }
}

/// Formats occupied slots bottom to top.
struct Elements<'a, T>(&'a [Option<T>]);

impl<T: fmt::Debug> fmt::Debug for Elements<'_, T> {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_list().entries(self.0.iter().flatten()).finish()
  }
}
