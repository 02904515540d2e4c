use alloc::{boxed::Box, vec::Vec};

use super::StackStorage;


/// Heap storage sized once at construction.
///
/// The slots live in a boxed slice, so the buffer cannot grow after
/// [`with_capacity`](Self::with_capacity) returns.
pub struct VecStackStorage<T> {
  slots: Box<[Option<T>]>,
}

impl<T> VecStackStorage<T> {
  /// Creates a storage buffer with exactly `capacity` empty slots.
  #[must_use]
  pub fn with_capacity(capacity: usize) -> Self {
    let mut slots = Vec::with_capacity(capacity);
    slots.resize_with(capacity, || None);
    Self { slots: slots.into_boxed_slice() }
  }
}

impl<T> StackStorage<T> for VecStackStorage<T> {
  fn slots(&self) -> &[Option<T>] {
    &self.slots
  }

  fn slots_mut(&mut self) -> &mut [Option<T>] {
    &mut self.slots
  }
}
