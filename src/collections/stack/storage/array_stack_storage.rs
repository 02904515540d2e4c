use super::StackStorage;

#[cfg(test)]
mod tests;

/// Inline storage whose capacity `N` is fixed at compile time.
pub struct ArrayStackStorage<T, const N: usize> {
  slots: [Option<T>; N],
}

impl<T, const N: usize> ArrayStackStorage<T, N> {
  /// Creates a storage buffer with `N` empty slots.
  #[must_use]
  pub const fn new() -> Self {
    Self { slots: [const { None }; N] }
  }
}

impl<T, const N: usize> Default for ArrayStackStorage<T, N> {
  fn default() -> Self {
    Self::new()
  }
}

impl<T, const N: usize> StackStorage<T> for ArrayStackStorage<T, N> {
  fn slots(&self) -> &[Option<T>] {
    &self.slots
  }

  fn slots_mut(&mut self) -> &mut [Option<T>] {
    &mut self.slots
  }

  fn capacity(&self) -> usize {
    N
  }
}
