/// Fixed-length slot buffer backing a bounded stack.
///
/// Implementations must return slices of the same length for their whole lifetime. The stack
/// keeps occupied slots as a contiguous prefix, bottom first.
pub trait StackStorage<T> {
  /// Returns the backing slots.
  fn slots(&self) -> &[Option<T>];

  /// Returns the backing slots mutably.
  fn slots_mut(&mut self) -> &mut [Option<T>];

  /// Returns the maximum number of elements the stack may store, which never changes.
  ///
  /// Defaults to the slot count. Overrides must not exceed `slots().len()`.
  fn capacity(&self) -> usize {
    self.slots().len()
  }
}
