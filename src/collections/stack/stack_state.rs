#[cfg(test)]
mod tests;

/// Occupancy state of a bounded stack, derived from `len` and `capacity`.
///
/// `push` moves a stack towards [`StackState::Full`] and never leaves it; `pop` moves it towards
/// [`StackState::Empty`] and never leaves it. A zero-capacity stack always reports `Empty`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum StackState {
  /// No elements are stored.
  Empty,
  /// At least one element is stored and at least one slot is free.
  NonEmpty,
  /// Every slot is occupied.
  Full,
}

impl StackState {
  /// Classifies a stack holding `len` elements out of `capacity`.
  #[must_use]
  pub const fn of(len: usize, capacity: usize) -> Self {
    if len == 0 {
      StackState::Empty
    } else if len >= capacity {
      StackState::Full
    } else {
      StackState::NonEmpty
    }
  }
}

impl From<&StackState> for &'static str {
  fn from(state: &StackState) -> Self {
    match state {
      | StackState::Empty => "empty",
      | StackState::NonEmpty => "non_empty",
      | StackState::Full => "full",
    }
  }
}
