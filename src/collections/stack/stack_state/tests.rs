use super::StackState;

#[test]
fn classifies_by_len_and_capacity() {
  assert_eq!(StackState::of(0, 5), StackState::Empty);
  assert_eq!(StackState::of(1, 5), StackState::NonEmpty);
  assert_eq!(StackState::of(4, 5), StackState::NonEmpty);
  assert_eq!(StackState::of(5, 5), StackState::Full);
}

#[test]
fn zero_capacity_is_empty() {
  assert_eq!(StackState::of(0, 0), StackState::Empty);
}

#[test]
fn converts_to_label() {
  let label: &str = (&StackState::NonEmpty).into();
  assert_eq!(label, "non_empty");
  let label: &str = (&StackState::Full).into();
  assert_eq!(label, "full");
}
