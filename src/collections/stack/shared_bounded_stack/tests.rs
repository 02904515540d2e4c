use alloc::string::String;

use super::SharedBoundedStack;
use crate::collections::stack::{ArrayBoundedStack, PushError, StackError, VecBoundedStack};

#[test]
fn clones_share_the_same_stack() {
  let stack = SharedBoundedStack::new(VecBoundedStack::with_capacity(2));
  let other = stack.clone();

  stack.push(1).unwrap();
  other.push(2).unwrap();

  assert!(stack.is_full());
  assert_eq!(other.len(), 2);
  assert_eq!(stack.push(3), Err(StackError::Full));
  assert_eq!(other.pop(), Ok(2));
  assert_eq!(stack.pop(), Ok(1));
  assert!(other.is_empty());
  assert_eq!(stack.pop(), Err(StackError::Empty));
}

#[test]
fn peek_returns_clone_and_keeps_top() {
  let stack = SharedBoundedStack::new(ArrayBoundedStack::<String, 2>::new_inline());
  assert_eq!(stack.peek(), Err(StackError::Empty));
  stack.push(String::from("top")).unwrap();
  assert_eq!(stack.peek(), Ok(String::from("top")));
  assert_eq!(stack.len(), 1);
}

#[test]
fn try_push_hands_back_rejected_item() {
  let stack = SharedBoundedStack::new(VecBoundedStack::with_capacity(1));
  stack.try_push('a').unwrap();
  assert_eq!(stack.try_push('b'), Err(PushError::Full('b')));
  assert_eq!(stack.capacity(), 1);
}

#[test]
fn with_mut_runs_compound_operation_under_one_lock() {
  let stack = SharedBoundedStack::new(VecBoundedStack::with_capacity(4));
  stack.push(2).unwrap();
  stack.push(3).unwrap();

  let product = stack.with_mut(|backend| {
    let lhs = backend.pop()?;
    let rhs = backend.pop()?;
    backend.push(lhs * rhs)?;
    Ok::<_, StackError>(lhs * rhs)
  });

  assert_eq!(product, Ok(6));
  assert_eq!(stack.pop(), Ok(6));
}

#[test]
fn clear_empties_every_handle() {
  let stack = SharedBoundedStack::new(VecBoundedStack::with_capacity(3));
  let other = stack.clone();
  stack.push(1).unwrap();
  stack.push(2).unwrap();
  other.clear();
  assert!(stack.is_empty());
  assert!(!stack.is_full());
}

#[test]
fn into_inner_requires_last_handle() {
  let stack = SharedBoundedStack::new(VecBoundedStack::with_capacity(2));
  stack.push(7).unwrap();
  let other = stack.clone();

  let Err(stack) = stack.into_inner() else {
    panic!("expected another live handle");
  };
  drop(other);

  let mut backend = stack.into_inner().ok().unwrap();
  assert_eq!(backend.pop(), Ok(7));
}
