use alloc::{format, string::String};

use super::PushError;
use crate::collections::stack::StackError;

#[test]
fn into_inner_returns_rejected_item() {
  let err = PushError::Full(String::from("payload"));
  assert_eq!(err.into_inner(), "payload");
}

#[test]
fn converts_into_stack_error() {
  let err: StackError = PushError::Full(7_u8).into();
  assert_eq!(err, StackError::Full);
}

#[test]
fn display_matches_stack_error() {
  assert_eq!(format!("{}", PushError::Full(1)), "stack is full");
}

#[test]
fn kind_does_not_consume() {
  let err = PushError::Full(3);
  assert_eq!(err.kind(), StackError::Full);
  assert_eq!(err.into_inner(), 3);
}
