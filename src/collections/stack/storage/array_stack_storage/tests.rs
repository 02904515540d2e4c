use alloc::string::String;

use super::ArrayStackStorage;
use crate::collections::stack::StackStorage;

#[test]
fn capacity_is_const_parameter() {
  let storage = ArrayStackStorage::<u8, 5>::new();
  assert_eq!(storage.capacity(), 5);
  assert_eq!(storage.slots().len(), 5);
}

#[test]
fn new_holds_no_elements_for_non_copy_types() {
  let storage = ArrayStackStorage::<String, 3>::default();
  assert!(storage.slots().iter().all(Option::is_none));
}

#[test]
fn const_construction() {
  const STORAGE: ArrayStackStorage<u8, 2> = ArrayStackStorage::new();
  assert_eq!(STORAGE.capacity(), 2);
}
