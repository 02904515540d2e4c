#![cfg_attr(test, allow(clippy::unwrap_used, clippy::expect_used, clippy::redundant_clone))]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(clippy::missing_errors_doc)]
#![deny(clippy::missing_panics_doc)]
#![deny(clippy::redundant_field_names)]
#![deny(clippy::needless_pass_by_value)]
#![deny(clippy::manual_let_else)]
#![deny(clippy::unreachable)]
#![deny(clippy::trivially_copy_pass_by_ref)]
#![deny(clippy::clone_on_copy)]
#![deny(clippy::wrong_self_convention)]
#![cfg_attr(not(feature = "std"), no_std)]

//! Fixed-capacity LIFO stack.
//!
//! [`BoundedStack`](collections::stack::BoundedStack) stores at most `capacity` elements in a
//! buffer that is allocated once and never resized. Overflow and underflow are reported through
//! [`StackError`](collections::stack::StackError) instead of sentinel values, so a stored
//! `T::default()` can never be confused with an empty stack.
//!
//! The capacity is either chosen at runtime ([`VecBoundedStack`](collections::stack::VecBoundedStack))
//! or fixed at compile time ([`ArrayBoundedStack`](collections::stack::ArrayBoundedStack)). The
//! stack itself is not synchronized; [`SharedBoundedStack`](collections::stack::SharedBoundedStack)
//! wraps one behind a spin lock for callers that need to share it.
//!
//! ```
//! use bounded_stack_rs::collections::stack::{ArrayBoundedStack, StackError};
//!
//! let mut stack = ArrayBoundedStack::<i32, 2>::new_inline();
//! stack.push(0).unwrap();
//! stack.push(1).unwrap();
//! assert_eq!(stack.push(2), Err(StackError::Full));
//! assert_eq!(stack.pop(), Ok(1));
//! assert_eq!(stack.peek(), Ok(&0));
//! ```

extern crate alloc;

pub mod collections;
