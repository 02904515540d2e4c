//! Bounded LIFO stack and its storage, error, and sharing types.

mod bounded_stack;
mod push_error;
mod shared_bounded_stack;
mod stack_backend;
mod stack_error;
mod stack_state;
mod storage;

pub use bounded_stack::{ArrayBoundedStack, BoundedStack, VecBoundedStack};
pub use push_error::PushError;
pub use shared_bounded_stack::SharedBoundedStack;
pub use stack_backend::StackBackend;
pub use stack_error::StackError;
pub use stack_state::StackState;
pub use storage::{ArrayStackStorage, StackStorage, VecStackStorage};
