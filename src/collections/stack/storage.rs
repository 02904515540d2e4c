//! Storage layer abstractions for bounded stacks.

mod array_stack_storage;
mod stack_storage;
mod vec_stack_storage;

pub use array_stack_storage::ArrayStackStorage;
pub use stack_storage::StackStorage;
pub use vec_stack_storage::VecStackStorage;
