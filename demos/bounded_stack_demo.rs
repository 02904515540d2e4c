//! Walks a capacity-5 stack through fill, overflow, drain and underflow.
//!
//! Run with `RUST_LOG=debug` to also see the stack's own rejection events.

use std::error::Error;

use bounded_stack_rs::collections::stack::{ArrayBoundedStack, StackError};
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

fn main() -> Result<(), Box<dyn Error>> {
  let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
  let subscriber = FmtSubscriber::builder().with_env_filter(env_filter).with_target(false).finish();
  tracing::subscriber::set_global_default(subscriber)?;

  let mut stack = ArrayBoundedStack::<i32, 5>::new_inline();

  for value in [10, 20, 30, 40, 50] {
    push(&mut stack, value);
  }
  report_top(&stack);

  pop(&mut stack);
  report_top(&stack);

  push(&mut stack, 60);
  push(&mut stack, 70);

  while !stack.is_empty() {
    pop(&mut stack);
  }
  pop(&mut stack);

  Ok(())
}

fn push(stack: &mut ArrayBoundedStack<i32, 5>, value: i32) {
  match stack.push(value) {
    | Ok(()) => info!(value, len = stack.len(), "pushed"),
    | Err(StackError::Full) => warn!(value, capacity = stack.capacity(), "stack overflow, value discarded"),
    | Err(err) => warn!(value, %err, "push failed"),
  }
}

fn pop(stack: &mut ArrayBoundedStack<i32, 5>) {
  match stack.pop() {
    | Ok(value) => info!(value, len = stack.len(), "popped"),
    | Err(err) => warn!(%err, "stack underflow, nothing to pop"),
  }
}

fn report_top(stack: &ArrayBoundedStack<i32, 5>) {
  match stack.peek() {
    | Ok(top) => info!(top = *top, "top element"),
    | Err(err) => warn!(%err, "no top element"),
  }
}
