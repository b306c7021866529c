pub mod deque;
pub mod error;
pub mod linear_list;
pub mod menu;
pub mod stack;

#[cfg(test)]
mod test_utils;

pub use deque::LinkedQueue;
pub use error::{QueueError, Result, Status};
