//! Line-oriented command menu driving a [`LinkedQueue`](crate::deque::LinkedQueue).

mod command;
mod config;
mod error;
mod queue_menu;

pub use command::{Command, Operation};
pub use config::{Invocation, MenuConfig};
pub use error::MenuError;
pub use queue_menu::QueueMenu;
