//! Error kinds shared by the queue containers.
//!
//! Accessors fail with a [`QueueError`]. Mutators report a [`Status`] instead, which carries
//! the same kinds plus `Success` and maps onto the numeric codes `0 / -1 / -2`.

use std::fmt;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, QueueError>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
pub enum QueueError {
    #[error("queue is empty")]
    EmptyQueue,

    #[error("position {position} is out of bounds for queue of length {len}")]
    InvalidPosition { position: usize, len: usize },
}

/// Outcome of a mutating queue operation.
#[must_use]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Status {
    Success,
    EmptyQueue,
    InvalidPosition,
}

impl Status {
    pub fn is_success(self) -> bool {
        self == Status::Success
    }

    pub fn code(self) -> i32 {
        match self {
            Status::Success => 0,
            Status::EmptyQueue => -1,
            Status::InvalidPosition => -2,
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let msg = match self {
            Status::Success => "success",
            Status::EmptyQueue => "queue is empty",
            Status::InvalidPosition => "position is out of bounds",
        };
        f.write_str(msg)
    }
}

impl From<QueueError> for Status {
    fn from(err: QueueError) -> Self {
        match err {
            QueueError::EmptyQueue => Status::EmptyQueue,
            QueueError::InvalidPosition { .. } => Status::InvalidPosition,
        }
    }
}

impl From<Result<()>> for Status {
    fn from(res: Result<()>) -> Self {
        match res {
            Ok(()) => Status::Success,
            Err(err) => err.into(),
        }
    }
}
