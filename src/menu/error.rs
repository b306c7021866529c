use crate::error::{QueueError, Status};

use std::io;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum MenuError {
    #[error("missing argument <{name}> for '{operation}'")]
    MissingArgument {
        operation: &'static str,
        name: &'static str,
    },

    #[error("invalid argument '{token}' for <{name}>: {reason}")]
    InvalidArgument {
        name: &'static str,
        token: String,
        reason: String,
    },

    #[error("<{name}> must not be negative, got {value}")]
    Negative { name: &'static str, value: i64 },

    #[error("{0}")]
    Failed(Status),

    #[error(transparent)]
    Queue(#[from] QueueError),

    #[error("{0}")]
    Usage(String),

    #[error("io error: {0}")]
    Io(#[from] io::Error),
}
