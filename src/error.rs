use thiserror::Error;

/// Returned by operations that need at least one element.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("no such element: queue is empty")]
pub struct EmptyContainerError;

pub type Result<T> = std::result::Result<T, EmptyContainerError>;
