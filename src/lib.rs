pub mod deque;
pub mod error;
pub mod linear_list;

pub use crate::deque::LinkedQueue;
pub use crate::error::{EmptyContainerError, Result};
pub use crate::linear_list::ForwardList;
