//! Error type for store operations.
//!
//! A missing id is the only way a store operation can fail; inserts and
//! listings always succeed.

use thiserror::Error;

use crate::types::TodoId;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    /// No todo with this id is currently stored.
    #[error("todo {0} not found")]
    NotFound(TodoId),
}
