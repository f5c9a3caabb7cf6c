//! In-memory todo store with page-number pagination.
//!
//! # Overview
//! `TodoStore` owns an ordered collection of `Todo` records and the id
//! generator behind a single reader/writer lock. It knows nothing about HTTP;
//! the server crate maps its results onto status codes and JSON envelopes.
//!
//! # Design
//! - Ids start at 1, increase by one per insert and are never reused.
//! - Insertion order is preserved; deletes close the gap without reordering.
//! - Listing goes through `PageRequest`, which normalizes page and limit so a
//!   listing can never fail.

pub mod error;
pub mod pagination;
pub mod store;
pub mod types;

pub use error::StoreError;
pub use pagination::{Page, PageRequest, DEFAULT_LIMIT, DEFAULT_PAGE, MAX_LIMIT};
pub use store::TodoStore;
pub use types::{Todo, TodoDraft, TodoId};
