//! In-memory todo store.
//!
//! # Design
//! - One `tokio::sync::RwLock` guards both the ordered collection and the id
//!   counter, so id assignment and the append happen atomically.
//! - Writers (`insert`, `replace_by_id`, `delete_by_id`) take the write lock;
//!   readers take the read lock. Every lock is held for the whole operation,
//!   scans included.
//! - The collection is a `Vec` in insertion order. Lookups are linear scans.
//! - `TodoStore` is a handle: clones share the same data, separate
//!   `TodoStore::new()` calls do not.

use std::sync::Arc;

use chrono::Utc;
use tokio::sync::RwLock;
use tracing::debug;

use crate::error::StoreError;
use crate::pagination::{Page, PageRequest};
use crate::types::{Todo, TodoDraft, TodoId};

#[derive(Debug, Clone, Default)]
pub struct TodoStore {
    inner: Arc<RwLock<Inner>>,
}

#[derive(Debug)]
struct Inner {
    todos: Vec<Todo>,
    next_id: TodoId,
}

impl Default for Inner {
    fn default() -> Self {
        Self {
            todos: Vec::new(),
            next_id: 1,
        }
    }
}

impl Inner {
    fn position(&self, id: TodoId) -> Result<usize, StoreError> {
        self.todos
            .iter()
            .position(|todo| todo.id == id)
            .ok_or(StoreError::NotFound(id))
    }
}

impl TodoStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores `draft` under the next id and returns the stored record.
    pub async fn insert(&self, draft: TodoDraft) -> Todo {
        let mut inner = self.inner.write().await;
        let id = inner.next_id;
        inner.next_id += 1;

        let now = Utc::now();
        let todo = Todo::from_draft(id, draft, now, now);
        inner.todos.push(todo.clone());

        debug!(id, total = inner.todos.len(), "inserted todo");
        todo
    }

    /// Snapshot of every stored todo in insertion order.
    pub async fn list_all(&self) -> Vec<Todo> {
        self.inner.read().await.todos.clone()
    }

    pub async fn list_page(&self, request: PageRequest) -> Page<Todo> {
        let inner = self.inner.read().await;
        request.apply(&inner.todos)
    }

    pub async fn find_by_id(&self, id: TodoId) -> Result<Todo, StoreError> {
        let inner = self.inner.read().await;
        let index = inner.position(id)?;
        Ok(inner.todos[index].clone())
    }

    /// Replaces every caller-owned field of the todo with `id`, keeping its
    /// id and `created_at`, and refreshes `updated_at`.
    pub async fn replace_by_id(&self, id: TodoId, draft: TodoDraft) -> Result<Todo, StoreError> {
        let mut inner = self.inner.write().await;
        let index = inner.position(id)?;

        let created_at = inner.todos[index].created_at;
        let todo = Todo::from_draft(id, draft, created_at, Utc::now());
        inner.todos[index] = todo.clone();

        debug!(id, "replaced todo");
        Ok(todo)
    }

    /// Removes the todo with `id`, keeping the order of the remaining ones.
    pub async fn delete_by_id(&self, id: TodoId) -> Result<(), StoreError> {
        let mut inner = self.inner.write().await;
        let index = inner.position(id)?;
        inner.todos.remove(index);

        debug!(id, total = inner.todos.len(), "deleted todo");
        Ok(())
    }

    pub async fn len(&self) -> usize {
        self.inner.read().await.todos.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }
}
