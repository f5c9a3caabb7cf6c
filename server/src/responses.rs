//! JSON envelopes returned by the HTTP handlers.

use serde::{Deserialize, Serialize};
use todo_core::{Page, Todo};

/// Body of `GET /api/v1/todos`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TodoListResponse {
    pub todos: Vec<Todo>,
    pub total_count: u64,
    pub current_page: u64,
    pub total_pages: u64,
    pub per_page: u64,
    pub has_next: bool,
    pub has_prev: bool,
}

impl From<Page<Todo>> for TodoListResponse {
    fn from(page: Page<Todo>) -> Self {
        Self {
            todos: page.items,
            total_count: page.total_count,
            current_page: page.current_page,
            total_pages: page.total_pages,
            per_page: page.per_page,
            has_next: page.has_next,
            has_prev: page.has_prev,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub service: String,
    pub version: String,
}
