//! Domain types for the todo store.
//!
//! # Design
//! `Todo` is the stored record; every field except the caller-supplied ones
//! is owned by the store. `TodoDraft` is the input shape for both create and
//! update: all fields default, and an explicit `null` is treated the same as
//! an absent field.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};

/// Store-assigned identifier. Signed so that a well-formed negative id in a
/// request path is a lookup miss rather than a parse failure.
pub type TodoId = i64;

/// A single todo item as held by the store.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Todo {
    pub id: TodoId,
    pub title: String,
    pub description: String,
    pub completed: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Caller-supplied fields for creating or fully replacing a todo.
///
/// Fields that are not sent collapse to their type defaults. `id` and the
/// timestamps are accepted only if they have the right type, then dropped:
/// the store always assigns them. Other unknown fields are ignored.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct TodoDraft {
    #[serde(deserialize_with = "null_as_default")]
    pub title: String,
    #[serde(deserialize_with = "null_as_default")]
    pub description: String,
    #[serde(deserialize_with = "null_as_default")]
    pub completed: bool,
    #[serde(rename = "id", skip_serializing, deserialize_with = "discard_id")]
    _id: (),
    #[serde(rename = "created_at", skip_serializing, deserialize_with = "discard_timestamp")]
    _created_at: (),
    #[serde(rename = "updated_at", skip_serializing, deserialize_with = "discard_timestamp")]
    _updated_at: (),
}

impl TodoDraft {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..Self::default()
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_completed(mut self, completed: bool) -> Self {
        self.completed = completed;
        self
    }
}

impl Todo {
    /// Builds the stored form of `draft` with the given identity and timestamps.
    pub(crate) fn from_draft(
        id: TodoId,
        draft: TodoDraft,
        created_at: DateTime<Utc>,
        updated_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            title: draft.title,
            description: draft.description,
            completed: draft.completed,
            created_at,
            updated_at,
        }
    }
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Option::unwrap_or_default)
}

fn discard_id<'de, D: Deserializer<'de>>(deserializer: D) -> Result<(), D::Error> {
    Option::<TodoId>::deserialize(deserializer).map(drop)
}

fn discard_timestamp<'de, D: Deserializer<'de>>(deserializer: D) -> Result<(), D::Error> {
    Option::<DateTime<Utc>>::deserialize(deserializer).map(drop)
}
