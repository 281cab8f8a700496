use std::sync::Mutex;

use async_trait::async_trait;
use bson::oid::ObjectId;
use chrono::Utc;

use thoughts_types::Thought;

use crate::{StoreError, ThoughtStore};

/// In-memory store with the same observable behavior as [`crate::MongoStore`],
/// including ObjectId-shaped ids. Used by handler tests and for running the
/// server without a database.
#[derive(Default)]
pub struct MemoryStore {
    // Held only for the duration of each operation, so increments are atomic
    // with respect to each other, like $inc on the server.
    thoughts: Mutex<Vec<Thought>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

fn check_id(id: &str) -> Result<(), StoreError> {
    ObjectId::parse_str(id)
        .map(|_| ())
        .map_err(|_| StoreError::MalformedId(id.to_owned()))
}

#[async_trait]
impl ThoughtStore for MemoryStore {
    async fn recent(&self, limit: i64) -> Result<Vec<Thought>, StoreError> {
        let thoughts = self.thoughts.lock().unwrap_or_else(|e| e.into_inner());
        // Reverse insertion order first so equal timestamps still come back
        // newest-inserted first under the stable sort.
        let mut out: Vec<Thought> = thoughts.iter().rev().cloned().collect();
        out.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        out.truncate(limit.max(0) as usize);
        Ok(out)
    }

    async fn insert(&self, message: String) -> Result<Thought, StoreError> {
        let thought = Thought {
            id: ObjectId::new().to_hex(),
            message,
            hearts: 0,
            created_at: Utc::now(),
        };
        self.thoughts.lock().unwrap_or_else(|e| e.into_inner()).push(thought.clone());
        Ok(thought)
    }

    async fn find(&self, id: &str) -> Result<Option<Thought>, StoreError> {
        check_id(id)?;
        let thoughts = self.thoughts.lock().unwrap_or_else(|e| e.into_inner());
        Ok(thoughts.iter().find(|t| t.id == id).cloned())
    }

    async fn add_heart(&self, id: &str) -> Result<Option<Thought>, StoreError> {
        check_id(id)?;
        let mut thoughts = self.thoughts.lock().unwrap_or_else(|e| e.into_inner());
        Ok(thoughts.iter_mut().find(|t| t.id == id).map(|t| {
            t.hearts += 1;
            t.clone()
        }))
    }
}
