pub mod memory;
pub mod mongo;

pub use memory::MemoryStore;
pub use mongo::MongoStore;

use async_trait::async_trait;
use thiserror::Error;
use thoughts_types::Thought;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("malformed thought id '{0}'")]
    MalformedId(String),
    #[error("database error: {0}")]
    Backend(#[from] mongodb::error::Error),
}

/// Persistence seam for thoughts. Handlers only see this trait, so tests run
/// against [`MemoryStore`] while the binary wires up [`MongoStore`].
#[async_trait]
pub trait ThoughtStore: Send + Sync {
    /// The `limit` most recently created thoughts, newest first.
    async fn recent(&self, limit: i64) -> Result<Vec<Thought>, StoreError>;

    /// Persist a new thought with zero hearts. The message must already be
    /// validated and trimmed.
    async fn insert(&self, message: String) -> Result<Thought, StoreError>;

    /// `Ok(None)` when no thought has this id; `MalformedId` when `id` is not
    /// a valid ObjectId hex string.
    async fn find(&self, id: &str) -> Result<Option<Thought>, StoreError>;

    /// Atomically increment `hearts` by 1 and return the updated thought, or
    /// `Ok(None)` when no thought has this id.
    async fn add_heart(&self, id: &str) -> Result<Option<Thought>, StoreError>;
}
