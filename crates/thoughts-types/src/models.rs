use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A single posted thought. This is the API-facing shape; the DB layer keeps
/// its own document type to stay independent of the wire format.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Thought {
    /// Hex string of the ObjectId assigned by the store at creation.
    pub id: String,
    pub message: String,
    pub hearts: i64,
    #[serde(rename = "createdAt")]
    pub created_at: DateTime<Utc>,
}
