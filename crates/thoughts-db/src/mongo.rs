use async_trait::async_trait;
use bson::oid::ObjectId;
use bson::{DateTime, doc};
use futures::TryStreamExt;
use mongodb::options::ReturnDocument;
use mongodb::{Client, Collection};
use serde::{Deserialize, Serialize};
use tracing::info;

use thoughts_types::Thought;

use crate::{StoreError, ThoughtStore};

const DEFAULT_DATABASE: &str = "happy-thoughts";
const COLLECTION: &str = "thoughts";

/// Stored document shape. Kept separate from the API [`Thought`] model so the
/// BSON layout (ObjectId, BSON datetime) never leaks onto the wire.
#[derive(Debug, Serialize, Deserialize)]
pub struct ThoughtDocument {
    #[serde(rename = "_id")]
    pub id: ObjectId,
    pub message: String,
    pub hearts: i64,
    #[serde(rename = "createdAt")]
    pub created_at: DateTime,
}

impl From<ThoughtDocument> for Thought {
    fn from(doc: ThoughtDocument) -> Self {
        Thought {
            id: doc.id.to_hex(),
            message: doc.message,
            hearts: doc.hearts,
            created_at: doc.created_at.to_chrono(),
        }
    }
}

pub struct MongoStore {
    thoughts: Collection<ThoughtDocument>,
}

impl MongoStore {
    /// Connect and ping so an unreachable database fails startup instead of
    /// the first request. The database name comes from the URI path.
    pub async fn connect(uri: &str) -> Result<Self, StoreError> {
        let client = Client::with_uri_str(uri).await?;
        let db = client
            .default_database()
            .unwrap_or_else(|| client.database(DEFAULT_DATABASE));
        db.run_command(doc! { "ping": 1 }).await?;
        info!("Connected to MongoDB database '{}'", db.name());
        Ok(Self {
            thoughts: db.collection(COLLECTION),
        })
    }
}

fn parse_id(id: &str) -> Result<ObjectId, StoreError> {
    ObjectId::parse_str(id).map_err(|_| StoreError::MalformedId(id.to_owned()))
}

#[async_trait]
impl ThoughtStore for MongoStore {
    async fn recent(&self, limit: i64) -> Result<Vec<Thought>, StoreError> {
        let cursor = self
            .thoughts
            .find(doc! {})
            .sort(doc! { "createdAt": -1 })
            .limit(limit)
            .await?;
        let docs: Vec<ThoughtDocument> = cursor.try_collect().await?;
        Ok(docs.into_iter().map(Thought::from).collect())
    }

    async fn insert(&self, message: String) -> Result<Thought, StoreError> {
        let doc = ThoughtDocument {
            id: ObjectId::new(),
            message,
            hearts: 0,
            created_at: DateTime::now(),
        };
        self.thoughts.insert_one(&doc).await?;
        Ok(doc.into())
    }

    async fn find(&self, id: &str) -> Result<Option<Thought>, StoreError> {
        let oid = parse_id(id)?;
        let found = self.thoughts.find_one(doc! { "_id": oid }).await?;
        Ok(found.map(Thought::from))
    }

    async fn add_heart(&self, id: &str) -> Result<Option<Thought>, StoreError> {
        let oid = parse_id(id)?;
        // Server-side $inc, so concurrent likes never lose updates.
        let updated = self
            .thoughts
            .find_one_and_update(doc! { "_id": oid }, doc! { "$inc": { "hearts": 1 } })
            .return_document(ReturnDocument::After)
            .await?;
        Ok(updated.map(Thought::from))
    }
}
