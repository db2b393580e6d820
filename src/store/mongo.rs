//! MongoDB store backend

use async_trait::async_trait;
use futures_util::TryStreamExt;
use mongodb::bson::{self, Bson, Document};
use mongodb::{Client, Collection};
use serde_json::Value;
use tokio::sync::OnceCell;

use crate::member::Member;
use crate::observability::{Event, Logger};

use super::{Filter, MemberStore, StoreConfig, StoreError, StoreResult};

/// A `MemberStore` backed by a MongoDB collection
///
/// The client is built on first use, not at construction. A missing or
/// bad connection string therefore fails the first request that needs
/// the store instead of failing boot.
pub struct MongoStore {
    config: StoreConfig,
    client: OnceCell<Client>,
}

impl MongoStore {
    pub fn new(config: StoreConfig) -> Self {
        Self {
            config,
            client: OnceCell::new(),
        }
    }

    /// Resolve the member collection, connecting on first use
    async fn collection(&self) -> StoreResult<Collection<Document>> {
        let client = self
            .client
            .get_or_try_init(|| async {
                let uri = self
                    .config
                    .conn_string
                    .as_deref()
                    .ok_or(StoreError::MissingConnString)?;
                let client = Client::with_uri_str(uri).await.map_err(StoreError::Connect)?;
                Logger::event(
                    Event::StoreConnected,
                    &[("database", self.config.database.as_str())],
                );
                Ok::<_, StoreError>(client)
            })
            .await?;

        Ok(client
            .database(&self.config.database)
            .collection::<Document>(&self.config.collection))
    }
}

#[async_trait]
impl MemberStore for MongoStore {
    async fn find(&self, filter: &Filter) -> StoreResult<Vec<Value>> {
        let collection = self.collection().await?;
        let mut cursor = collection.find(filter_document(filter)?, None).await?;

        let mut documents = Vec::new();
        while let Some(doc) = cursor.try_next().await? {
            documents.push(document_to_json(doc));
        }
        Ok(documents)
    }

    async fn find_one(&self, filter: &Filter) -> StoreResult<Option<Value>> {
        let collection = self.collection().await?;
        let doc = collection.find_one(filter_document(filter)?, None).await?;
        Ok(doc.map(document_to_json))
    }

    async fn insert(&self, member: &Member) -> StoreResult<()> {
        let collection = self.collection().await?;
        let doc = bson::to_document(member).map_err(|e| StoreError::Encode(e.to_string()))?;
        collection.insert_one(doc, None).await?;
        Ok(())
    }
}

/// Convert a filter into a Mongo query document
fn filter_document(filter: &Filter) -> StoreResult<Document> {
    let mut doc = Document::new();
    for (field, value) in filter.iter() {
        let bson = Bson::try_from(value.clone()).map_err(|e| StoreError::Encode(e.to_string()))?;
        doc.insert(field, bson);
    }
    Ok(doc)
}

/// Render a stored document as relaxed Extended JSON
///
/// Object ids come out as `{"$oid": "..."}`, which is how stored
/// documents appear on the wire.
fn document_to_json(doc: Document) -> Value {
    Bson::from(doc).into_relaxed_extjson()
}
