//! MongoDB implementation of DocumentStore

use async_trait::async_trait;
use futures::TryStreamExt;
use mongodb::bson::{Bson, Document};
use tracing::instrument;

use super::MongoHandle;
use crate::store::{DocumentStore, StoreResult};

/// [`DocumentStore`] backed by the shared [`MongoHandle`].
#[derive(Clone, Debug)]
pub struct MongoDocumentStore {
    handle: MongoHandle,
}

impl MongoDocumentStore {
    pub fn new(handle: MongoHandle) -> Self {
        Self { handle }
    }

    pub fn handle(&self) -> &MongoHandle {
        &self.handle
    }

    fn collection(&self, name: &str) -> StoreResult<mongodb::Collection<Document>> {
        Ok(self.handle.database()?.collection::<Document>(name))
    }
}

fn id_to_string(id: Bson) -> String {
    match id {
        Bson::ObjectId(oid) => oid.to_hex(),
        Bson::String(s) => s,
        other => other.to_string(),
    }
}

#[async_trait]
impl DocumentStore for MongoDocumentStore {
    #[instrument(skip(self, document))]
    async fn create_document(&self, collection: &str, document: Document) -> StoreResult<String> {
        let result = self.collection(collection)?.insert_one(document).await?;
        let id = id_to_string(result.inserted_id);

        tracing::debug!(%id, "Document inserted");
        Ok(id)
    }

    #[instrument(skip(self))]
    async fn get_documents(
        &self,
        collection: &str,
        filter: Document,
        limit: i64,
    ) -> StoreResult<Vec<Document>> {
        let cursor = self
            .collection(collection)?
            .find(filter)
            .limit(limit)
            .await?;
        let documents: Vec<Document> = cursor.try_collect().await?;

        Ok(documents)
    }

    #[instrument(skip(self))]
    async fn find_document(
        &self,
        collection: &str,
        filter: Document,
    ) -> StoreResult<Option<Document>> {
        let document = self.collection(collection)?.find_one(filter).await?;
        Ok(document)
    }
}
