//! MongoDB-backed `KnowledgeGroupRepository` implementation.

use async_trait::async_trait;
use futures_util::TryStreamExt;
use mongodb::bson::{Document, doc};
use mongodb::error::{Error as MongoError, ErrorKind};
use mongodb::{Collection, Database};
use tracing::debug;

use crate::domain::ports::{KnowledgeGroupPersistenceError, KnowledgeGroupRepository};
use crate::domain::{KnowledgeGroup, KnowledgeGroupId, NewKnowledgeGroup, Owner};

use super::documents::{KnowledgeGroupDocument, NewKnowledgeGroupDocument, render_id};
use super::store::MongoStore;

/// Collection holding knowledge group documents.
pub const KNOWLEDGE_GROUPS_COLLECTION: &str = "knowledgeGroups";

/// Repository over the `knowledgeGroups` collection.
#[derive(Clone, Debug)]
pub struct MongoKnowledgeGroupRepository {
    database: Database,
}

impl MongoKnowledgeGroupRepository {
    /// Create a repository sharing `store`'s client.
    pub fn new(store: &MongoStore) -> Self {
        Self {
            database: store.database().clone(),
        }
    }

    fn writer(&self) -> Collection<NewKnowledgeGroupDocument> {
        self.database.collection(KNOWLEDGE_GROUPS_COLLECTION)
    }

    fn reader(&self) -> Collection<KnowledgeGroupDocument> {
        self.database.collection(KNOWLEDGE_GROUPS_COLLECTION)
    }
}

/// Equality filter selecting every group created by `owner`.
pub(crate) fn owner_filter(owner: &Owner) -> Document {
    doc! { "created_by": owner.as_str() }
}

/// Whether the driver failed to reach the server rather than failing the
/// operation itself.
fn is_connection_failure(kind: &ErrorKind) -> bool {
    matches!(
        kind,
        ErrorKind::Io(_)
            | ErrorKind::ServerSelection { .. }
            | ErrorKind::ConnectionPoolCleared { .. }
            | ErrorKind::DnsResolve { .. }
            | ErrorKind::Shutdown
    )
}

fn map_mongo_error(error: MongoError) -> KnowledgeGroupPersistenceError {
    debug!(error = %error, "mongodb operation failed");
    if is_connection_failure(&error.kind) {
        KnowledgeGroupPersistenceError::connection(error.to_string())
    } else {
        KnowledgeGroupPersistenceError::query(error.to_string())
    }
}

fn query_error(error: impl ToString) -> KnowledgeGroupPersistenceError {
    KnowledgeGroupPersistenceError::query(error.to_string())
}

#[async_trait]
impl KnowledgeGroupRepository for MongoKnowledgeGroupRepository {
    async fn insert(
        &self,
        group: NewKnowledgeGroup,
    ) -> Result<KnowledgeGroup, KnowledgeGroupPersistenceError> {
        let document = NewKnowledgeGroupDocument::from(&group);
        let result = self
            .writer()
            .insert_one(&document)
            .await
            .map_err(map_mongo_error)?;
        let id = render_id(&result.inserted_id).map_err(query_error)?;
        let id = KnowledgeGroupId::new(id).map_err(query_error)?;
        Ok(group.into_persisted(id))
    }

    async fn list_by_owner(
        &self,
        owner: &Owner,
    ) -> Result<Vec<KnowledgeGroup>, KnowledgeGroupPersistenceError> {
        let cursor = self
            .reader()
            .find(owner_filter(owner))
            .await
            .map_err(map_mongo_error)?;
        let documents: Vec<KnowledgeGroupDocument> =
            cursor.try_collect().await.map_err(map_mongo_error)?;
        documents
            .into_iter()
            .map(|document| document.into_domain().map_err(query_error))
            .collect()
    }
}
