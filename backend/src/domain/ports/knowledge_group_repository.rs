//! Port abstraction for knowledge group persistence adapters and their errors.

use async_trait::async_trait;

use crate::domain::{KnowledgeGroup, NewKnowledgeGroup, Owner};

use super::define_port_error;

define_port_error! {
    /// Persistence errors raised by knowledge group repository adapters.
    pub enum KnowledgeGroupPersistenceError {
        /// The store could not be reached.
        Connection { message: String } =>
            "knowledge group repository connection failed: {message}",
        /// Insert or query failed during execution, or a stored document was
        /// malformed.
        Query { message: String } =>
            "knowledge group repository query failed: {message}",
    }
}

/// Port for writing and reading knowledge group documents.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait KnowledgeGroupRepository: Send + Sync {
    /// Insert exactly one document and return it with the store-assigned id.
    async fn insert(
        &self,
        group: NewKnowledgeGroup,
    ) -> Result<KnowledgeGroup, KnowledgeGroupPersistenceError>;

    /// Return every group whose owner equals `owner`, in store-native order.
    async fn list_by_owner(
        &self,
        owner: &Owner,
    ) -> Result<Vec<KnowledgeGroup>, KnowledgeGroupPersistenceError>;
}
