//! Knowledge group domain service.
//!
//! Implements the create and list driving ports on top of a
//! [`KnowledgeGroupRepository`], translating persistence failures into
//! transport-agnostic [`Error`] values.

use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::ports::{
    KnowledgeGroupCommand, KnowledgeGroupPersistenceError, KnowledgeGroupQuery,
    KnowledgeGroupRepository,
};
use crate::domain::{Error, KnowledgeGroup, NewKnowledgeGroup, Owner};

fn map_repository_error(error: KnowledgeGroupPersistenceError) -> Error {
    match error {
        KnowledgeGroupPersistenceError::Connection { message } => Error::service_unavailable(
            format!("knowledge group repository unavailable: {message}"),
        ),
        KnowledgeGroupPersistenceError::Query { message } => {
            Error::internal(format!("knowledge group repository error: {message}"))
        }
    }
}

/// Knowledge group service implementing both driving ports.
pub struct KnowledgeGroupService<R: ?Sized> {
    repository: Arc<R>,
}

impl<R: ?Sized> KnowledgeGroupService<R> {
    /// Create a new service backed by `repository`.
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }
}

impl<R: ?Sized> Clone for KnowledgeGroupService<R> {
    fn clone(&self) -> Self {
        Self {
            repository: Arc::clone(&self.repository),
        }
    }
}

#[async_trait]
impl<R> KnowledgeGroupCommand for KnowledgeGroupService<R>
where
    R: KnowledgeGroupRepository + ?Sized,
{
    async fn create(&self, group: NewKnowledgeGroup) -> Result<KnowledgeGroup, Error> {
        self.repository
            .insert(group)
            .await
            .map_err(map_repository_error)
    }
}

#[async_trait]
impl<R> KnowledgeGroupQuery for KnowledgeGroupService<R>
where
    R: KnowledgeGroupRepository + ?Sized,
{
    async fn list_for_owner(&self, owner: &Owner) -> Result<Vec<KnowledgeGroup>, Error> {
        self.repository
            .list_by_owner(owner)
            .await
            .map_err(map_repository_error)
    }
}
