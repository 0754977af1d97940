//! Driving port for knowledge group reads.

use async_trait::async_trait;

use crate::domain::{Error, KnowledgeGroup, Owner};

/// Domain use-case port for listing knowledge groups.
///
/// # Examples
///
/// ```rust,no_run
/// use std::sync::Arc;
///
/// use knowledge_backend::domain::ports::{KnowledgeGroupQuery, KnowledgeGroupRepository};
/// use knowledge_backend::domain::{KnowledgeGroupService, Owner};
///
/// # async fn example(repo: Arc<dyn KnowledgeGroupRepository>) -> Result<(), knowledge_backend::domain::Error> {
/// let query = KnowledgeGroupService::new(repo);
/// let owner = Owner::new("user-123");
/// let groups = query.list_for_owner(&owner).await?;
/// assert!(groups.iter().all(|group| group.created_by() == &owner));
/// # Ok(())
/// # }
/// ```
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait KnowledgeGroupQuery: Send + Sync {
    /// Return the groups created by `owner`; an empty list is not an error.
    async fn list_for_owner(&self, owner: &Owner) -> Result<Vec<KnowledgeGroup>, Error>;
}
