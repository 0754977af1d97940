//! Driving port for knowledge group creation.
//!
//! Inbound adapters hand over an already validated [`NewKnowledgeGroup`]; the
//! port persists it and returns the stored entity.

use async_trait::async_trait;

use crate::domain::{Error, KnowledgeGroup, NewKnowledgeGroup};

/// Domain use-case port for creating knowledge groups.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait KnowledgeGroupCommand: Send + Sync {
    /// Persist one group. No idempotency or duplicate-name checks apply.
    async fn create(&self, group: NewKnowledgeGroup) -> Result<KnowledgeGroup, Error>;
}
