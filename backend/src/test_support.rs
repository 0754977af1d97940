//! Test utilities for the backend crate.
//!
//! This module provides shared helpers for both unit tests (in `src/`) and
//! integration tests (in `tests/`). It is only compiled for tests or with the
//! `test-support` feature.

use std::sync::{Arc, Mutex, PoisonError};

use actix_web::dev::{ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::{App, web};
use async_trait::async_trait;

use crate::domain::ports::{KnowledgeGroupPersistenceError, KnowledgeGroupRepository};
use crate::domain::{KnowledgeGroup, KnowledgeGroupId, NewKnowledgeGroup, Owner};
use crate::inbound::http::state::HttpState;

/// In-memory repository standing in for the document store.
///
/// Identifiers are 24-character hex strings, matching the shape of MongoDB
/// ObjectIds. Listing preserves insertion order.
#[derive(Debug, Default, Clone)]
pub struct InMemoryKnowledgeGroupRepository {
    groups: Arc<Mutex<Vec<KnowledgeGroup>>>,
}

impl InMemoryKnowledgeGroupRepository {
    /// Create an empty repository.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored groups across all owners.
    pub fn len(&self) -> usize {
        self.groups
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    /// Whether nothing has been stored yet.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[async_trait]
impl KnowledgeGroupRepository for InMemoryKnowledgeGroupRepository {
    async fn insert(
        &self,
        group: NewKnowledgeGroup,
    ) -> Result<KnowledgeGroup, KnowledgeGroupPersistenceError> {
        let mut groups = self.groups.lock().unwrap_or_else(PoisonError::into_inner);
        let id = KnowledgeGroupId::new(format!("{:024x}", groups.len() + 1))
            .map_err(|err| KnowledgeGroupPersistenceError::query(err.to_string()))?;
        let stored = group.into_persisted(id);
        groups.push(stored.clone());
        Ok(stored)
    }

    async fn list_by_owner(
        &self,
        owner: &Owner,
    ) -> Result<Vec<KnowledgeGroup>, KnowledgeGroupPersistenceError> {
        let groups = self.groups.lock().unwrap_or_else(PoisonError::into_inner);
        Ok(groups
            .iter()
            .filter(|group| group.created_by() == owner)
            .cloned()
            .collect())
    }
}

/// Build the production application around `state`, without binding a socket.
pub fn test_app(
    state: HttpState,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    crate::server::build_app(crate::server::AppDependencies {
        health_state: web::Data::new(crate::inbound::http::health::HealthState::new()),
        http_state: web::Data::new(state),
    })
}

/// HTTP state whose ports share `repository`.
pub fn in_memory_state(repository: &InMemoryKnowledgeGroupRepository) -> HttpState {
    HttpState::from_repository(Arc::new(repository.clone()))
}
