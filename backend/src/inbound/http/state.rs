//! Shared HTTP adapter state.
//!
//! HTTP handlers accept this state via `actix_web::web::Data` so they only
//! depend on domain ports (use-cases) and remain testable without I/O. The
//! state is built once at startup from the shared store handle and cloned into
//! every worker.

use std::sync::Arc;

use crate::domain::KnowledgeGroupService;
use crate::domain::ports::{KnowledgeGroupCommand, KnowledgeGroupQuery, KnowledgeGroupRepository};

/// Dependency bundle for HTTP handlers.
#[derive(Clone)]
pub struct HttpState {
    /// Use-case behind `POST /knowledge-group`.
    pub knowledge_groups: Arc<dyn KnowledgeGroupCommand>,
    /// Use-case behind `GET /knowledge-groups`.
    pub knowledge_groups_query: Arc<dyn KnowledgeGroupQuery>,
}

impl HttpState {
    /// Construct state from explicit driving ports.
    pub fn new(
        knowledge_groups: Arc<dyn KnowledgeGroupCommand>,
        knowledge_groups_query: Arc<dyn KnowledgeGroupQuery>,
    ) -> Self {
        Self {
            knowledge_groups,
            knowledge_groups_query,
        }
    }

    /// Wire both driving ports to one repository through
    /// [`KnowledgeGroupService`].
    ///
    /// # Examples
    /// ```no_run
    /// use std::sync::Arc;
    ///
    /// use knowledge_backend::domain::ports::KnowledgeGroupRepository;
    /// use knowledge_backend::inbound::http::state::HttpState;
    ///
    /// fn build(repo: Arc<dyn KnowledgeGroupRepository>) -> HttpState {
    ///     HttpState::from_repository(repo)
    /// }
    /// ```
    pub fn from_repository(repository: Arc<dyn KnowledgeGroupRepository>) -> Self {
        let service = Arc::new(KnowledgeGroupService::new(repository));
        Self::new(service.clone(), service)
    }
}
