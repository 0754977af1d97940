//! Domain ports and supporting types for the hexagonal boundary.
//!
//! Driving ports (`KnowledgeGroupCommand`, `KnowledgeGroupQuery`) are what
//! inbound adapters call; the driven port (`KnowledgeGroupRepository`) is what
//! outbound persistence adapters implement. Each driven port exposes strongly
//! typed errors so adapters map their failures into predictable variants.

mod macros;
pub(crate) use macros::define_port_error;

mod knowledge_group_command;
mod knowledge_group_query;
mod knowledge_group_repository;

#[cfg(test)]
pub use knowledge_group_command::MockKnowledgeGroupCommand;
pub use knowledge_group_command::KnowledgeGroupCommand;
#[cfg(test)]
pub use knowledge_group_query::MockKnowledgeGroupQuery;
pub use knowledge_group_query::KnowledgeGroupQuery;
#[cfg(test)]
pub use knowledge_group_repository::MockKnowledgeGroupRepository;
pub use knowledge_group_repository::{KnowledgeGroupPersistenceError, KnowledgeGroupRepository};
