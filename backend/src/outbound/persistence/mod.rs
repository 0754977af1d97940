//! MongoDB persistence adapters.
//!
//! Repository implementations only translate between BSON documents and
//! domain types; no business logic lives here. Driver failures map onto
//! [`crate::domain::ports::KnowledgeGroupPersistenceError`], split into
//! connection and query failures.
//!
//! ```no_run
//! use knowledge_backend::outbound::persistence::{
//!     MongoConfig, MongoKnowledgeGroupRepository, MongoStore,
//! };
//!
//! # async fn run() -> Result<(), Box<dyn std::error::Error>> {
//! let store = MongoStore::connect(&MongoConfig::new("mongodb://localhost:27017/", "knowledge")).await?;
//! let repo = MongoKnowledgeGroupRepository::new(&store);
//! # let _ = repo;
//! store.shutdown().await;
//! # Ok(())
//! # }
//! ```

mod documents;
mod mongo_knowledge_group_repository;
mod store;

pub use mongo_knowledge_group_repository::{
    KNOWLEDGE_GROUPS_COLLECTION, MongoKnowledgeGroupRepository,
};
pub use store::{MongoConfig, MongoStore, StoreError};
