//! Domain primitives, aggregates and ports.
//!
//! Purpose: Define strongly typed domain entities used by the HTTP and
//! persistence adapters. Keep types immutable and document invariants in each
//! type's Rustdoc. Nothing here depends on actix or the MongoDB driver.
//!
//! Public surface:
//! - Error / ErrorCode: transport-agnostic failure payload.
//! - KnowledgeGroup and its value types: the persisted resource.
//! - KnowledgeGroupService: implementation of the driving ports.
//! - TraceId: request correlation identifier.

pub mod error;
pub mod knowledge_group;
pub mod knowledge_group_service;
pub mod ports;
pub mod trace_id;

pub use self::error::{Error, ErrorCode, ErrorValidationError};
pub use self::knowledge_group::{
    GroupName, KnowledgeGroup, KnowledgeGroupId, KnowledgeGroupValidationError, NewKnowledgeGroup,
    Owner,
};
pub use self::knowledge_group_service::KnowledgeGroupService;
pub use self::trace_id::{TRACE_ID_HEADER, TraceId, TraceIdValidationError};
