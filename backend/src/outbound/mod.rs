//! Outbound adapters implementing domain ports for external infrastructure.
//!
//! - **persistence**: MongoDB-backed repositories
//!
//! Adapters are thin translators between domain types and storage
//! representations.

pub mod persistence;
