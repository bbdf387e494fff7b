//! Outbound adapters implementing domain ports for external infrastructure.
//!
//! - **persistence**: PostgreSQL repositories using Diesel ORM.
//! - **cache**: in-memory and Redis-backed status caches.
//!
//! Adapters translate between domain types and infrastructure
//! representations. They contain no business logic.

pub mod cache;
pub mod persistence;
