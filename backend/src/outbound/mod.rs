//! Outbound adapters implementing domain ports for external infrastructure.
//!
//! - **persistence**: PostgreSQL-backed row source using Diesel ORM.
//! - **memory**: in-process row source for local runs without a database
//!   and for tests.
//!
//! Adapters translate between domain rows and store representations. They
//! contain no grouping or assembly logic.

pub mod memory;
pub mod persistence;
