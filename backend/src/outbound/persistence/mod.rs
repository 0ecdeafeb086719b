//! PostgreSQL persistence adapter using Diesel ORM.
//!
//! Provides the [`ServiceRowSource`](crate::domain::ports::ServiceRowSource)
//! implementation backed by PostgreSQL via `diesel-async` and `bb8`
//! connection pooling.
//!
//! - **Thin adapter**: translates Diesel rows into domain rows. Grouping and
//!   aggregate assembly stay in the domain.
//! - **Internal models**: row structs (`models.rs`) and the table
//!   definitions (`schema.rs`) are never exposed to the domain.
//! - **Strongly typed errors**: pool and Diesel failures are mapped to
//!   `ServiceRowSourceError`.
//!
//! # Example
//!
//! ```ignore
//! use studio_backend::outbound::persistence::{DbPool, DieselServiceRowSource, PoolConfig};
//!
//! let pool = DbPool::new(PoolConfig::new("postgres://localhost/studio")).await?;
//! let source = DieselServiceRowSource::new(pool);
//! ```

mod diesel_helpers;
mod diesel_service_row_source;
mod models;
mod pool;
mod schema;

pub use diesel_service_row_source::DieselServiceRowSource;
pub use pool::{DbPool, PoolConfig, PoolError};
