//! Driving port exposing the three service retrieval entry points.
//!
//! Every call returns an [`Envelope`]; failures never escape as `Err`, so
//! callers can destructure the result unconditionally.

use async_trait::async_trait;

use crate::domain::{Envelope, ServiceAggregate, ServiceCategory};

/// Read-side use-case for hydrated services.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ServiceCatalogueQuery: Send + Sync {
    /// Every service, fully hydrated. Empty catalogues succeed with `[]`.
    async fn fetch_all(&self) -> Envelope<Vec<ServiceAggregate>>;

    /// The service with `slug`. A missing service fails with `data: None`.
    async fn fetch_by_slug(&self, slug: &str) -> Envelope<Option<ServiceAggregate>>;

    /// Services listed under `category`, fully hydrated.
    async fn fetch_by_category(
        &self,
        category: ServiceCategory,
    ) -> Envelope<Vec<ServiceAggregate>>;
}
