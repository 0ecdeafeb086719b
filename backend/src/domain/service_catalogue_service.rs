//! Service catalogue retrieval pipeline.
//!
//! Every entry point follows the same stateless sequence: resolve parent
//! rows, collect their ids, load every relation concurrently, build one
//! aggregate per parent, and wrap the outcome in an [`Envelope`].

use std::sync::Arc;

use async_trait::async_trait;
use tracing::{debug, warn};

use crate::domain::ports::{
    ServiceCatalogueQuery, ServiceFilter, ServiceRowSource, ServiceRowSourceError,
};
use crate::domain::services::build_service_aggregates;
use crate::domain::services::relations::load_service_relations;
use crate::domain::{Envelope, Error, ServiceAggregate, ServiceCategory, ServiceId, ServiceSlug};

fn map_row_source_error(error: ServiceRowSourceError) -> Error {
    match error {
        ServiceRowSourceError::Connection { message } => {
            Error::service_unavailable(format!("service store unavailable: {message}"))
        }
        ServiceRowSourceError::Query { message } => {
            Error::internal(format!("service store error: {message}"))
        }
    }
}

/// Retrieval service implementing the [`ServiceCatalogueQuery`] driving port.
#[derive(Clone)]
pub struct ServiceCatalogueService<S> {
    row_source: Arc<S>,
}

impl<S> ServiceCatalogueService<S> {
    /// Create a new retrieval service over the given row source.
    pub const fn new(row_source: Arc<S>) -> Self {
        Self { row_source }
    }
}

impl<S> ServiceCatalogueService<S>
where
    S: ServiceRowSource,
{
    async fn hydrate(&self, filter: ServiceFilter) -> Result<Vec<ServiceAggregate>, Error> {
        let records = self
            .row_source
            .select_services(&filter)
            .await
            .map_err(map_row_source_error)?;
        if records.is_empty() {
            debug!(?filter, "no services matched");
            return Ok(Vec::new());
        }

        let ids: Vec<ServiceId> = records.iter().map(|record| record.id).collect();
        let relations = load_service_relations(self.row_source.as_ref(), &ids)
            .await
            .map_err(map_row_source_error)?;
        debug!(?filter, services = ids.len(), "services hydrated");
        Ok(build_service_aggregates(records, &relations))
    }

    /// Hydrate every service.
    ///
    /// # Errors
    ///
    /// Returns [`crate::domain::ErrorCode::ServiceUnavailable`] when the store
    /// is unreachable and [`crate::domain::ErrorCode::InternalError`] when a
    /// query or row conversion fails.
    pub async fn list_all(&self) -> Result<Vec<ServiceAggregate>, Error> {
        self.hydrate(ServiceFilter::All).await
    }

    /// Hydrate the service with `slug`.
    ///
    /// # Errors
    ///
    /// Returns [`crate::domain::ErrorCode::InvalidRequest`] for a malformed
    /// slug, [`crate::domain::ErrorCode::NotFound`] when no service has it,
    /// and the store errors documented on [`Self::list_all`].
    pub async fn find_by_slug(&self, raw_slug: &str) -> Result<ServiceAggregate, Error> {
        let slug =
            ServiceSlug::new(raw_slug).map_err(|err| Error::invalid_request(err.to_string()))?;
        let mut aggregates = self.hydrate(ServiceFilter::Slug(slug.clone())).await?;
        if aggregates.len() > 1 {
            warn!(%slug, matches = aggregates.len(), "slug matched more than one service");
        }
        if aggregates.is_empty() {
            return Err(Error::not_found(format!("service {slug} not found")));
        }
        Ok(aggregates.swap_remove(0))
    }

    /// Hydrate the services listed under `category`.
    ///
    /// # Errors
    ///
    /// See [`Self::list_all`].
    pub async fn list_by_category(
        &self,
        category: ServiceCategory,
    ) -> Result<Vec<ServiceAggregate>, Error> {
        self.hydrate(ServiceFilter::Category(category)).await
    }
}

fn log_failure<T>(operation: &str, envelope: Envelope<T>) -> Envelope<T> {
    if let Some(code) = envelope.error_code() {
        warn!(
            operation,
            ?code,
            error = envelope.error.as_deref().unwrap_or_default(),
            "service retrieval failed"
        );
    }
    envelope
}

#[async_trait]
impl<S> ServiceCatalogueQuery for ServiceCatalogueService<S>
where
    S: ServiceRowSource,
{
    async fn fetch_all(&self) -> Envelope<Vec<ServiceAggregate>> {
        log_failure("fetch_all", Envelope::from_result(self.list_all().await))
    }

    async fn fetch_by_slug(&self, slug: &str) -> Envelope<Option<ServiceAggregate>> {
        let result = self.find_by_slug(slug).await.map(Some);
        log_failure("fetch_by_slug", Envelope::from_result(result))
    }

    async fn fetch_by_category(
        &self,
        category: ServiceCategory,
    ) -> Envelope<Vec<ServiceAggregate>> {
        let result = self.list_by_category(category).await;
        log_failure("fetch_by_category", Envelope::from_result(result))
    }
}

#[cfg(test)]
#[path = "service_catalogue_service_tests.rs"]
mod tests;
