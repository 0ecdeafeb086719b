//! Driven port for row-level reads from the service store.
//!
//! The port mirrors the primitives a relational store exposes: a filtered
//! parent select, "foreign key is one of these ids" selects for each child
//! relation, and a two-table join for related services. Assembly of the
//! aggregate happens in the domain, never in the adapter.

use async_trait::async_trait;

use crate::domain::services::{
    FaqRow, GalleryImageRow, PricingFeatureRow, PricingTierRow, ProcessStepRow, RelatedServiceRow,
    ServiceRecord, TestimonialRow, TextRelation, TextRelationRow,
};
use crate::domain::{PricingTierId, ServiceCategory, ServiceId, ServiceSlug};

use super::define_port_error;

define_port_error! {
    /// Errors raised when reading service rows.
    pub enum ServiceRowSourceError {
        /// Store connection could not be established.
        Connection { message: String } =>
            "service store connection failed: {message}",
        /// Query failed during execution or row conversion.
        Query { message: String } =>
            "service store query failed: {message}",
    }
}

/// Parent-row selection for one retrieval call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ServiceFilter {
    /// Every service.
    All,
    /// The service with this unique slug, if any.
    Slug(ServiceSlug),
    /// Services listed under this category.
    Category(ServiceCategory),
}

/// Port for reading service rows and their child relations.
///
/// Child selects take the full id set of the call and must issue one batched
/// query for it. Rows come back sorted ascending by the relation's order key
/// (insertion order for testimonials and related services). Implementations
/// may reject an empty id set; callers never pass one.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ServiceRowSource: Send + Sync {
    /// Select the parent rows matching `filter`.
    async fn select_services(
        &self,
        filter: &ServiceFilter,
    ) -> Result<Vec<ServiceRecord>, ServiceRowSourceError>;

    /// Select rows of a single-string relation owned by any of `service_ids`.
    async fn select_text_rows(
        &self,
        relation: TextRelation,
        service_ids: &[ServiceId],
    ) -> Result<Vec<TextRelationRow>, ServiceRowSourceError>;

    /// Select process steps owned by any of `service_ids`, by step number.
    async fn select_process_steps(
        &self,
        service_ids: &[ServiceId],
    ) -> Result<Vec<ProcessStepRow>, ServiceRowSourceError>;

    /// Select gallery images owned by any of `service_ids`.
    async fn select_gallery_images(
        &self,
        service_ids: &[ServiceId],
    ) -> Result<Vec<GalleryImageRow>, ServiceRowSourceError>;

    /// Select testimonials owned by any of `service_ids`, in insertion order.
    async fn select_testimonials(
        &self,
        service_ids: &[ServiceId],
    ) -> Result<Vec<TestimonialRow>, ServiceRowSourceError>;

    /// Select FAQs owned by any of `service_ids`.
    async fn select_faqs(
        &self,
        service_ids: &[ServiceId],
    ) -> Result<Vec<FaqRow>, ServiceRowSourceError>;

    /// Join related-service links owned by any of `service_ids` onto the
    /// linked service rows.
    async fn select_related_services(
        &self,
        service_ids: &[ServiceId],
    ) -> Result<Vec<RelatedServiceRow>, ServiceRowSourceError>;

    /// Select pricing tiers owned by any of `service_ids`.
    async fn select_pricing_tiers(
        &self,
        service_ids: &[ServiceId],
    ) -> Result<Vec<PricingTierRow>, ServiceRowSourceError>;

    /// Select pricing features owned by any of `tier_ids`.
    async fn select_pricing_features(
        &self,
        tier_ids: &[PricingTierId],
    ) -> Result<Vec<PricingFeatureRow>, ServiceRowSourceError>;
}
