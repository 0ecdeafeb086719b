//! Batched relation loading for a set of parent services.
//!
//! Each loader issues one "foreign key is one of these ids" query for the
//! whole id set, never one query per parent. An empty id set short-circuits
//! without touching the store. Rows with an explicit order column are
//! re-sorted (stably) at this boundary so the grouping step can rely on
//! ordered input even if a store does not honour the requested order.

use std::future::Future;

use futures_util::try_join;
use tracing::debug;

use crate::domain::ports::{ServiceRowSource, ServiceRowSourceError};

use super::builder::ServiceRelations;
use super::grouping::group_by;
use super::ids::{PricingTierId, ServiceId};
use super::pricing::resolve_pricing;
use super::rows::{
    FaqRow, GalleryImageRow, OrderedRow, PricingFeatureRow, PricingTierRow, ProcessStepRow,
    RelatedServiceRow, TestimonialRow, TextRelation, TextRelationRow,
};

/// Stable ascending sort by order key; ties keep store order.
fn sort_by_order_key<R: OrderedRow>(rows: &mut [R]) {
    rows.sort_by_key(OrderedRow::order_key);
}

async fn load_ordered<I, R, Fut>(
    ids: &[I],
    fetch: impl FnOnce() -> Fut,
) -> Result<Vec<R>, ServiceRowSourceError>
where
    R: OrderedRow,
    Fut: Future<Output = Result<Vec<R>, ServiceRowSourceError>>,
{
    if ids.is_empty() {
        return Ok(Vec::new());
    }
    let mut rows = fetch().await?;
    sort_by_order_key(&mut rows);
    Ok(rows)
}

async fn load_unordered<I, R, Fut>(
    ids: &[I],
    fetch: impl FnOnce() -> Fut,
) -> Result<Vec<R>, ServiceRowSourceError>
where
    Fut: Future<Output = Result<Vec<R>, ServiceRowSourceError>>,
{
    if ids.is_empty() {
        return Ok(Vec::new());
    }
    fetch().await
}

/// Per-relation loaders over a [`ServiceRowSource`].
///
/// Store errors are returned unchanged and never retried.
pub struct RelationLoader<'a, S: ?Sized> {
    source: &'a S,
}

impl<'a, S> RelationLoader<'a, S>
where
    S: ServiceRowSource + ?Sized,
{
    /// Borrow `source` for the duration of one retrieval call.
    pub const fn new(source: &'a S) -> Self {
        Self { source }
    }

    /// Load a single-string relation, sorted by its order column.
    pub async fn text_rows(
        &self,
        relation: TextRelation,
        service_ids: &[ServiceId],
    ) -> Result<Vec<TextRelationRow>, ServiceRowSourceError> {
        load_ordered(service_ids, || {
            self.source.select_text_rows(relation, service_ids)
        })
        .await
    }

    /// Load process steps, sorted by step number.
    pub async fn process_steps(
        &self,
        service_ids: &[ServiceId],
    ) -> Result<Vec<ProcessStepRow>, ServiceRowSourceError> {
        load_ordered(service_ids, || self.source.select_process_steps(service_ids)).await
    }

    /// Load gallery images, sorted by their order column.
    pub async fn gallery_images(
        &self,
        service_ids: &[ServiceId],
    ) -> Result<Vec<GalleryImageRow>, ServiceRowSourceError> {
        load_ordered(service_ids, || self.source.select_gallery_images(service_ids)).await
    }

    /// Load testimonials in store (insertion) order.
    pub async fn testimonials(
        &self,
        service_ids: &[ServiceId],
    ) -> Result<Vec<TestimonialRow>, ServiceRowSourceError> {
        load_unordered(service_ids, || self.source.select_testimonials(service_ids)).await
    }

    /// Load FAQs, sorted by their order column.
    pub async fn faqs(
        &self,
        service_ids: &[ServiceId],
    ) -> Result<Vec<FaqRow>, ServiceRowSourceError> {
        load_ordered(service_ids, || self.source.select_faqs(service_ids)).await
    }

    /// Load related-service projections in store order.
    pub async fn related_services(
        &self,
        service_ids: &[ServiceId],
    ) -> Result<Vec<RelatedServiceRow>, ServiceRowSourceError> {
        load_unordered(service_ids, || {
            self.source.select_related_services(service_ids)
        })
        .await
    }

    /// Load pricing tiers, sorted by their order column.
    pub async fn pricing_tiers(
        &self,
        service_ids: &[ServiceId],
    ) -> Result<Vec<PricingTierRow>, ServiceRowSourceError> {
        load_ordered(service_ids, || self.source.select_pricing_tiers(service_ids)).await
    }

    /// Load pricing features keyed by tier id, sorted by their order column.
    pub async fn pricing_features(
        &self,
        tier_ids: &[PricingTierId],
    ) -> Result<Vec<PricingFeatureRow>, ServiceRowSourceError> {
        load_ordered(tier_ids, || self.source.select_pricing_features(tier_ids)).await
    }
}

/// Load and group every relation for `service_ids`.
///
/// All loaders run concurrently; the pricing resolver's two stages run in
/// sequence inside its own branch. The first failure aborts the call.
pub async fn load_service_relations<S>(
    source: &S,
    service_ids: &[ServiceId],
) -> Result<ServiceRelations, ServiceRowSourceError>
where
    S: ServiceRowSource + ?Sized,
{
    let loader = RelationLoader::new(source);
    let (
        features,
        benefits,
        technologies,
        deliverables,
        process_steps,
        gallery_images,
        testimonials,
        faqs,
        related_services,
        pricing,
    ) = try_join!(
        loader.text_rows(TextRelation::Feature, service_ids),
        loader.text_rows(TextRelation::Benefit, service_ids),
        loader.text_rows(TextRelation::Technology, service_ids),
        loader.text_rows(TextRelation::Deliverable, service_ids),
        loader.process_steps(service_ids),
        loader.gallery_images(service_ids),
        loader.testimonials(service_ids),
        loader.faqs(service_ids),
        loader.related_services(service_ids),
        resolve_pricing(&loader, service_ids),
    )?;

    debug!(
        services = service_ids.len(),
        features = features.len(),
        priced_services = pricing.len(),
        "service relations loaded"
    );

    Ok(ServiceRelations {
        features: group_by(features, |row| row.service_id),
        benefits: group_by(benefits, |row| row.service_id),
        technologies: group_by(technologies, |row| row.service_id),
        deliverables: group_by(deliverables, |row| row.service_id),
        process_steps: group_by(process_steps, |row| row.service_id),
        gallery_images: group_by(gallery_images, |row| row.service_id),
        testimonials: group_by(testimonials, |row| row.service_id),
        faqs: group_by(faqs, |row| row.service_id),
        related_services: group_by(related_services, |row| row.service_id),
        pricing,
    })
}

#[cfg(test)]
#[path = "relations_tests.rs"]
mod tests;
