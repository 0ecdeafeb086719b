//! In-process [`ServiceRowSource`] over plain row vectors.
//!
//! Behaves like the relational store: child selects filter by membership in
//! the id set, ordered relations come back sorted by their order key with
//! insertion order breaking ties, and related services are an inner join of
//! the link list against `services`. An empty id set is rejected, matching
//! stores that cannot express an empty `IN ()` list.

use std::collections::HashSet;
use std::hash::Hash;

use async_trait::async_trait;

use crate::domain::ports::{ServiceFilter, ServiceRowSource, ServiceRowSourceError};
use crate::domain::services::{
    FaqRow, GalleryImageRow, OrderedRow, PricingFeatureRow, PricingTierRow, ProcessStepRow,
    RelatedServiceRow, ServiceRecord, TestimonialRow, TextRelation, TextRelationRow,
};
use crate::domain::{PricingTierId, RelatedService, ServiceId};

/// Row tables held in memory.
///
/// `related_links` holds `(service_id, related_service_id)` pairs in
/// insertion order.
#[derive(Debug, Clone, Default)]
pub struct InMemoryServiceRowSource {
    /// Parent rows.
    pub services: Vec<ServiceRecord>,
    /// Feature rows.
    pub features: Vec<TextRelationRow>,
    /// Benefit rows.
    pub benefits: Vec<TextRelationRow>,
    /// Technology rows.
    pub technologies: Vec<TextRelationRow>,
    /// Deliverable rows.
    pub deliverables: Vec<TextRelationRow>,
    /// Process step rows.
    pub process_steps: Vec<ProcessStepRow>,
    /// Gallery image rows.
    pub gallery_images: Vec<GalleryImageRow>,
    /// Testimonial rows.
    pub testimonials: Vec<TestimonialRow>,
    /// FAQ rows.
    pub faqs: Vec<FaqRow>,
    /// Related-service links.
    pub related_links: Vec<(ServiceId, ServiceId)>,
    /// Pricing tier rows.
    pub pricing_tiers: Vec<PricingTierRow>,
    /// Pricing feature rows keyed by tier.
    pub pricing_features: Vec<PricingFeatureRow>,
}

fn id_set<K>(ids: &[K], relation: &str) -> Result<HashSet<K>, ServiceRowSourceError>
where
    K: Copy + Eq + Hash,
{
    if ids.is_empty() {
        return Err(ServiceRowSourceError::query(format!("{relation}: empty id set")));
    }
    Ok(ids.iter().copied().collect())
}

fn select_where<R, K>(
    rows: &[R],
    ids: &[K],
    relation: &str,
    key_of: impl Fn(&R) -> K,
) -> Result<Vec<R>, ServiceRowSourceError>
where
    R: Clone,
    K: Copy + Eq + Hash,
{
    let wanted = id_set(ids, relation)?;
    Ok(rows
        .iter()
        .filter(|row| wanted.contains(&key_of(row)))
        .cloned()
        .collect())
}

fn select_ordered<R, K>(
    rows: &[R],
    ids: &[K],
    relation: &str,
    key_of: impl Fn(&R) -> K,
) -> Result<Vec<R>, ServiceRowSourceError>
where
    R: Clone + OrderedRow,
    K: Copy + Eq + Hash,
{
    let mut selected = select_where(rows, ids, relation, key_of)?;
    selected.sort_by_key(OrderedRow::order_key);
    Ok(selected)
}

impl InMemoryServiceRowSource {
    fn text_table(&self, relation: TextRelation) -> &[TextRelationRow] {
        match relation {
            TextRelation::Feature => &self.features,
            TextRelation::Benefit => &self.benefits,
            TextRelation::Technology => &self.technologies,
            TextRelation::Deliverable => &self.deliverables,
        }
    }

    fn matches(record: &ServiceRecord, filter: &ServiceFilter) -> bool {
        match filter {
            ServiceFilter::All => true,
            ServiceFilter::Slug(slug) => record.slug == *slug,
            ServiceFilter::Category(category) => record.category == *category,
        }
    }
}

#[async_trait]
impl ServiceRowSource for InMemoryServiceRowSource {
    async fn select_services(
        &self,
        filter: &ServiceFilter,
    ) -> Result<Vec<ServiceRecord>, ServiceRowSourceError> {
        Ok(self
            .services
            .iter()
            .filter(|record| Self::matches(record, filter))
            .cloned()
            .collect())
    }

    async fn select_text_rows(
        &self,
        relation: TextRelation,
        service_ids: &[ServiceId],
    ) -> Result<Vec<TextRelationRow>, ServiceRowSourceError> {
        select_ordered(
            self.text_table(relation),
            service_ids,
            relation.as_str(),
            |row| row.service_id,
        )
    }

    async fn select_process_steps(
        &self,
        service_ids: &[ServiceId],
    ) -> Result<Vec<ProcessStepRow>, ServiceRowSourceError> {
        select_ordered(&self.process_steps, service_ids, "process", |row| {
            row.service_id
        })
    }

    async fn select_gallery_images(
        &self,
        service_ids: &[ServiceId],
    ) -> Result<Vec<GalleryImageRow>, ServiceRowSourceError> {
        select_ordered(&self.gallery_images, service_ids, "gallery", |row| {
            row.service_id
        })
    }

    async fn select_testimonials(
        &self,
        service_ids: &[ServiceId],
    ) -> Result<Vec<TestimonialRow>, ServiceRowSourceError> {
        select_where(&self.testimonials, service_ids, "testimonials", |row| {
            row.service_id
        })
    }

    async fn select_faqs(
        &self,
        service_ids: &[ServiceId],
    ) -> Result<Vec<FaqRow>, ServiceRowSourceError> {
        select_ordered(&self.faqs, service_ids, "faqs", |row| row.service_id)
    }

    async fn select_related_services(
        &self,
        service_ids: &[ServiceId],
    ) -> Result<Vec<RelatedServiceRow>, ServiceRowSourceError> {
        let wanted = id_set(service_ids, "related services")?;
        Ok(self
            .related_links
            .iter()
            .filter(|(owner, _)| wanted.contains(owner))
            .filter_map(|(owner, target)| {
                self.services
                    .iter()
                    .find(|record| record.id == *target)
                    .map(|record| RelatedServiceRow {
                        service_id: *owner,
                        related: RelatedService {
                            id: record.id,
                            title: record.title.clone(),
                            slug: record.slug.clone(),
                            short_description: record.short_description.clone(),
                            category: record.category,
                            featured_image: record.featured_image.clone(),
                        },
                    })
            })
            .collect())
    }

    async fn select_pricing_tiers(
        &self,
        service_ids: &[ServiceId],
    ) -> Result<Vec<PricingTierRow>, ServiceRowSourceError> {
        select_ordered(&self.pricing_tiers, service_ids, "pricing tiers", |row| {
            row.service_id
        })
    }

    async fn select_pricing_features(
        &self,
        tier_ids: &[PricingTierId],
    ) -> Result<Vec<PricingFeatureRow>, ServiceRowSourceError> {
        select_ordered(&self.pricing_features, tier_ids, "pricing features", |row| {
            row.tier_id
        })
    }
}
