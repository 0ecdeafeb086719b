//! Assemble hydrated service aggregates from grouped relations.
//!
//! Building is pure: every relation has already been loaded and grouped, so
//! this module only looks rows up by parent id and reshapes them. It never
//! re-sorts, and rows grouped under ids that match no parent are never read.

use super::aggregate::{
    Faq, PricingTier, ProcessStep, RelatedService, ServiceAggregate, Testimonial,
};
use super::grouping::GroupedRows;
use super::ids::ServiceId;
use super::rows::{
    FaqRow, GalleryImageRow, ProcessStepRow, RelatedServiceRow, ServiceRecord, TestimonialRow,
    TextRelationRow,
};

/// Every child relation for one retrieval call, grouped by service id.
///
/// Constructed in full for every call, possibly with empty indexes; the
/// builder decides per field whether an empty group means "empty" or
/// "absent".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ServiceRelations {
    /// Feature rows.
    pub features: GroupedRows<ServiceId, TextRelationRow>,
    /// Benefit rows.
    pub benefits: GroupedRows<ServiceId, TextRelationRow>,
    /// Technology rows.
    pub technologies: GroupedRows<ServiceId, TextRelationRow>,
    /// Deliverable rows.
    pub deliverables: GroupedRows<ServiceId, TextRelationRow>,
    /// Process step rows.
    pub process_steps: GroupedRows<ServiceId, ProcessStepRow>,
    /// Gallery image rows.
    pub gallery_images: GroupedRows<ServiceId, GalleryImageRow>,
    /// Testimonial rows.
    pub testimonials: GroupedRows<ServiceId, TestimonialRow>,
    /// FAQ rows.
    pub faqs: GroupedRows<ServiceId, FaqRow>,
    /// Related-service links.
    pub related_services: GroupedRows<ServiceId, RelatedServiceRow>,
    /// Tiers with their features already nested.
    pub pricing: GroupedRows<ServiceId, PricingTier>,
}

fn texts(rows: &[TextRelationRow]) -> Vec<String> {
    rows.iter().map(|row| row.text.clone()).collect()
}

/// `None` for an empty list, so optional sections serialise as absent.
fn present_or_absent<T>(items: Vec<T>) -> Option<Vec<T>> {
    if items.is_empty() { None } else { Some(items) }
}

fn process(rows: &[ProcessStepRow]) -> Vec<ProcessStep> {
    rows.iter()
        .map(|row| ProcessStep {
            step: row.step,
            title: row.title.clone(),
            description: row.description.clone(),
            duration: row.duration.clone(),
        })
        .collect()
}

fn gallery(rows: &[GalleryImageRow]) -> Option<Vec<String>> {
    present_or_absent(rows.iter().map(|row| row.image_url.clone()).collect())
}

fn testimonials(rows: &[TestimonialRow]) -> Option<Vec<Testimonial>> {
    present_or_absent(
        rows.iter()
            .map(|row| Testimonial {
                quote: row.quote.clone(),
                author: row.author.clone(),
                company: row.company.clone(),
                avatar: row.avatar.clone(),
            })
            .collect(),
    )
}

fn faqs(rows: &[FaqRow]) -> Option<Vec<Faq>> {
    present_or_absent(
        rows.iter()
            .map(|row| Faq {
                question: row.question.clone(),
                answer: row.answer.clone(),
            })
            .collect(),
    )
}

fn related(rows: &[RelatedServiceRow]) -> Vec<RelatedService> {
    rows.iter().map(|row| row.related.clone()).collect()
}

/// Hydrate one service from its parent row and the grouped relations.
#[must_use]
pub fn build_service_aggregate(
    record: ServiceRecord,
    relations: &ServiceRelations,
) -> ServiceAggregate {
    let id = record.id;
    ServiceAggregate {
        id,
        slug: record.slug,
        title: record.title,
        short_description: record.short_description,
        description: record.description,
        category: record.category,
        timeline: record.timeline,
        featured_image: record.featured_image,
        created_at: record.created_at,
        updated_at: record.updated_at,
        features: texts(relations.features.get(&id)),
        benefits: texts(relations.benefits.get(&id)),
        process: process(relations.process_steps.get(&id)),
        technologies: texts(relations.technologies.get(&id)),
        deliverables: texts(relations.deliverables.get(&id)),
        pricing: relations.pricing.get(&id).to_vec(),
        gallery: gallery(relations.gallery_images.get(&id)),
        testimonials: testimonials(relations.testimonials.get(&id)),
        faqs: faqs(relations.faqs.get(&id)),
        related_services: related(relations.related_services.get(&id)),
    }
}

/// Hydrate every record against the same relation set, keeping record order.
#[must_use]
pub fn build_service_aggregates(
    records: Vec<ServiceRecord>,
    relations: &ServiceRelations,
) -> Vec<ServiceAggregate> {
    records
        .into_iter()
        .map(|record| build_service_aggregate(record, relations))
        .collect()
}

#[cfg(test)]
#[path = "builder_tests.rs"]
mod tests;
