//! Per-service reference hydration.
//!
//! Builds each aggregate by scanning the raw tables once per parent, with no
//! batching or grouping. Batched retrieval must agree with it exactly.

use studio_backend::domain::services::{OrderedRow, ServiceRecord, TextRelationRow};
use studio_backend::domain::{
    Faq, PricingTier, ProcessStep, RelatedService, ServiceAggregate, ServiceId, Testimonial,
};
use studio_backend::outbound::memory::InMemoryServiceRowSource;

fn ordered<R: OrderedRow + Clone>(rows: &[R], keep: impl Fn(&R) -> bool) -> Vec<R> {
    let mut selected: Vec<R> = rows.iter().filter(|row| keep(row)).cloned().collect();
    selected.sort_by_key(OrderedRow::order_key);
    selected
}

fn texts(rows: &[TextRelationRow], id: ServiceId) -> Vec<String> {
    ordered(rows, |row| row.service_id == id)
        .into_iter()
        .map(|row| row.text)
        .collect()
}

fn non_empty<T>(items: Vec<T>) -> Option<Vec<T>> {
    (!items.is_empty()).then_some(items)
}

fn related(source: &InMemoryServiceRowSource, id: ServiceId) -> Vec<RelatedService> {
    source
        .related_links
        .iter()
        .filter(|(from, _)| *from == id)
        .filter_map(|(_, to)| source.services.iter().find(|record| record.id == *to))
        .map(|target| RelatedService {
            id: target.id,
            title: target.title.clone(),
            slug: target.slug.clone(),
            short_description: target.short_description.clone(),
            category: target.category,
            featured_image: target.featured_image.clone(),
        })
        .collect()
}

fn pricing(source: &InMemoryServiceRowSource, id: ServiceId) -> Vec<PricingTier> {
    ordered(&source.pricing_tiers, |tier| tier.service_id == id)
        .into_iter()
        .map(|tier| PricingTier {
            features: ordered(&source.pricing_features, |feature| feature.tier_id == tier.id)
                .into_iter()
                .map(|feature| feature.text)
                .collect(),
            name: tier.name,
            price: tier.price,
            description: tier.description,
            popular: tier.popular,
        })
        .collect()
}

/// Hydrate `record` directly from `source`.
pub fn hydrate_one(source: &InMemoryServiceRowSource, record: &ServiceRecord) -> ServiceAggregate {
    let id = record.id;
    ServiceAggregate {
        id,
        slug: record.slug.clone(),
        title: record.title.clone(),
        short_description: record.short_description.clone(),
        description: record.description.clone(),
        category: record.category,
        timeline: record.timeline.clone(),
        featured_image: record.featured_image.clone(),
        created_at: record.created_at,
        updated_at: record.updated_at,
        features: texts(&source.features, id),
        benefits: texts(&source.benefits, id),
        process: ordered(&source.process_steps, |row| row.service_id == id)
            .into_iter()
            .map(|row| ProcessStep {
                step: row.step,
                title: row.title,
                description: row.description,
                duration: row.duration,
            })
            .collect(),
        technologies: texts(&source.technologies, id),
        deliverables: texts(&source.deliverables, id),
        pricing: pricing(source, id),
        gallery: non_empty(
            ordered(&source.gallery_images, |row| row.service_id == id)
                .into_iter()
                .map(|row| row.image_url)
                .collect(),
        ),
        testimonials: non_empty(
            source
                .testimonials
                .iter()
                .filter(|row| row.service_id == id)
                .map(|row| Testimonial {
                    quote: row.quote.clone(),
                    author: row.author.clone(),
                    company: row.company.clone(),
                    avatar: row.avatar.clone(),
                })
                .collect(),
        ),
        faqs: non_empty(
            ordered(&source.faqs, |row| row.service_id == id)
                .into_iter()
                .map(|row| Faq {
                    question: row.question,
                    answer: row.answer,
                })
                .collect(),
        ),
        related_services: related(source, id),
    }
}

/// Hydrate every service in `source`, in table order.
pub fn hydrate_all(source: &InMemoryServiceRowSource) -> Vec<ServiceAggregate> {
    source
        .services
        .iter()
        .map(|record| hydrate_one(source, record))
        .collect()
}
