//! Shared fixtures for service catalogue integration suites.
//!
//! [`CatalogueBuilder`] seeds an in-memory row source; [`RecordingRowSource`]
//! wraps one to record every select and optionally inject a failure.

pub mod naive;

use std::sync::Mutex;

use async_trait::async_trait;
use chrono::{DateTime, TimeZone, Utc};
use studio_backend::domain::ports::{ServiceFilter, ServiceRowSource, ServiceRowSourceError};
use studio_backend::domain::services::{
    FaqRow, GalleryImageRow, PricingFeatureRow, PricingTierRow, ProcessStepRow, RelatedServiceRow,
    ServiceRecord, TestimonialRow, TextRelation, TextRelationRow,
};
use studio_backend::domain::{PricingTierId, ServiceCategory, ServiceId, ServiceSlug};
use studio_backend::outbound::memory::InMemoryServiceRowSource;

/// Fixed timestamp so aggregates compare equal across builds.
pub fn fixed_timestamp() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 1, 20, 10, 0, 0)
        .single()
        .expect("valid timestamp")
}

/// Parent row with deterministic text fields derived from `slug`.
pub fn service_record(slug: &str, category: ServiceCategory) -> ServiceRecord {
    ServiceRecord {
        id: ServiceId::random(),
        slug: ServiceSlug::new(slug).expect("valid slug"),
        title: format!("{slug} title"),
        short_description: format!("{slug} summary"),
        description: format!("{slug} description"),
        category,
        timeline: "4 weeks".to_owned(),
        featured_image: None,
        created_at: fixed_timestamp(),
        updated_at: fixed_timestamp(),
    }
}

/// Fluent seeding over [`InMemoryServiceRowSource`].
#[derive(Debug, Default, Clone)]
pub struct CatalogueBuilder {
    source: InMemoryServiceRowSource,
}

impl CatalogueBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn service(&mut self, slug: &str, category: ServiceCategory) -> ServiceId {
        let record = service_record(slug, category);
        let id = record.id;
        self.source.services.push(record);
        id
    }

    pub fn text(&mut self, relation: TextRelation, service_id: ServiceId, text: &str, order: i32) {
        let row = TextRelationRow {
            service_id,
            text: text.to_owned(),
            order,
        };
        match relation {
            TextRelation::Feature => self.source.features.push(row),
            TextRelation::Benefit => self.source.benefits.push(row),
            TextRelation::Technology => self.source.technologies.push(row),
            TextRelation::Deliverable => self.source.deliverables.push(row),
        }
    }

    pub fn step(&mut self, service_id: ServiceId, step: i32, title: &str) {
        self.source.process_steps.push(ProcessStepRow {
            service_id,
            step,
            title: title.to_owned(),
            description: format!("{title} in detail"),
            duration: None,
        });
    }

    pub fn gallery_image(&mut self, service_id: ServiceId, url: &str, order: i32) {
        self.source.gallery_images.push(GalleryImageRow {
            service_id,
            image_url: url.to_owned(),
            order,
        });
    }

    pub fn testimonial(&mut self, service_id: ServiceId, author: &str) {
        self.source.testimonials.push(TestimonialRow {
            service_id,
            quote: format!("{author} recommends them"),
            author: author.to_owned(),
            company: "Acme".to_owned(),
            avatar: None,
        });
    }

    pub fn faq(&mut self, service_id: ServiceId, question: &str, order: i32) {
        self.source.faqs.push(FaqRow {
            service_id,
            question: question.to_owned(),
            answer: format!("Answer to {question}"),
            order,
        });
    }

    pub fn link(&mut self, from: ServiceId, to: ServiceId) {
        self.source.related_links.push((from, to));
    }

    pub fn tier(&mut self, service_id: ServiceId, name: &str, order: i32) -> PricingTierId {
        let id = PricingTierId::random();
        self.source.pricing_tiers.push(PricingTierRow {
            id,
            service_id,
            name: name.to_owned(),
            price: format!("${order},000"),
            description: format!("{name} package"),
            popular: false,
            order,
        });
        id
    }

    pub fn tier_feature(&mut self, tier_id: PricingTierId, text: &str, order: i32) {
        self.source.pricing_features.push(PricingFeatureRow {
            tier_id,
            text: text.to_owned(),
            order,
        });
    }

    pub fn build(self) -> InMemoryServiceRowSource {
        self.source
    }
}

/// Which select a [`RecordedCall`] refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Select {
    Services,
    Text(TextRelation),
    ProcessSteps,
    GalleryImages,
    Testimonials,
    Faqs,
    RelatedServices,
    PricingTiers,
    PricingFeatures,
}

/// One select issued against a [`RecordingRowSource`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordedCall {
    pub select: Select,
    pub id_count: usize,
}

/// Row source double that records selects and can fail one of them.
#[derive(Debug, Default)]
pub struct RecordingRowSource {
    inner: InMemoryServiceRowSource,
    calls: Mutex<Vec<RecordedCall>>,
    failure: Option<(Select, ServiceRowSourceError)>,
}

impl RecordingRowSource {
    pub fn new(inner: InMemoryServiceRowSource) -> Self {
        Self {
            inner,
            calls: Mutex::new(Vec::new()),
            failure: None,
        }
    }

    /// Make `select` return `error` instead of rows.
    pub fn failing(mut self, select: Select, error: ServiceRowSourceError) -> Self {
        self.failure = Some((select, error));
        self
    }

    pub fn calls(&self) -> Vec<RecordedCall> {
        self.calls.lock().expect("calls lock").clone()
    }

    pub fn count(&self, select: Select) -> usize {
        self.calls().iter().filter(|call| call.select == select).count()
    }

    fn record(&self, select: Select, id_count: usize) -> Result<(), ServiceRowSourceError> {
        self.calls
            .lock()
            .expect("calls lock")
            .push(RecordedCall { select, id_count });
        match &self.failure {
            Some((failing, error)) if *failing == select => Err(error.clone()),
            _ => Ok(()),
        }
    }
}

#[async_trait]
impl ServiceRowSource for RecordingRowSource {
    async fn select_services(
        &self,
        filter: &ServiceFilter,
    ) -> Result<Vec<ServiceRecord>, ServiceRowSourceError> {
        self.record(Select::Services, 0)?;
        self.inner.select_services(filter).await
    }

    async fn select_text_rows(
        &self,
        relation: TextRelation,
        service_ids: &[ServiceId],
    ) -> Result<Vec<TextRelationRow>, ServiceRowSourceError> {
        self.record(Select::Text(relation), service_ids.len())?;
        self.inner.select_text_rows(relation, service_ids).await
    }

    async fn select_process_steps(
        &self,
        service_ids: &[ServiceId],
    ) -> Result<Vec<ProcessStepRow>, ServiceRowSourceError> {
        self.record(Select::ProcessSteps, service_ids.len())?;
        self.inner.select_process_steps(service_ids).await
    }

    async fn select_gallery_images(
        &self,
        service_ids: &[ServiceId],
    ) -> Result<Vec<GalleryImageRow>, ServiceRowSourceError> {
        self.record(Select::GalleryImages, service_ids.len())?;
        self.inner.select_gallery_images(service_ids).await
    }

    async fn select_testimonials(
        &self,
        service_ids: &[ServiceId],
    ) -> Result<Vec<TestimonialRow>, ServiceRowSourceError> {
        self.record(Select::Testimonials, service_ids.len())?;
        self.inner.select_testimonials(service_ids).await
    }

    async fn select_faqs(
        &self,
        service_ids: &[ServiceId],
    ) -> Result<Vec<FaqRow>, ServiceRowSourceError> {
        self.record(Select::Faqs, service_ids.len())?;
        self.inner.select_faqs(service_ids).await
    }

    async fn select_related_services(
        &self,
        service_ids: &[ServiceId],
    ) -> Result<Vec<RelatedServiceRow>, ServiceRowSourceError> {
        self.record(Select::RelatedServices, service_ids.len())?;
        self.inner.select_related_services(service_ids).await
    }

    async fn select_pricing_tiers(
        &self,
        service_ids: &[ServiceId],
    ) -> Result<Vec<PricingTierRow>, ServiceRowSourceError> {
        self.record(Select::PricingTiers, service_ids.len())?;
        self.inner.select_pricing_tiers(service_ids).await
    }

    async fn select_pricing_features(
        &self,
        tier_ids: &[PricingTierId],
    ) -> Result<Vec<PricingFeatureRow>, ServiceRowSourceError> {
        self.record(Select::PricingFeatures, tier_ids.len())?;
        self.inner.select_pricing_features(tier_ids).await
    }
}
