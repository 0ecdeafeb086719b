//! Internal Diesel row structs for service catalogue reads.
//!
//! These types never leave the persistence layer. Conversions into domain
//! rows return `String` errors that the adapter maps to query errors.

use chrono::{DateTime, Utc};
use diesel::prelude::*;
use uuid::Uuid;

use crate::domain::services::{
    FaqRow, GalleryImageRow, PricingFeatureRow, PricingTierRow, ProcessStepRow, RelatedServiceRow,
    ServiceRecord, TestimonialRow, TextRelationRow,
};
use crate::domain::{PricingTierId, RelatedService, ServiceCategory, ServiceId, ServiceSlug};

use super::schema::{
    service_faqs, service_gallery_images, service_pricing_features, service_pricing_tiers,
    service_process_steps, service_testimonials, services,
};

fn parse_slug(value: String) -> Result<ServiceSlug, String> {
    ServiceSlug::new(value).map_err(|err| err.to_string())
}

fn parse_category(value: &str) -> Result<ServiceCategory, String> {
    value.parse().map_err(|err: crate::domain::ServiceValidationError| err.to_string())
}

/// Row struct for reading from the services table.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = services)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct ServiceRow {
    pub id: Uuid,
    pub slug: String,
    pub title: String,
    pub short_description: String,
    pub description: String,
    pub category: String,
    pub timeline: String,
    pub featured_image: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl TryFrom<ServiceRow> for ServiceRecord {
    type Error = String;

    fn try_from(row: ServiceRow) -> Result<Self, Self::Error> {
        Ok(Self {
            id: ServiceId::from_uuid(row.id),
            slug: parse_slug(row.slug)?,
            title: row.title,
            short_description: row.short_description,
            description: row.description,
            category: parse_category(&row.category)?,
            timeline: row.timeline,
            featured_image: row.featured_image,
            created_at: row.created_at,
            updated_at: row.updated_at,
        })
    }
}

/// Row shared by the four single-string relation tables.
///
/// Loaded from a `(service_id, content, sort_order)` tuple select because
/// the column set is identical across tables.
#[derive(Debug, Clone, Queryable)]
pub(crate) struct TextRow {
    pub service_id: Uuid,
    pub content: String,
    pub sort_order: i32,
}

impl From<TextRow> for TextRelationRow {
    fn from(row: TextRow) -> Self {
        Self {
            service_id: ServiceId::from_uuid(row.service_id),
            text: row.content,
            order: row.sort_order,
        }
    }
}

#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = service_process_steps)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct ProcessStepDbRow {
    pub service_id: Uuid,
    pub step: i32,
    pub title: String,
    pub description: String,
    pub duration: Option<String>,
}

impl From<ProcessStepDbRow> for ProcessStepRow {
    fn from(row: ProcessStepDbRow) -> Self {
        Self {
            service_id: ServiceId::from_uuid(row.service_id),
            step: row.step,
            title: row.title,
            description: row.description,
            duration: row.duration,
        }
    }
}

#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = service_gallery_images)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct GalleryImageDbRow {
    pub service_id: Uuid,
    pub image_url: String,
    pub sort_order: i32,
}

impl From<GalleryImageDbRow> for GalleryImageRow {
    fn from(row: GalleryImageDbRow) -> Self {
        Self {
            service_id: ServiceId::from_uuid(row.service_id),
            image_url: row.image_url,
            order: row.sort_order,
        }
    }
}

#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = service_testimonials)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct TestimonialDbRow {
    pub service_id: Uuid,
    pub quote: String,
    pub author: String,
    pub company: String,
    pub avatar: Option<String>,
}

impl From<TestimonialDbRow> for TestimonialRow {
    fn from(row: TestimonialDbRow) -> Self {
        Self {
            service_id: ServiceId::from_uuid(row.service_id),
            quote: row.quote,
            author: row.author,
            company: row.company,
            avatar: row.avatar,
        }
    }
}

#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = service_faqs)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct FaqDbRow {
    pub service_id: Uuid,
    pub question: String,
    pub answer: String,
    pub sort_order: i32,
}

impl From<FaqDbRow> for FaqRow {
    fn from(row: FaqDbRow) -> Self {
        Self {
            service_id: ServiceId::from_uuid(row.service_id),
            question: row.question,
            answer: row.answer,
            order: row.sort_order,
        }
    }
}

/// Link row joined onto the linked service's projection columns.
#[derive(Debug, Clone, Queryable)]
pub(crate) struct RelatedServiceDbRow {
    pub service_id: Uuid,
    pub related_id: Uuid,
    pub title: String,
    pub slug: String,
    pub short_description: String,
    pub category: String,
    pub featured_image: Option<String>,
}

impl TryFrom<RelatedServiceDbRow> for RelatedServiceRow {
    type Error = String;

    fn try_from(row: RelatedServiceDbRow) -> Result<Self, Self::Error> {
        Ok(Self {
            service_id: ServiceId::from_uuid(row.service_id),
            related: RelatedService {
                id: ServiceId::from_uuid(row.related_id),
                title: row.title,
                slug: parse_slug(row.slug)?,
                short_description: row.short_description,
                category: parse_category(&row.category)?,
                featured_image: row.featured_image,
            },
        })
    }
}

#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = service_pricing_tiers)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct PricingTierDbRow {
    pub id: Uuid,
    pub service_id: Uuid,
    pub name: String,
    pub price: String,
    pub description: String,
    pub popular: bool,
    pub sort_order: i32,
}

impl From<PricingTierDbRow> for PricingTierRow {
    fn from(row: PricingTierDbRow) -> Self {
        Self {
            id: PricingTierId::from_uuid(row.id),
            service_id: ServiceId::from_uuid(row.service_id),
            name: row.name,
            price: row.price,
            description: row.description,
            popular: row.popular,
            order: row.sort_order,
        }
    }
}

#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = service_pricing_features)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct PricingFeatureDbRow {
    pub tier_id: Uuid,
    pub content: String,
    pub sort_order: i32,
}

impl From<PricingFeatureDbRow> for PricingFeatureRow {
    fn from(row: PricingFeatureDbRow) -> Self {
        Self {
            tier_id: PricingTierId::from_uuid(row.tier_id),
            text: row.content,
            order: row.sort_order,
        }
    }
}
