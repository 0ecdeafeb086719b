//! Row shapes returned by the service store.
//!
//! Each child row carries the foreign key it is grouped by (`service_id`,
//! or `tier_id` for pricing features) plus its payload. Rows with an
//! explicit ordering column implement [`OrderedRow`].

use chrono::{DateTime, Utc};

use super::aggregate::RelatedService;
use super::ids::{PricingTierId, ServiceCategory, ServiceId, ServiceSlug};

/// Parent service row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceRecord {
    /// Primary key.
    pub id: ServiceId,
    /// URL-safe identifier.
    pub slug: ServiceSlug,
    /// Display title.
    pub title: String,
    /// One-line summary for cards and listings.
    pub short_description: String,
    /// Long-form description.
    pub description: String,
    /// Catalogue category.
    pub category: ServiceCategory,
    /// Typical delivery timeline, free text.
    pub timeline: String,
    /// Hero image URL.
    pub featured_image: Option<String>,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Last modification timestamp.
    pub updated_at: DateTime<Utc>,
}

/// Rows sorted by an explicit integer order column.
pub trait OrderedRow {
    /// Ascending sort key within one parent.
    fn order_key(&self) -> i32;
}

/// Child relations whose payload is a single string.
///
/// The four relations share one row shape and differ only in the table
/// they are read from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TextRelation {
    /// `service_features`
    Feature,
    /// `service_benefits`
    Benefit,
    /// `service_technologies`
    Technology,
    /// `service_deliverables`
    Deliverable,
}

impl TextRelation {
    /// Every text relation.
    pub const ALL: [Self; 4] = [
        Self::Feature,
        Self::Benefit,
        Self::Technology,
        Self::Deliverable,
    ];

    /// Relation name used in logs and error messages.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Feature => "feature",
            Self::Benefit => "benefit",
            Self::Technology => "technology",
            Self::Deliverable => "deliverable",
        }
    }
}

/// Feature, benefit, technology, or deliverable row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextRelationRow {
    /// Owning service.
    pub service_id: ServiceId,
    /// Payload text.
    pub text: String,
    /// Ascending position within the parent.
    pub order: i32,
}

impl OrderedRow for TextRelationRow {
    fn order_key(&self) -> i32 {
        self.order
    }
}

/// Process step row, ordered by its step number.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProcessStepRow {
    /// Owning service.
    pub service_id: ServiceId,
    /// Step number, also the sort key.
    pub step: i32,
    /// Display title.
    pub title: String,
    /// Long-form description.
    pub description: String,
    /// Optional duration label.
    pub duration: Option<String>,
}

impl OrderedRow for ProcessStepRow {
    fn order_key(&self) -> i32 {
        self.step
    }
}

/// Gallery image row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GalleryImageRow {
    /// Owning service.
    pub service_id: ServiceId,
    /// Image URL.
    pub image_url: String,
    /// Ascending position within the parent.
    pub order: i32,
}

impl OrderedRow for GalleryImageRow {
    fn order_key(&self) -> i32 {
        self.order
    }
}

/// Testimonial row. Testimonials have no order column and keep insertion
/// order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TestimonialRow {
    /// Owning service.
    pub service_id: ServiceId,
    /// Quoted text.
    pub quote: String,
    /// Person quoted.
    pub author: String,
    /// Company of the person quoted.
    pub company: String,
    /// Avatar image URL.
    pub avatar: Option<String>,
}

/// Frequently asked question row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FaqRow {
    /// Owning service.
    pub service_id: ServiceId,
    /// Question text.
    pub question: String,
    /// Answer text.
    pub answer: String,
    /// Ascending position within the parent.
    pub order: i32,
}

impl OrderedRow for FaqRow {
    fn order_key(&self) -> i32 {
        self.order
    }
}

/// Related-service link resolved by joining the target service row.
///
/// `service_id` is the owning service; `related` is the projection of the
/// linked one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RelatedServiceRow {
    /// Owning service.
    pub service_id: ServiceId,
    /// Projection of the linked service.
    pub related: RelatedService,
}

/// Pricing tier row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PricingTierRow {
    /// Tier key, referenced by pricing features.
    pub id: PricingTierId,
    /// Owning service.
    pub service_id: ServiceId,
    /// Tier name.
    pub name: String,
    /// Price label, rendered as stored.
    pub price: String,
    /// Long-form description.
    pub description: String,
    /// Whether the tier is highlighted.
    pub popular: bool,
    /// Ascending position within the parent.
    pub order: i32,
}

impl OrderedRow for PricingTierRow {
    fn order_key(&self) -> i32 {
        self.order
    }
}

/// Pricing feature row, owned by a tier rather than a service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PricingFeatureRow {
    /// Owning pricing tier.
    pub tier_id: PricingTierId,
    /// Payload text.
    pub text: String,
    /// Ascending position within the parent.
    pub order: i32,
}

impl OrderedRow for PricingFeatureRow {
    fn order_key(&self) -> i32 {
        self.order
    }
}
