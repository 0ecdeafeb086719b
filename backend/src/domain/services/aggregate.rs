//! Hydrated service aggregate handed to inbound adapters.

use chrono::{DateTime, Utc};
use serde::Serialize;

use super::ids::{ServiceCategory, ServiceId, ServiceSlug};

/// A service with every child relation resolved.
///
/// ## Invariants
/// - Every list keeps the order the store returned for that relation.
/// - `features`, `benefits`, `process`, `technologies`, `deliverables`,
///   `pricing`, and `related_services` are always present, possibly empty.
/// - `gallery`, `testimonials`, and `faqs` are `None` when the service has
///   no rows for them and are omitted from the serialised form, so renderers
///   can tell "no data" apart from an empty section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ServiceAggregate {
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
    /// Feature bullet points.
    pub features: Vec<String>,
    /// Benefit bullet points.
    pub benefits: Vec<String>,
    /// Delivery process, ordered by step.
    pub process: Vec<ProcessStep>,
    /// Technologies used.
    pub technologies: Vec<String>,
    /// What the client receives.
    pub deliverables: Vec<String>,
    /// Pricing tiers with nested features.
    pub pricing: Vec<PricingTier>,
    /// Gallery image URLs, `None` when there are none.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gallery: Option<Vec<String>>,
    /// Client testimonials, `None` when there are none.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub testimonials: Option<Vec<Testimonial>>,
    /// FAQ entries, `None` when there are none.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub faqs: Option<Vec<Faq>>,
    /// Linked services in link order.
    pub related_services: Vec<RelatedService>,
}

impl ServiceAggregate {
    /// Singular testimonial view used by older page templates.
    ///
    /// Derived from `testimonials`; returns the first entry, if any.
    #[must_use]
    pub fn legacy_testimonial(&self) -> Option<&Testimonial> {
        self.testimonials.as_deref().and_then(<[Testimonial]>::first)
    }
}

/// One step of the delivery process.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProcessStep {
    /// Step number, also the sort key.
    pub step: i32,
    /// Display title.
    pub title: String,
    /// Long-form description.
    pub description: String,
    /// Optional duration label.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration: Option<String>,
}

/// Pricing tier with its nested feature list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PricingTier {
    /// Tier name.
    pub name: String,
    /// Price label, rendered as stored.
    pub price: String,
    /// Long-form description.
    pub description: String,
    /// Whether the tier is highlighted.
    pub popular: bool,
    /// Tier features in order.
    pub features: Vec<String>,
}

/// Client testimonial.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Testimonial {
    /// Quoted text.
    pub quote: String,
    /// Person quoted.
    pub author: String,
    /// Company of the person quoted.
    pub company: String,
    /// Avatar image URL.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
}

/// Question and answer pair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Faq {
    /// Question text.
    pub question: String,
    /// Answer text.
    pub answer: String,
}

/// Lightweight projection of a linked service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RelatedService {
    /// Primary key.
    pub id: ServiceId,
    /// Display title.
    pub title: String,
    /// URL-safe identifier.
    pub slug: ServiceSlug,
    /// One-line summary for cards and listings.
    pub short_description: String,
    /// Catalogue category.
    pub category: ServiceCategory,
    /// Hero image URL.
    pub featured_image: Option<String>,
}
