//! OpenAPI schema definitions for domain types.
//!
//! Domain types do not derive `ToSchema`; these wrappers mirror their
//! serialised shape so the document can describe them without coupling the
//! domain to utoipa.

use utoipa::ToSchema;

/// OpenAPI schema for [`crate::domain::ServiceCategory`].
#[derive(ToSchema)]
#[schema(as = crate::domain::ServiceCategory)]
pub enum ServiceCategorySchema {
    #[schema(rename = "web-development")]
    WebDevelopment,
    #[schema(rename = "mobile-development")]
    MobileDevelopment,
    #[schema(rename = "ui-ux-design")]
    UiUxDesign,
    #[schema(rename = "digital-marketing")]
    DigitalMarketing,
    #[schema(rename = "ecommerce")]
    Ecommerce,
    #[schema(rename = "consulting")]
    Consulting,
}

/// OpenAPI schema for a pricing tier with its nested features.
#[derive(ToSchema)]
#[schema(as = crate::domain::PricingTier)]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct PricingTierSchema {
    #[schema(example = "Basic")]
    name: String,
    #[schema(example = "$2,000")]
    price: String,
    description: String,
    popular: bool,
    features: Vec<String>,
}

/// OpenAPI schema for [`crate::domain::ServiceAggregate`].
///
/// `gallery`, `testimonials`, and `faqs` are omitted when the service has
/// none; every other list is present and possibly empty.
#[derive(ToSchema)]
#[schema(as = crate::domain::ServiceAggregate, rename_all = "camelCase")]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct ServiceAggregateSchema {
    #[schema(value_type = String, example = "3fa85f64-5717-4562-b3fc-2c963f66afa6")]
    id: String,
    #[schema(example = "web-design")]
    slug: String,
    title: String,
    short_description: String,
    description: String,
    category: ServiceCategorySchema,
    #[schema(example = "4-6 weeks")]
    timeline: String,
    featured_image: Option<String>,
    #[schema(example = "2026-01-15T12:00:00Z")]
    created_at: String,
    #[schema(example = "2026-01-15T12:00:00Z")]
    updated_at: String,
    features: Vec<String>,
    benefits: Vec<String>,
    #[schema(value_type = Vec<Object>)]
    process: serde_json::Value,
    technologies: Vec<String>,
    deliverables: Vec<String>,
    pricing: Vec<PricingTierSchema>,
    gallery: Option<Vec<String>>,
    #[schema(value_type = Option<Vec<Object>>)]
    testimonials: Option<serde_json::Value>,
    #[schema(value_type = Option<Vec<Object>>)]
    faqs: Option<serde_json::Value>,
    #[schema(value_type = Vec<Object>)]
    related_services: serde_json::Value,
}

/// OpenAPI schema for the `{success, data, error?}` envelope.
#[derive(ToSchema)]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct EnvelopeSchema {
    /// `true` when the call succeeded.
    success: bool,
    /// A service, a list of services, `null`, or `[]` on failure.
    #[schema(value_type = Object)]
    data: serde_json::Value,
    /// Failure message, omitted on success.
    #[schema(example = "service web-design not found")]
    error: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use utoipa::PartialSchema;

    #[test]
    fn envelope_schema_lists_fields() {
        let json = serde_json::to_value(EnvelopeSchema::schema()).expect("schema json");
        let properties = json["properties"].as_object().expect("properties");
        assert!(properties.contains_key("success"));
        assert!(properties.contains_key("data"));
        assert!(properties.contains_key("error"));
    }

    #[test]
    fn aggregate_schema_uses_camel_case() {
        let json = serde_json::to_value(ServiceAggregateSchema::schema()).expect("schema json");
        let properties = json["properties"].as_object().expect("properties");
        assert!(properties.contains_key("shortDescription"));
        assert!(properties.contains_key("relatedServices"));
    }
}
