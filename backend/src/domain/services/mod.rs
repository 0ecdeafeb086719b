//! Service catalogue read-model types.
//!
//! A service is stored as one parent row plus dependent child tables. The
//! row types mirror what the store returns; [`ServiceAggregate`] is the
//! hydrated shape assembled from them by [`builder`].

mod aggregate;
pub mod builder;
pub mod grouping;
mod ids;
pub mod pricing;
pub mod relations;
mod rows;

pub use aggregate::{
    Faq, PricingTier, ProcessStep, RelatedService, ServiceAggregate, Testimonial,
};
pub use builder::{ServiceRelations, build_service_aggregate, build_service_aggregates};
pub use grouping::{GroupedRows, group_by};
pub use ids::{PricingTierId, ServiceCategory, ServiceId, ServiceSlug, ServiceValidationError};
pub use rows::{
    FaqRow, GalleryImageRow, OrderedRow, PricingFeatureRow, PricingTierRow, ProcessStepRow,
    RelatedServiceRow, ServiceRecord, TestimonialRow, TextRelation, TextRelationRow,
};
