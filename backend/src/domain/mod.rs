//! Domain primitives, aggregates, and read-side use-cases.
//!
//! Purpose: define the service catalogue read model (stored rows and the
//! hydrated aggregate) together with the pure grouping and building steps
//! that turn one into the other. Persistence and transport details stay
//! behind the ports in [`ports`].
//!
//! Public surface:
//! - `ServiceAggregate`: fully hydrated service with every child relation.
//! - `ServiceCatalogueService`: retrieval pipeline implementing the
//!   `ServiceCatalogueQuery` driving port.
//! - `Envelope`: uniform `{success, data, error?}` response wrapper.
//! - `DomainError` (re-exported as `Error`) / `ErrorCode`: transport-agnostic
//!   failure payload.

pub mod envelope;
pub mod error;
pub mod ports;
mod service_catalogue_service;
pub mod services;
pub(crate) mod slug;

pub use self::envelope::Envelope;
pub use self::error::{DomainError, DomainError as Error, ErrorCode};
pub use self::service_catalogue_service::ServiceCatalogueService;
pub use self::services::{
    Faq, PricingTier, PricingTierId, ProcessStep, RelatedService, ServiceAggregate,
    ServiceCategory, ServiceId, ServiceRecord, ServiceSlug, ServiceValidationError, Testimonial,
};
