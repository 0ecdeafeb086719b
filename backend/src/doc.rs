//! OpenAPI documentation configuration.
//!
//! [`ApiDoc`] registers the service catalogue and health endpoints together
//! with the schema wrappers from [`crate::inbound::http::schemas`]. Swagger
//! UI serves it in debug builds.

use utoipa::OpenApi;

use crate::inbound::http::schemas::{
    EnvelopeSchema, PricingTierSchema, ServiceAggregateSchema, ServiceCategorySchema,
};

/// OpenAPI document for the REST API.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Studio backend API",
        description = "Read-only service catalogue with fully hydrated services."
    ),
    servers(
        (url = "/", description = "Relative to the deployment base URL")
    ),
    paths(
        crate::inbound::http::services::list_services,
        crate::inbound::http::services::get_service_by_slug,
        crate::inbound::http::services::list_services_by_category,
        crate::inbound::http::health::ready,
        crate::inbound::http::health::live,
    ),
    components(schemas(
        EnvelopeSchema,
        ServiceAggregateSchema,
        PricingTierSchema,
        ServiceCategorySchema
    )),
    tags(
        (name = "services", description = "Service catalogue reads"),
        (name = "health", description = "Endpoints for health checks")
    )
)]
pub struct ApiDoc;
