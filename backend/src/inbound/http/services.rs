//! Service catalogue read endpoints.
//!
//! ```text
//! GET /api/v1/services
//! GET /api/v1/services/{slug}
//! GET /api/v1/services/category/{category}
//! ```
//!
//! Every response body is an envelope. The HTTP status mirrors the envelope:
//! `200` on success, otherwise the status of its error code.

use std::str::FromStr;

use actix_web::{HttpResponse, get, web};
use serde::Serialize;

use crate::domain::{Envelope, Error, ServiceAggregate, ServiceCategory};
use crate::inbound::http::cache_control::no_cache_header;
use crate::inbound::http::error::{envelope_status, redact_if_internal};
use crate::inbound::http::schemas::EnvelopeSchema;
use crate::inbound::http::state::HttpState;

fn respond<T: Serialize>(envelope: Envelope<T>) -> HttpResponse {
    HttpResponse::build(envelope_status(&envelope))
        .insert_header(no_cache_header())
        .json(redact_if_internal(envelope))
}

/// List every service with all relations hydrated.
#[utoipa::path(
    get,
    path = "/api/v1/services",
    description = "Return every service in the catalogue. Example request: GET /api/v1/services",
    responses(
        (
            status = 200,
            description = "Hydrated services",
            headers(("Cache-Control" = String, description = "Cache control header")),
            body = EnvelopeSchema
        ),
        (status = 503, description = "Service store unavailable", body = EnvelopeSchema),
        (status = 500, description = "Internal server error", body = EnvelopeSchema)
    ),
    tags = ["services"],
    operation_id = "listServices"
)]
#[get("/services")]
pub async fn list_services(state: web::Data<HttpState>) -> HttpResponse {
    respond(state.services.fetch_all().await)
}

/// Look up one service by slug.
#[utoipa::path(
    get,
    path = "/api/v1/services/{slug}",
    description = "Return the service with the given slug. Example request: GET /api/v1/services/web-design",
    params(("slug" = String, Path, description = "Unique service slug")),
    responses(
        (
            status = 200,
            description = "Hydrated service",
            headers(("Cache-Control" = String, description = "Cache control header")),
            body = EnvelopeSchema
        ),
        (status = 400, description = "Malformed slug", body = EnvelopeSchema),
        (status = 404, description = "No service has this slug", body = EnvelopeSchema),
        (status = 503, description = "Service store unavailable", body = EnvelopeSchema),
        (status = 500, description = "Internal server error", body = EnvelopeSchema)
    ),
    tags = ["services"],
    operation_id = "getServiceBySlug"
)]
#[get("/services/{slug}")]
pub async fn get_service_by_slug(
    state: web::Data<HttpState>,
    slug: web::Path<String>,
) -> HttpResponse {
    respond(state.services.fetch_by_slug(&slug).await)
}

/// List the services under one category.
#[utoipa::path(
    get,
    path = "/api/v1/services/category/{category}",
    description = "Return the services listed under a category. Example request: GET /api/v1/services/category/ecommerce",
    params(("category" = crate::inbound::http::schemas::ServiceCategorySchema, Path, description = "Kebab-case category name")),
    responses(
        (
            status = 200,
            description = "Hydrated services",
            headers(("Cache-Control" = String, description = "Cache control header")),
            body = EnvelopeSchema
        ),
        (status = 400, description = "Unknown category", body = EnvelopeSchema),
        (status = 503, description = "Service store unavailable", body = EnvelopeSchema),
        (status = 500, description = "Internal server error", body = EnvelopeSchema)
    ),
    tags = ["services"],
    operation_id = "listServicesByCategory"
)]
#[get("/services/category/{category}")]
pub async fn list_services_by_category(
    state: web::Data<HttpState>,
    path: web::Path<String>,
) -> HttpResponse {
    let envelope = match ServiceCategory::from_str(&path) {
        Ok(category) => state.services.fetch_by_category(category).await,
        Err(err) => Envelope::<Vec<ServiceAggregate>>::from_result(Err(Error::invalid_request(
            err.to_string(),
        ))),
    };
    respond(envelope)
}

#[cfg(test)]
#[path = "services_tests.rs"]
mod tests;
