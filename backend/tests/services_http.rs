//! End-to-end HTTP tests over the in-memory catalogue.

#[expect(
    dead_code,
    reason = "Shared helpers include the reference hydrator used by other suites."
)]
mod support;

use std::sync::Arc;

use actix_web::http::StatusCode;
use actix_web::{App, test as actix_test, web};
use serde_json::{Value, json};
use studio_backend::domain::ServiceCatalogueService;
use studio_backend::domain::ServiceCategory;
use studio_backend::domain::ports::{ServiceRowSource, ServiceRowSourceError};
use studio_backend::domain::services::TextRelation;
use studio_backend::inbound::http::error::INTERNAL_ERROR_MESSAGE;
use studio_backend::inbound::http::services::{
    get_service_by_slug, list_services, list_services_by_category,
};
use studio_backend::inbound::http::state::HttpState;
use studio_backend::outbound::memory::InMemoryServiceRowSource;
use support::{CatalogueBuilder, RecordingRowSource, Select};

fn seeded_catalogue() -> InMemoryServiceRowSource {
    let mut builder = CatalogueBuilder::new();
    let landing = builder.service("landing-page", ServiceCategory::WebDevelopment);
    let app = builder.service("app-launch", ServiceCategory::MobileDevelopment);
    builder.text(TextRelation::Feature, landing, "Responsive layout", 2);
    builder.text(TextRelation::Feature, landing, "Analytics", 1);
    builder.step(landing, 2, "Build");
    builder.step(landing, 1, "Discover");
    builder.faq(landing, "How long?", 1);
    builder.testimonial(landing, "Dana");
    builder.link(landing, app);
    let tier = builder.tier(landing, "Starter", 1);
    builder.tier_feature(tier, "Five pages", 1);
    builder.build()
}

async fn get<S>(source: S, uri: &str) -> (StatusCode, Value)
where
    S: ServiceRowSource + 'static,
{
    let query = Arc::new(ServiceCatalogueService::new(Arc::new(source)));
    let state = web::Data::new(HttpState::new(query));
    let app = actix_test::init_service(
        App::new().app_data(state).service(
            web::scope("/api/v1")
                .service(list_services)
                .service(list_services_by_category)
                .service(get_service_by_slug),
        ),
    )
    .await;
    let response =
        actix_test::call_service(&app, actix_test::TestRequest::get().uri(uri).to_request()).await;
    let status = response.status();
    let body: Value = actix_test::read_body_json(response).await;
    (status, body)
}

#[actix_web::test]
async fn listing_serialises_hydrated_services() {
    let (status, body) = get(seeded_catalogue(), "/api/v1/services").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], json!(true));
    let landing = &body["data"][0];
    assert_eq!(landing["slug"], json!("landing-page"));
    assert_eq!(landing["category"], json!("web-development"));
    assert_eq!(landing["features"], json!(["Analytics", "Responsive layout"]));
    assert_eq!(landing["process"][0]["title"], json!("Discover"));
    assert_eq!(
        landing["pricing"],
        json!([{
            "name": "Starter",
            "price": "$1,000",
            "description": "Starter package",
            "popular": false,
            "features": ["Five pages"],
        }])
    );
    assert_eq!(landing["testimonials"][0]["author"], json!("Dana"));
    assert_eq!(landing["relatedServices"][0]["slug"], json!("app-launch"));
    assert!(landing.get("gallery").is_none());

    let app = &body["data"][1];
    for absent in ["gallery", "testimonials", "faqs"] {
        assert!(app.get(absent).is_none(), "{absent} should be omitted");
    }
}

#[actix_web::test]
async fn slug_route_returns_one_service() {
    let (status, body) = get(seeded_catalogue(), "/api/v1/services/app-launch").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["slug"], json!("app-launch"));
    assert_eq!(body["data"]["relatedServices"], json!([]));
}

#[actix_web::test]
async fn unknown_slug_is_not_found_with_null_data() {
    let (status, body) = get(seeded_catalogue(), "/api/v1/services/brand-refresh").await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["success"], json!(false));
    assert_eq!(body["data"], Value::Null);
    assert_eq!(body["error"], json!("service brand-refresh not found"));
}

#[actix_web::test]
async fn category_route_filters_services() {
    let (status, body) = get(
        seeded_catalogue(),
        "/api/v1/services/category/mobile-development",
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    let slugs: Vec<&str> = body["data"]
        .as_array()
        .expect("data array")
        .iter()
        .filter_map(|service| service["slug"].as_str())
        .collect();
    assert_eq!(slugs, ["app-launch"]);
}

#[actix_web::test]
async fn unknown_category_is_a_bad_request() {
    let (status, body) = get(seeded_catalogue(), "/api/v1/services/category/gardening").await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["data"], json!([]));
}

#[actix_web::test]
async fn relation_failures_are_redacted() {
    let source = RecordingRowSource::new(seeded_catalogue())
        .failing(Select::Faqs, ServiceRowSourceError::query("relation \"faqs\" missing"));

    let (status, body) = get(source, "/api/v1/services").await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["success"], json!(false));
    assert_eq!(body["data"], json!([]));
    assert_eq!(body["error"], json!(INTERNAL_ERROR_MESSAGE));
}

#[actix_web::test]
async fn unreachable_store_is_service_unavailable() {
    let source = RecordingRowSource::new(seeded_catalogue()).failing(
        Select::Services,
        ServiceRowSourceError::connection("connection refused"),
    );

    let (status, body) = get(source, "/api/v1/services/landing-page").await;

    assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
    assert_eq!(body["data"], Value::Null);
    assert!(
        body["error"]
            .as_str()
            .is_some_and(|message| message.contains("unavailable"))
    );
}
