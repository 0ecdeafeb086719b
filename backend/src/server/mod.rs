//! Server construction and route wiring.

mod config;

pub use config::{ServerConfig, ServerSettings};

use std::sync::Arc;

use actix_web::dev::{Server, ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::{App, HttpServer, web};
use tracing::info;

#[cfg(debug_assertions)]
use studio_backend::doc::ApiDoc;
use studio_backend::domain::ServiceCatalogueService;
use studio_backend::domain::ports::ServiceCatalogueQuery;
use studio_backend::inbound::http::health::{HealthState, live, ready};
use studio_backend::inbound::http::services::{
    get_service_by_slug, list_services, list_services_by_category,
};
use studio_backend::inbound::http::state::HttpState;
use studio_backend::outbound::memory::InMemoryServiceRowSource;
use studio_backend::outbound::persistence::DieselServiceRowSource;
#[cfg(debug_assertions)]
use utoipa::OpenApi;
#[cfg(debug_assertions)]
use utoipa_swagger_ui::SwaggerUi;

/// Build the catalogue query port for `config`.
///
/// Uses PostgreSQL when a pool is configured, otherwise an empty in-process
/// catalogue.
fn build_catalogue_query(config: &ServerConfig) -> Arc<dyn ServiceCatalogueQuery> {
    match &config.db_pool {
        Some(pool) => Arc::new(ServiceCatalogueService::new(Arc::new(
            DieselServiceRowSource::new(pool.clone()),
        ))),
        None => {
            info!("no database configured; serving an empty in-process catalogue");
            Arc::new(ServiceCatalogueService::new(Arc::new(
                InMemoryServiceRowSource::default(),
            )))
        }
    }
}

fn build_app(
    health_state: web::Data<HealthState>,
    http_state: web::Data<HttpState>,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    let api = web::scope("/api/v1")
        .service(list_services)
        .service(list_services_by_category)
        .service(get_service_by_slug);

    let app = App::new()
        .app_data(health_state)
        .app_data(http_state)
        .service(api)
        .service(ready)
        .service(live);

    #[cfg(debug_assertions)]
    let app = app.service(SwaggerUi::new("/docs").url("/api-docs/openapi.json", ApiDoc::openapi()));

    app
}

/// Construct an Actix HTTP server.
///
/// Marks `health_state` ready once the listener is bound.
///
/// # Errors
/// Propagates [`std::io::Error`] when binding the socket fails.
pub fn create_server(
    health_state: web::Data<HealthState>,
    config: ServerConfig,
) -> std::io::Result<Server> {
    let http_state = web::Data::new(HttpState::new(build_catalogue_query(&config)));
    let server_health_state = health_state.clone();

    let server = HttpServer::new(move || {
        build_app(server_health_state.clone(), http_state.clone())
    })
    .bind(config.bind_addr)?
    .run();

    health_state.mark_ready();
    Ok(server)
}
