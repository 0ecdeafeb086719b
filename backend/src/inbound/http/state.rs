//! Shared HTTP adapter state.
//!
//! Handlers take this via `actix_web::web::Data` and depend only on the
//! driving port, so they stay testable without I/O.

use std::sync::Arc;

use crate::domain::ports::ServiceCatalogueQuery;

/// Dependency bundle for HTTP handlers.
#[derive(Clone)]
pub struct HttpState {
    /// Catalogue read port.
    pub services: Arc<dyn ServiceCatalogueQuery>,
}

impl HttpState {
    /// Bundle the catalogue query port.
    #[must_use]
    pub fn new(services: Arc<dyn ServiceCatalogueQuery>) -> Self {
        Self { services }
    }
}
