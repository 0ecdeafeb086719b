//! Domain ports and supporting types for the hexagonal boundary.

mod macros;
pub(crate) use macros::define_port_error;

mod service_catalogue_query;
mod service_row_source;

#[cfg(test)]
pub use service_catalogue_query::MockServiceCatalogueQuery;
pub use service_catalogue_query::ServiceCatalogueQuery;
#[cfg(test)]
pub use service_row_source::MockServiceRowSource;
pub use service_row_source::{ServiceFilter, ServiceRowSource, ServiceRowSourceError};
