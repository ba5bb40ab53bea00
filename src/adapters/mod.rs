// Adapters layer: concrete catalog sources (local files, http) and the CSV decoding they share.

pub mod csv_catalog;
pub mod http;
pub mod local;

use crate::core::CatalogSource;
use crate::utils::validation::is_remote_location;

pub use http::HttpCsvCatalog;
pub use local::LocalCsvCatalog;

/// Picks the catalog source for a configured location.
pub fn catalog_source_for(location: &str) -> Box<dyn CatalogSource> {
    if is_remote_location(location) {
        Box::new(HttpCsvCatalog::new(location.trim().to_string()))
    } else {
        Box::new(LocalCsvCatalog::new(location))
    }
}
