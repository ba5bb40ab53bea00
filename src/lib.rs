pub mod adapters;
pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use adapters::{catalog_source_for, HttpCsvCatalog, LocalCsvCatalog};
pub use app::{Currency, Recommendation, Recommender, TextReport};
pub use config::{Overrides, Settings};
pub use crate::core::{allocator::Allocator, parser::RequestParser};
pub use utils::error::{Result, SpacelyError};
