use crate::adapters::csv_catalog::parse_catalog_csv;
use crate::core::{Catalog, CatalogSource};
use crate::utils::error::Result;
use async_trait::async_trait;
use std::path::PathBuf;

#[derive(Debug, Clone)]
pub struct LocalCsvCatalog {
    path: PathBuf,
}

impl LocalCsvCatalog {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl CatalogSource for LocalCsvCatalog {
    fn describe(&self) -> String {
        self.path.display().to_string()
    }

    async fn load(&self) -> Result<Catalog> {
        tracing::debug!("Reading catalog file: {}", self.path.display());
        let data = tokio::fs::read(&self.path).await?;
        parse_catalog_csv(&data)
    }
}
