use crate::adapters::csv_catalog::parse_catalog_csv;
use crate::core::{Catalog, CatalogSource};
use crate::utils::error::Result;
use async_trait::async_trait;
use reqwest::Client;

pub struct HttpCsvCatalog {
    url: String,
    client: Client,
}

impl HttpCsvCatalog {
    pub fn new(url: String) -> Self {
        Self {
            url,
            client: Client::new(),
        }
    }
}

#[async_trait]
impl CatalogSource for HttpCsvCatalog {
    fn describe(&self) -> String {
        self.url.clone()
    }

    async fn load(&self) -> Result<Catalog> {
        tracing::debug!("Downloading catalog from: {}", self.url);
        let response = self.client.get(&self.url).send().await?;

        tracing::debug!("Catalog response status: {}", response.status());
        let body = response.error_for_status()?.bytes().await?;

        parse_catalog_csv(&body)
    }
}
