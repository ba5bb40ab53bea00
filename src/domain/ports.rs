use crate::domain::model::Catalog;
use crate::utils::error::Result;
use async_trait::async_trait;

/// Where the furniture catalog comes from. Loaded once, then read-only.
#[async_trait]
pub trait CatalogSource: Send + Sync {
    fn describe(&self) -> String;
    async fn load(&self) -> Result<Catalog>;
}

pub trait ConfigProvider: Send + Sync {
    fn catalog_source(&self) -> &str;
    fn exchange_rate(&self) -> f64;
    fn currency_symbol(&self) -> &str;
    fn thousands_separator(&self) -> char;
    fn group_separator(&self) -> char;
    fn default_categories(&self) -> &[String];
    fn suggestion_limit(&self) -> usize;
    fn display_fields(&self) -> &[String];
}
