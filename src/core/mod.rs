pub mod allocator;
pub mod parser;
pub mod tokenizer;

pub use crate::domain::model::{
    AllocationResult, Catalog, CatalogItem, CategoryRequest, Diagnostic, ParsedRequest,
};
pub use crate::domain::ports::{CatalogSource, ConfigProvider};
pub use crate::utils::error::Result;
