use crate::core::{Catalog, CatalogItem};
use crate::utils::error::{Result, SpacelyError};
use std::collections::BTreeMap;

const CATEGORY_COLUMN: &str = "category";
const PRICE_COLUMN: &str = "price";

/// Decodes a catalog CSV with a header row.
///
/// `category` and `price` are required (header names are matched
/// case-insensitively); every other named column becomes an attribute.
pub fn parse_catalog_csv(data: &[u8]) -> Result<Catalog> {
    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(data);

    let headers: Vec<String> = reader.headers()?.iter().map(|h| h.to_string()).collect();
    let category_index = column_index(&headers, CATEGORY_COLUMN)?;
    let price_index = column_index(&headers, PRICE_COLUMN)?;

    let mut items = Vec::new();
    for (row, record) in reader.records().enumerate() {
        let record = record?;
        let line = row + 2;

        let category = record.get(category_index).unwrap_or_default();
        if category.is_empty() {
            return Err(SpacelyError::CatalogError {
                message: format!("line {}: empty category", line),
            });
        }

        let raw_price = record.get(price_index).unwrap_or_default();
        let price: f64 = raw_price.parse().map_err(|_| SpacelyError::CatalogError {
            message: format!("line {}: invalid price '{}'", line, raw_price),
        })?;
        if !price.is_finite() || price < 0.0 {
            return Err(SpacelyError::CatalogError {
                message: format!("line {}: price must be a non-negative number", line),
            });
        }

        let attributes: BTreeMap<String, String> = headers
            .iter()
            .enumerate()
            .filter(|(index, name)| {
                *index != category_index && *index != price_index && !name.is_empty()
            })
            .filter_map(|(index, name)| {
                record.get(index).map(|value| (name.clone(), value.to_string()))
            })
            .collect();

        items.push(CatalogItem {
            category: category.to_string(),
            price,
            attributes,
        });
    }

    if items.is_empty() {
        tracing::warn!("Catalog contains no items");
    }

    Ok(Catalog::new(items))
}

fn column_index(headers: &[String], name: &str) -> Result<usize> {
    headers
        .iter()
        .position(|header| header.eq_ignore_ascii_case(name))
        .ok_or_else(|| SpacelyError::CatalogError {
            message: format!("missing required column '{}'", name),
        })
}
