use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// A single priced catalog entry. Prices are in the catalog's canonical unit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogItem {
    pub category: String,
    pub price: f64,
    /// Descriptive columns (material, color, ...) carried through untouched.
    #[serde(default)]
    pub attributes: BTreeMap<String, String>,
}

impl CatalogItem {
    pub fn new(category: impl Into<String>, price: f64) -> Self {
        Self {
            category: category.into(),
            price,
            attributes: BTreeMap::new(),
        }
    }

    pub fn with_attribute(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.insert(key.into(), value.into());
        self
    }

    pub fn attribute(&self, key: &str) -> Option<&str> {
        self.attributes.get(key).map(String::as_str)
    }

    pub fn is_in_category(&self, category: &str) -> bool {
        self.category.to_lowercase() == category.to_lowercase()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Catalog {
    items: Vec<CatalogItem>,
}

impl Catalog {
    pub fn new(items: Vec<CatalogItem>) -> Self {
        Self { items }
    }

    pub fn items(&self) -> &[CatalogItem] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Distinct lower-cased category names in order of first appearance.
    pub fn known_categories(&self) -> Vec<String> {
        let mut categories: Vec<String> = Vec::new();
        for item in &self.items {
            let category = item.category.to_lowercase();
            if !categories.contains(&category) {
                categories.push(category);
            }
        }
        categories
    }

    /// Items of `category` (case-insensitive) in catalog order.
    pub fn items_in(&self, category: &str) -> Vec<&CatalogItem> {
        self.items
            .iter()
            .filter(|item| item.is_in_category(category))
            .collect()
    }

    /// Up to `limit` items priced at or below `max_price`, cheapest first.
    pub fn cheapest_within(&self, max_price: f64, limit: usize) -> Vec<&CatalogItem> {
        let mut affordable: Vec<&CatalogItem> = self
            .items
            .iter()
            .filter(|item| item.price <= max_price)
            .collect();
        affordable.sort_by(|a, b| a.price.total_cmp(&b.price));
        affordable.truncate(limit);
        affordable
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryRequest {
    pub category: String,
    pub quantity: u64,
}

impl CategoryRequest {
    pub fn new(category: impl Into<String>, quantity: u64) -> Self {
        Self {
            category: category.into(),
            quantity,
        }
    }
}

/// Output of a successful parse. A missing budget is reported as an error instead.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParsedRequest {
    pub budget: u64,
    pub requests: Vec<CategoryRequest>,
}

/// Advisory outcome of allocation. Never an error; always surfaced to the requester.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Diagnostic {
    NoItemsForCategory { category: String },
    InsufficientBudget { category: String, requested: u64 },
    PartialFulfilment {
        category: String,
        selected: u64,
        requested: u64,
    },
    Fulfilled { category: String, quantity: u64 },
    NothingAffordable,
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Diagnostic::NoItemsForCategory { category } => {
                write!(f, "No items available for category '{}'.", category)
            }
            Diagnostic::InsufficientBudget {
                category,
                requested,
            } => write!(
                f,
                "Insufficient budget for category '{}': 0 of {} items selected.",
                category, requested
            ),
            Diagnostic::PartialFulfilment {
                category,
                selected,
                requested,
            } => write!(
                f,
                "Budget sufficient for only {} of {} items in category '{}'.",
                selected, requested, category
            ),
            Diagnostic::Fulfilled { category, quantity } => {
                write!(f, "Selected {} items for category '{}'.", quantity, category)
            }
            Diagnostic::NothingAffordable => {
                write!(f, "Budget is insufficient to purchase any furniture.")
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AllocationResult {
    pub selected: Vec<CatalogItem>,
    pub total_cost: f64,
    pub messages: Vec<Diagnostic>,
}
