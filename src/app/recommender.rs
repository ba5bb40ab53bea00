use crate::app::currency::Currency;
use crate::core::allocator::Allocator;
use crate::core::parser::RequestParser;
use crate::core::{AllocationResult, Catalog, CatalogItem, CategoryRequest, ConfigProvider};
use crate::utils::error::{Result, SpacelyError};
use serde::Serialize;

const EXACT_TOLERANCE: f64 = 1e-9;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum BudgetStatus {
    Remaining,
    Exact,
    Exceeded,
}

/// Everything a front end needs to show for one request.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Recommendation {
    /// Budget as typed, in display currency.
    pub budget: u64,
    pub budget_catalog_unit: f64,
    pub requests: Vec<CategoryRequest>,
    pub allocation: AllocationResult,
    pub total_cost_display: f64,
    pub remaining_display: f64,
    pub status: BudgetStatus,
    /// Cheapest items that still fit the leftover budget.
    pub suggestions: Vec<CatalogItem>,
}

/// Parses a request, converts its budget into catalog units and allocates.
///
/// Holds only immutable state, so one instance can serve any number of
/// independent requests.
pub struct Recommender {
    catalog: Catalog,
    parser: RequestParser,
    allocator: Allocator,
    currency: Currency,
    suggestion_limit: usize,
}

impl Recommender {
    pub fn new<C: ConfigProvider + ?Sized>(catalog: Catalog, config: &C) -> Result<Self> {
        let parser = RequestParser::new(&catalog.known_categories(), config.group_separator())?;
        tracing::info!(
            "Catalog ready: {} items in {} categories",
            catalog.len(),
            parser.categories().count()
        );

        Ok(Self {
            catalog,
            parser,
            allocator: Allocator::new(config.default_categories().to_vec()),
            currency: Currency::from_config(config),
            suggestion_limit: config.suggestion_limit(),
        })
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn currency(&self) -> &Currency {
        &self.currency
    }

    pub fn recommend(&self, prompt: &str) -> Result<Recommendation> {
        if prompt.trim().is_empty() {
            return Err(SpacelyError::ValidationError {
                message: "The request cannot be empty; include a budget such as 'Budget 5.000.000'."
                    .to_string(),
            });
        }

        let parsed = self.parser.parse(prompt)?;
        let budget_catalog_unit = self.currency.to_catalog_unit(parsed.budget as f64);
        tracing::debug!(
            "Budget {} converts to {:.2} catalog units; {} category requests",
            parsed.budget,
            budget_catalog_unit,
            parsed.requests.len()
        );

        let allocation = self
            .allocator
            .allocate(&self.catalog, budget_catalog_unit, &parsed.requests);

        let remaining = budget_catalog_unit - allocation.total_cost;
        let status = if remaining.abs() <= EXACT_TOLERANCE {
            BudgetStatus::Exact
        } else if remaining > 0.0 {
            BudgetStatus::Remaining
        } else {
            BudgetStatus::Exceeded
        };

        let suggestions = match status {
            BudgetStatus::Remaining => self
                .catalog
                .cheapest_within(remaining, self.suggestion_limit)
                .into_iter()
                .cloned()
                .collect(),
            _ => Vec::new(),
        };

        tracing::info!(
            "Selected {} items, {} diagnostics, {} suggestions",
            allocation.selected.len(),
            allocation.messages.len(),
            suggestions.len()
        );

        Ok(Recommendation {
            budget: parsed.budget,
            budget_catalog_unit,
            total_cost_display: self.currency.to_display_unit(allocation.total_cost),
            remaining_display: self.currency.to_display_unit(remaining),
            requests: parsed.requests,
            allocation,
            status,
            suggestions,
        })
    }
}
