use crate::domain::model::{AllocationResult, Catalog, CatalogItem, CategoryRequest, Diagnostic};

pub const DEFAULT_CATEGORIES: [&str; 5] = ["table", "sofa", "chair", "desk", "bed"];

/// Greedy first-fit selection of catalog items under a budget.
///
/// Spending is cumulative across the whole call and never exceeds the
/// budget. Shortfalls are reported as [`Diagnostic`]s rather than errors.
#[derive(Debug, Clone)]
pub struct Allocator {
    default_categories: Vec<String>,
}

impl Default for Allocator {
    fn default() -> Self {
        Self::new(DEFAULT_CATEGORIES.iter().map(|c| c.to_string()).collect())
    }
}

impl Allocator {
    pub fn new(default_categories: Vec<String>) -> Self {
        Self { default_categories }
    }

    pub fn allocate(
        &self,
        catalog: &Catalog,
        budget: f64,
        requests: &[CategoryRequest],
    ) -> AllocationResult {
        let mut ledger = Ledger::new(budget);

        if requests.is_empty() {
            self.allocate_defaults(catalog, &mut ledger);
        } else {
            for request in requests {
                allocate_request(catalog, request, &mut ledger);
            }
        }

        tracing::debug!(
            "Allocated {} items for {:.2} of {:.2}",
            ledger.selected.len(),
            ledger.total,
            budget
        );

        ledger.finish()
    }

    /// One cheapest item per default category, each gated on its own.
    fn allocate_defaults(&self, catalog: &Catalog, ledger: &mut Ledger) {
        for category in &self.default_categories {
            let cheapest = catalog
                .items_in(category)
                .into_iter()
                .min_by(|a, b| a.price.total_cmp(&b.price));

            match cheapest {
                Some(item) => {
                    if !ledger.try_select(item) {
                        tracing::debug!("Skipping '{}': {:.2} does not fit", category, item.price);
                    }
                }
                None => tracing::debug!("Catalog has no '{}' items", category),
            }
        }

        if ledger.selected.is_empty() {
            ledger.messages.push(Diagnostic::NothingAffordable);
        }
    }
}

fn allocate_request(catalog: &Catalog, request: &CategoryRequest, ledger: &mut Ledger) {
    let mut items = catalog.items_in(&request.category);
    if items.is_empty() {
        ledger.messages.push(Diagnostic::NoItemsForCategory {
            category: request.category.clone(),
        });
        return;
    }
    // Stable, so equal prices keep catalog order.
    items.sort_by(|a, b| a.price.total_cmp(&b.price));

    let mut picked = 0u64;
    for item in items {
        if picked >= request.quantity || !ledger.try_select(item) {
            break;
        }
        picked += 1;
    }

    let diagnostic = if picked == 0 {
        Diagnostic::InsufficientBudget {
            category: request.category.clone(),
            requested: request.quantity,
        }
    } else if picked < request.quantity {
        Diagnostic::PartialFulfilment {
            category: request.category.clone(),
            selected: picked,
            requested: request.quantity,
        }
    } else {
        Diagnostic::Fulfilled {
            category: request.category.clone(),
            quantity: request.quantity,
        }
    };
    ledger.messages.push(diagnostic);
}

struct Ledger {
    budget: f64,
    total: f64,
    selected: Vec<CatalogItem>,
    messages: Vec<Diagnostic>,
}

impl Ledger {
    fn new(budget: f64) -> Self {
        Self {
            budget,
            total: 0.0,
            selected: Vec::new(),
            messages: Vec::new(),
        }
    }

    fn try_select(&mut self, item: &CatalogItem) -> bool {
        if self.total + item.price <= self.budget {
            self.total += item.price;
            self.selected.push(item.clone());
            true
        } else {
            false
        }
    }

    fn finish(self) -> AllocationResult {
        AllocationResult {
            selected: self.selected,
            total_cost: self.total,
            messages: self.messages,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn prices(result: &AllocationResult) -> Vec<f64> {
        result.selected.iter().map(|item| item.price).collect()
    }

    fn default_mode_catalog() -> Catalog {
        Catalog::new(vec![
            CatalogItem::new("table", 120.0),
            CatalogItem::new("table", 100.0),
            CatalogItem::new("sofa", 50.0),
            CatalogItem::new("chair", 9999.0),
            CatalogItem::new("desk", 30.0),
            CatalogItem::new("bed", 40.0),
        ])
    }

    #[test]
    fn test_stops_at_first_unaffordable_item() {
        let catalog = Catalog::new(vec![
            CatalogItem::new("chair", 30.0),
            CatalogItem::new("chair", 10.0),
            CatalogItem::new("chair", 20.0),
        ]);
        let result = Allocator::default().allocate(
            &catalog,
            25.0,
            &[CategoryRequest::new("chair", 3)],
        );

        assert_eq!(prices(&result), vec![10.0]);
        assert_eq!(result.total_cost, 10.0);
        assert_eq!(
            result.messages,
            vec![Diagnostic::PartialFulfilment {
                category: "chair".to_string(),
                selected: 1,
                requested: 3,
            }]
        );
    }

    #[test]
    fn test_default_mode_skips_without_aborting() {
        let result = Allocator::default().allocate(&default_mode_catalog(), 230.0, &[]);

        let categories: Vec<&str> = result.selected.iter().map(|i| i.category.as_str()).collect();
        assert_eq!(categories, vec!["table", "sofa", "desk", "bed"]);
        assert_eq!(prices(&result), vec![100.0, 50.0, 30.0, 40.0]);
        assert_eq!(result.total_cost, 220.0);
        assert!(result.messages.is_empty());
    }

    #[test]
    fn test_default_mode_nothing_affordable() {
        let result = Allocator::default().allocate(&default_mode_catalog(), 10.0, &[]);
        assert!(result.selected.is_empty());
        assert_eq!(result.total_cost, 0.0);
        assert_eq!(result.messages, vec![Diagnostic::NothingAffordable]);
    }

    #[test]
    fn test_default_mode_cheapest_tie_keeps_catalog_order() {
        let catalog = Catalog::new(vec![
            CatalogItem::new("desk", 30.0).with_attribute("color", "oak"),
            CatalogItem::new("desk", 30.0).with_attribute("color", "white"),
        ]);
        let result = Allocator::default().allocate(&catalog, 100.0, &[]);
        assert_eq!(result.selected.len(), 1);
        assert_eq!(result.selected[0].attribute("color"), Some("oak"));
    }

    #[test]
    fn test_custom_default_categories() {
        let allocator = Allocator::new(vec!["bed".to_string(), "desk".to_string()]);
        let result = allocator.allocate(&default_mode_catalog(), 1000.0, &[]);
        assert_eq!(prices(&result), vec![40.0, 30.0]);
    }

    #[test]
    fn test_unknown_category_reports_and_continues() {
        let result = Allocator::default().allocate(
            &default_mode_catalog(),
            500.0,
            &[
                CategoryRequest::new("lamp", 1),
                CategoryRequest::new("sofa", 1),
            ],
        );
        assert_eq!(prices(&result), vec![50.0]);
        assert_eq!(
            result.messages,
            vec![
                Diagnostic::NoItemsForCategory {
                    category: "lamp".to_string()
                },
                Diagnostic::Fulfilled {
                    category: "sofa".to_string(),
                    quantity: 1
                },
            ]
        );
    }

    #[test]
    fn test_quantity_caps_selection() {
        let catalog = Catalog::new(vec![
            CatalogItem::new("Chair", 5.0),
            CatalogItem::new("chair", 6.0),
            CatalogItem::new("chair", 7.0),
        ]);
        let result =
            Allocator::default().allocate(&catalog, 100.0, &[CategoryRequest::new("chair", 2)]);
        assert_eq!(prices(&result), vec![5.0, 6.0]);
        assert_eq!(
            result.messages,
            vec![Diagnostic::Fulfilled {
                category: "chair".to_string(),
                quantity: 2
            }]
        );
    }

    #[test]
    fn test_earlier_requests_starve_later_ones() {
        let catalog = Catalog::new(vec![
            CatalogItem::new("sofa", 80.0),
            CatalogItem::new("bed", 50.0),
        ]);
        let result = Allocator::default().allocate(
            &catalog,
            100.0,
            &[CategoryRequest::new("sofa", 1), CategoryRequest::new("bed", 1)],
        );
        assert_eq!(prices(&result), vec![80.0]);
        assert_eq!(
            result.messages[1],
            Diagnostic::InsufficientBudget {
                category: "bed".to_string(),
                requested: 1
            }
        );

        let reversed = Allocator::default().allocate(
            &catalog,
            100.0,
            &[CategoryRequest::new("bed", 1), CategoryRequest::new("sofa", 1)],
        );
        assert_eq!(prices(&reversed), vec![50.0]);
    }

    #[test]
    fn test_split_requests_are_not_merged() {
        let catalog = Catalog::new(vec![
            CatalogItem::new("chair", 10.0),
            CatalogItem::new("chair", 20.0),
        ]);
        let result = Allocator::default().allocate(
            &catalog,
            100.0,
            &[CategoryRequest::new("chair", 1), CategoryRequest::new("chair", 1)],
        );
        // Each request walks the category from the cheapest item again.
        assert_eq!(prices(&result), vec![10.0, 10.0]);
    }

    #[test]
    fn test_never_overspends_and_total_matches() {
        let catalog = Catalog::new(vec![
            CatalogItem::new("table", 33.3),
            CatalogItem::new("table", 12.7),
            CatalogItem::new("chair", 8.1),
            CatalogItem::new("chair", 19.9),
            CatalogItem::new("bed", 45.5),
        ]);
        let requests = [
            CategoryRequest::new("chair", 4),
            CategoryRequest::new("table", 2),
            CategoryRequest::new("bed", 1),
        ];
        for budget in [0.0, 5.0, 20.0, 41.0, 60.0, 74.0, 119.5, 1000.0] {
            let result = Allocator::default().allocate(&catalog, budget, &requests);
            let sum: f64 = result.selected.iter().map(|i| i.price).sum();
            assert!(result.total_cost <= budget, "overspent {}", budget);
            assert_eq!(result.total_cost, sum);
        }
    }

    #[test]
    fn test_allocation_is_repeatable() {
        let catalog = default_mode_catalog();
        let allocator = Allocator::default();
        let requests = [CategoryRequest::new("table", 2), CategoryRequest::new("bed", 1)];
        let first = allocator.allocate(&catalog, 250.0, &requests);
        let second = allocator.allocate(&catalog, 250.0, &requests);
        assert_eq!(first, second);
    }
}
