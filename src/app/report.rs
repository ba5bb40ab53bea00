use crate::app::currency::Currency;
use crate::app::recommender::{BudgetStatus, Recommendation};
use crate::core::CatalogItem;
use crate::utils::error::Result;
use std::fmt::Write;

fn icon_for(category: &str) -> &'static str {
    match category.to_lowercase().as_str() {
        "table" => "🪵",
        "chair" => "💺",
        "sofa" => "🛋️",
        "desk" => "🗄️",
        "bed" => "🛏️",
        _ => "🛒",
    }
}

fn capitalize(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect(),
        None => String::new(),
    }
}

/// Plain-text rendering for terminals.
#[derive(Debug, Clone)]
pub struct TextReport {
    currency: Currency,
    display_fields: Vec<String>,
}

impl TextReport {
    pub fn new(currency: Currency, display_fields: Vec<String>) -> Self {
        Self {
            currency,
            display_fields,
        }
    }

    pub fn render(&self, recommendation: &Recommendation) -> String {
        let mut out = String::new();
        let allocation = &recommendation.allocation;

        for message in &allocation.messages {
            let _ = writeln!(out, "ℹ️  {}", message);
        }

        if allocation.selected.is_empty() {
            let _ = writeln!(out, "⚠️  No furniture could be recommended.");
            return out;
        }

        for item in &allocation.selected {
            self.render_item(&mut out, item);
        }

        let _ = writeln!(
            out,
            "✅ Total cost: {}",
            self.currency.format(recommendation.total_cost_display)
        );

        match recommendation.status {
            BudgetStatus::Remaining => {
                let _ = writeln!(
                    out,
                    "ℹ️  Remaining budget: {}",
                    self.currency.format(recommendation.remaining_display)
                );
                if !recommendation.suggestions.is_empty() {
                    let _ = writeln!(out, "💡 With the remaining budget you could also buy:");
                    for item in &recommendation.suggestions {
                        let _ = writeln!(
                            out,
                            "   - {} {} — {}",
                            icon_for(&item.category),
                            capitalize(&item.category),
                            self.currency.format_catalog_amount(item.price)
                        );
                    }
                }
            }
            BudgetStatus::Exact => {
                let _ = writeln!(out, "ℹ️  Your budget is used exactly.");
            }
            BudgetStatus::Exceeded => {
                let _ = writeln!(out, "⚠️  Budget is insufficient.");
            }
        }

        out
    }

    fn render_item(&self, out: &mut String, item: &CatalogItem) {
        let _ = writeln!(out, "{} {}", icon_for(&item.category), capitalize(&item.category));
        let _ = writeln!(
            out,
            "   Price: {}",
            self.currency.format_catalog_amount(item.price)
        );
        for field in &self.display_fields {
            if let Some(value) = item.attribute(field) {
                let _ = writeln!(out, "   {}: {}", capitalize(field), value);
            }
        }
    }
}

pub fn render_json(recommendation: &Recommendation) -> Result<String> {
    Ok(serde_json::to_string_pretty(recommendation)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{AllocationResult, CategoryRequest, Diagnostic};

    fn recommendation() -> Recommendation {
        Recommendation {
            budget: 1_000_000,
            budget_catalog_unit: 62.5,
            requests: vec![CategoryRequest::new("chair", 1)],
            allocation: AllocationResult {
                selected: vec![CatalogItem::new("chair", 35.0)
                    .with_attribute("material", "Wood")
                    .with_attribute("color", "Brown")],
                total_cost: 35.0,
                messages: vec![Diagnostic::Fulfilled {
                    category: "chair".to_string(),
                    quantity: 1,
                }],
            },
            total_cost_display: 560_000.0,
            remaining_display: 440_000.0,
            status: BudgetStatus::Remaining,
            suggestions: vec![CatalogItem::new("desk", 20.0)],
        }
    }

    fn report() -> TextReport {
        TextReport::new(
            Currency::default(),
            vec!["material".to_string(), "color".to_string()],
        )
    }

    #[test]
    fn test_text_report_lists_items_and_totals() {
        let text = report().render(&recommendation());

        assert!(text.contains("Selected 1 items for category 'chair'."));
        assert!(text.contains("💺 Chair"));
        assert!(text.contains("Price: Rp560.000"));
        assert!(text.contains("Material: Wood"));
        assert!(text.contains("Color: Brown"));
        assert!(text.contains("Total cost: Rp560.000"));
        assert!(text.contains("Remaining budget: Rp440.000"));
        assert!(text.contains("🗄️ Desk — Rp320.000"));
    }

    #[test]
    fn test_text_report_without_selection() {
        let mut empty = recommendation();
        empty.allocation.selected.clear();
        empty.allocation.messages = vec![Diagnostic::NothingAffordable];

        let text = report().render(&empty);
        assert!(text.contains("Budget is insufficient to purchase any furniture."));
        assert!(text.contains("No furniture could be recommended."));
        assert!(!text.contains("Total cost"));
    }

    #[test]
    fn test_json_report() {
        let json: serde_json::Value =
            serde_json::from_str(&render_json(&recommendation()).unwrap()).unwrap();
        assert_eq!(json["budget"], 1_000_000);
        assert_eq!(json["status"], "remaining");
        assert_eq!(json["allocation"]["messages"][0]["kind"], "fulfilled");
        assert_eq!(json["allocation"]["selected"][0]["attributes"]["material"], "Wood");
    }

    #[test]
    fn test_capitalize() {
        assert_eq!(capitalize("SOFA"), "Sofa");
        assert_eq!(capitalize(""), "");
    }
}
