use crate::core::tokenizer::{NumberToken, NumberTokenizer};
use crate::domain::model::{CategoryRequest, ParsedRequest};
use crate::utils::error::{Result, SpacelyError};
use regex::Regex;

struct CategoryMatcher {
    category: String,
    pattern: Regex,
}

/// Extracts a budget and category/quantity requests from free text.
///
/// The largest number in the text is the budget. Every whole-word mention of
/// a known category then claims the nearest number not yet claimed as its
/// quantity, or defaults to 1. Categories are visited in the order they were
/// given, mentions left to right.
pub struct RequestParser {
    tokenizer: NumberTokenizer,
    matchers: Vec<CategoryMatcher>,
}

impl RequestParser {
    pub fn new(known_categories: &[String], group_separator: char) -> Result<Self> {
        let mut matchers: Vec<CategoryMatcher> = Vec::new();
        for category in known_categories {
            let category = category.trim().to_lowercase();
            if category.is_empty() || matchers.iter().any(|m| m.category == category) {
                continue;
            }
            let pattern = Regex::new(&format!(r"\b{}\b", regex::escape(&category)))?;
            matchers.push(CategoryMatcher { category, pattern });
        }

        tracing::debug!("Request parser ready with {} categories", matchers.len());

        Ok(Self {
            tokenizer: NumberTokenizer::new(group_separator),
            matchers,
        })
    }

    pub fn categories(&self) -> impl Iterator<Item = &str> {
        self.matchers.iter().map(|m| m.category.as_str())
    }

    pub fn parse(&self, text: &str) -> Result<ParsedRequest> {
        let lowered = text.to_lowercase();
        let tokens = self.tokenizer.tokenize(&lowered);

        let (budget_index, budget) = select_budget(&tokens).ok_or(SpacelyError::BudgetNotFound)?;
        tracing::debug!(
            "Found {} numbers, budget {} at offset {}",
            tokens.len(),
            budget.value,
            budget.start
        );

        let mut claimed = vec![false; tokens.len()];
        claimed[budget_index] = true;

        let mut requests = Vec::new();
        for matcher in &self.matchers {
            for mention in matcher.pattern.find_iter(&lowered) {
                let position = lowered[..mention.start()].chars().count();

                let quantity = match nearest_unclaimed(&tokens, &claimed, position) {
                    Some(index) => {
                        claimed[index] = true;
                        tokens[index].value.max(1)
                    }
                    None => 1,
                };

                tracing::debug!(
                    "Category '{}' at offset {} requests {}",
                    matcher.category,
                    position,
                    quantity
                );
                requests.push(CategoryRequest::new(matcher.category.clone(), quantity));
            }
        }

        Ok(ParsedRequest {
            budget: budget.value,
            requests,
        })
    }
}

/// Parses `text` against `known_categories` using `.` as the grouping separator.
pub fn parse_request(text: &str, known_categories: &[String]) -> Result<ParsedRequest> {
    RequestParser::new(known_categories, '.')?.parse(text)
}

/// The first token holding the largest value.
fn select_budget(tokens: &[NumberToken]) -> Option<(usize, NumberToken)> {
    tokens
        .iter()
        .copied()
        .enumerate()
        .reduce(|best, candidate| {
            if candidate.1.value > best.1.value {
                candidate
            } else {
                best
            }
        })
}

/// Earliest unclaimed token at minimum distance from `position`.
fn nearest_unclaimed(tokens: &[NumberToken], claimed: &[bool], position: usize) -> Option<usize> {
    let mut nearest: Option<(usize, usize)> = None;
    for (index, token) in tokens.iter().enumerate() {
        if claimed[index] {
            continue;
        }
        let distance = token.distance_to(position);
        if nearest.map_or(true, |(_, best)| distance < best) {
            nearest = Some((index, distance));
        }
    }
    nearest.map(|(index, _)| index)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn categories(names: &[&str]) -> Vec<String> {
        names.iter().map(|n| n.to_string()).collect()
    }

    fn parse(text: &str, names: &[&str]) -> Result<ParsedRequest> {
        parse_request(text, &categories(names))
    }

    #[test]
    fn test_budget_is_largest_number_anywhere() {
        let front = parse("5000000 for chair 2", &["chair"]).unwrap();
        let back = parse("chair 2 with 5000000", &["chair"]).unwrap();
        assert_eq!(front.budget, 5_000_000);
        assert_eq!(back.budget, 5_000_000);
        assert_eq!(front.requests, vec![CategoryRequest::new("chair", 2)]);
        assert_eq!(back.requests, vec![CategoryRequest::new("chair", 2)]);
    }

    #[test]
    fn test_grouped_budget() {
        let parsed = parse("Budget Rp 5.000.000, bed 2", &["bed"]).unwrap();
        assert_eq!(parsed.budget, 5_000_000);
        assert_eq!(parsed.requests, vec![CategoryRequest::new("bed", 2)]);
    }

    #[test]
    fn test_missing_budget_is_hard_failure() {
        let err = parse("a chair and a table", &["chair", "table"]).unwrap_err();
        assert!(matches!(err, SpacelyError::BudgetNotFound));
    }

    #[test]
    fn test_nearest_number_association() {
        let parsed = parse("chair 2 table 5 budget 900", &["chair", "table"]).unwrap();
        assert_eq!(parsed.budget, 900);
        assert_eq!(
            parsed.requests,
            vec![
                CategoryRequest::new("chair", 2),
                CategoryRequest::new("table", 5),
            ]
        );
    }

    #[test]
    fn test_budget_is_never_a_quantity() {
        let parsed = parse("chair 1000", &["chair"]).unwrap();
        assert_eq!(parsed.budget, 1000);
        assert_eq!(parsed.requests, vec![CategoryRequest::new("chair", 1)]);
    }

    #[test]
    fn test_claimed_token_is_not_reused() {
        // Both mentions are closest to "3"; the second gets the leftover "4".
        let parsed = parse("chair 3 chair 500 4", &["chair"]).unwrap();
        assert_eq!(
            parsed.requests,
            vec![
                CategoryRequest::new("chair", 3),
                CategoryRequest::new("chair", 4),
            ]
        );
    }

    #[test]
    fn test_earlier_category_steals_token() {
        // "table" is visited first and takes "2", even though "chair" sits next to it.
        let parsed = parse("table, chair 2 with 700", &["table", "chair"]).unwrap();
        assert_eq!(
            parsed.requests,
            vec![
                CategoryRequest::new("table", 2),
                CategoryRequest::new("chair", 1),
            ]
        );
    }

    #[test]
    fn test_whole_word_matching_only() {
        let parsed = parse("armchairs and a bed 2 for 800", &["chair", "bed"]).unwrap();
        assert_eq!(parsed.requests, vec![CategoryRequest::new("bed", 2)]);
    }

    #[test]
    fn test_case_insensitive_mentions() {
        let parsed = parse("SOFA 2, Budget 3000", &["Sofa"]).unwrap();
        assert_eq!(parsed.requests, vec![CategoryRequest::new("sofa", 2)]);
    }

    #[test]
    fn test_no_categories_means_no_requests() {
        let parsed = parse("I have 2.500.000 to spend", &["chair"]).unwrap();
        assert_eq!(parsed.budget, 2_500_000);
        assert!(parsed.requests.is_empty());
    }

    #[test]
    fn test_zero_quantity_becomes_one() {
        let parsed = parse("desk 0 budget 100", &["desk"]).unwrap();
        assert_eq!(parsed.requests, vec![CategoryRequest::new("desk", 1)]);
    }

    #[test]
    fn test_tie_on_budget_keeps_first() {
        // The first 500 is the budget; the second one is free to be a quantity.
        let parsed = parse("500 chair 500", &["chair"]).unwrap();
        assert_eq!(parsed.budget, 500);
        assert_eq!(parsed.requests, vec![CategoryRequest::new("chair", 500)]);
    }

    #[test]
    fn test_categories_are_deduplicated() {
        let parser = RequestParser::new(&categories(&["Chair", "chair", " ", "bed"]), '.').unwrap();
        assert_eq!(parser.categories().collect::<Vec<_>>(), vec!["chair", "bed"]);
    }
}
