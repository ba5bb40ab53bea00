use crate::config::toml_config::TomlConfig;
use crate::core::ConfigProvider;
use crate::utils::error::{Result, SpacelyError};
use crate::utils::validation::{self, Validate};
use serde::{Deserialize, Serialize};

/// Command line values that take precedence over the TOML file.
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub catalog_source: Option<String>,
    pub exchange_rate: Option<f64>,
    pub currency_symbol: Option<String>,
    pub suggestion_limit: Option<usize>,
}

/// Fully resolved runtime settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    pub catalog_source: String,
    pub exchange_rate: f64,
    pub currency_symbol: String,
    pub thousands_separator: char,
    pub group_separator: char,
    pub default_categories: Vec<String>,
    pub suggestion_limit: usize,
    pub display_fields: Vec<String>,
}

impl Default for Settings {
    fn default() -> Self {
        Self::resolve(TomlConfig::default(), Overrides::default())
    }
}

impl Settings {
    pub fn resolve(config: TomlConfig, overrides: Overrides) -> Self {
        Self {
            catalog_source: overrides.catalog_source.unwrap_or(config.catalog.source),
            exchange_rate: overrides.exchange_rate.unwrap_or(config.currency.rate),
            currency_symbol: overrides.currency_symbol.unwrap_or(config.currency.symbol),
            thousands_separator: config.currency.thousands_separator,
            group_separator: config.parser.group_separator,
            default_categories: config.allocation.default_categories,
            suggestion_limit: overrides
                .suggestion_limit
                .unwrap_or(config.report.suggestion_limit),
            display_fields: config.report.display_fields,
        }
    }
}

impl ConfigProvider for Settings {
    fn catalog_source(&self) -> &str {
        &self.catalog_source
    }

    fn exchange_rate(&self) -> f64 {
        self.exchange_rate
    }

    fn currency_symbol(&self) -> &str {
        &self.currency_symbol
    }

    fn thousands_separator(&self) -> char {
        self.thousands_separator
    }

    fn group_separator(&self) -> char {
        self.group_separator
    }

    fn default_categories(&self) -> &[String] {
        &self.default_categories
    }

    fn suggestion_limit(&self) -> usize {
        self.suggestion_limit
    }

    fn display_fields(&self) -> &[String] {
        &self.display_fields
    }
}

impl Validate for Settings {
    fn validate(&self) -> Result<()> {
        if self.catalog_source.contains("${") {
            return Err(SpacelyError::ConfigValidationError {
                field: "catalog.source".to_string(),
                message: format!(
                    "unresolved environment variable in '{}'",
                    self.catalog_source
                ),
            });
        }
        validation::validate_catalog_location("catalog.source", &self.catalog_source)?;
        validation::validate_positive_amount("currency.rate", self.exchange_rate)?;
        validation::validate_non_empty_list(
            "allocation.default_categories",
            &self.default_categories,
        )?;

        if self.group_separator.is_alphanumeric() || self.group_separator.is_whitespace() {
            return Err(SpacelyError::InvalidConfigValueError {
                field: "parser.group_separator".to_string(),
                value: self.group_separator.to_string(),
                reason: "Separator must be a punctuation character".to_string(),
            });
        }

        Ok(())
    }
}
