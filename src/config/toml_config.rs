use crate::utils::error::{Result, SpacelyError};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;

pub const DEFAULT_CATALOG_SOURCE: &str = "data/furniture.csv";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct TomlConfig {
    pub catalog: CatalogConfig,
    pub currency: CurrencyConfig,
    pub parser: ParserConfig,
    pub allocation: AllocationConfig,
    pub report: ReportConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CatalogConfig {
    /// Filesystem path or http(s) URL of the catalog CSV.
    pub source: String,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            source: DEFAULT_CATALOG_SOURCE.to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CurrencyConfig {
    pub symbol: String,
    /// Display units per catalog price unit.
    pub rate: f64,
    pub thousands_separator: char,
}

impl Default for CurrencyConfig {
    fn default() -> Self {
        Self {
            symbol: "Rp".to_string(),
            rate: 16000.0,
            thousands_separator: '.',
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ParserConfig {
    pub group_separator: char,
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self {
            group_separator: '.',
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AllocationConfig {
    pub default_categories: Vec<String>,
}

impl Default for AllocationConfig {
    fn default() -> Self {
        Self {
            default_categories: crate::core::allocator::DEFAULT_CATEGORIES
                .iter()
                .map(|c| c.to_string())
                .collect(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ReportConfig {
    pub suggestion_limit: usize,
    pub display_fields: Vec<String>,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            suggestion_limit: 3,
            display_fields: vec!["material".to_string(), "color".to_string()],
        }
    }
}

impl TomlConfig {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(SpacelyError::IoError)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| SpacelyError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// Replaces `${VAR}` with the environment value; unknown variables are left as-is.
    fn substitute_env_vars(content: &str) -> Result<String> {
        let re = Regex::new(r"\$\{([^}]+)\}")?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }
}
