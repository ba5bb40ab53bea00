pub mod settings;
pub mod toml_config;

#[cfg(feature = "cli")]
use clap::Parser;
#[cfg(feature = "cli")]
use serde::{Deserialize, Serialize};

pub use settings::{Overrides, Settings};

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "spacely")]
#[command(about = "Recommend furniture that fits a budget written in plain text")]
pub struct CliConfig {
    /// Request text, e.g. "Budget Rp 5.000.000, bed 2, chair". Reads stdin lines when omitted.
    pub prompt: Option<String>,

    #[arg(long, help = "Catalog CSV path or http(s) URL")]
    pub catalog: Option<String>,

    #[arg(short, long, help = "Path to a TOML configuration file")]
    pub config: Option<String>,

    #[arg(long, help = "Display currency units per catalog price unit")]
    pub exchange_rate: Option<f64>,

    #[arg(long)]
    pub currency_symbol: Option<String>,

    #[arg(long, help = "Maximum number of leftover-budget suggestions")]
    pub suggestions: Option<usize>,

    #[arg(long, help = "Print recommendations as JSON")]
    pub json: bool,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Emit logs as JSON lines")]
    pub log_json: bool,
}

#[cfg(feature = "cli")]
impl CliConfig {
    pub fn overrides(&self) -> Overrides {
        Overrides {
            catalog_source: self.catalog.clone(),
            exchange_rate: self.exchange_rate,
            currency_symbol: self.currency_symbol.clone(),
            suggestion_limit: self.suggestions,
        }
    }

    pub fn settings(&self) -> crate::utils::error::Result<Settings> {
        let file_config = match &self.config {
            Some(path) => toml_config::TomlConfig::from_file(path)?,
            None => toml_config::TomlConfig::default(),
        };
        Ok(Settings::resolve(file_config, self.overrides()))
    }
}
