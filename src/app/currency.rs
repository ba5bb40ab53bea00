use crate::core::ConfigProvider;
use serde::{Deserialize, Serialize};

/// Converts between the currency a user types and the catalog's price unit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Currency {
    symbol: String,
    /// Display units per catalog unit.
    rate: f64,
    separator: char,
}

impl Currency {
    pub fn new(symbol: impl Into<String>, rate: f64, separator: char) -> Self {
        Self {
            symbol: symbol.into(),
            rate,
            separator,
        }
    }

    pub fn from_config<C: ConfigProvider + ?Sized>(config: &C) -> Self {
        Self::new(
            config.currency_symbol(),
            config.exchange_rate(),
            config.thousands_separator(),
        )
    }

    pub fn to_catalog_unit(&self, display_amount: f64) -> f64 {
        display_amount / self.rate
    }

    pub fn to_display_unit(&self, catalog_amount: f64) -> f64 {
        catalog_amount * self.rate
    }

    /// Whole display units with grouped thousands, e.g. `Rp5.000.000`.
    pub fn format(&self, display_amount: f64) -> String {
        let whole = display_amount.round();
        let sign = if whole < 0.0 { "-" } else { "" };
        let digits = format!("{:.0}", whole.abs());

        let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
        for (index, digit) in digits.chars().enumerate() {
            if index > 0 && (digits.len() - index) % 3 == 0 {
                grouped.push(self.separator);
            }
            grouped.push(digit);
        }

        format!("{}{}{}", self.symbol, sign, grouped)
    }

    pub fn format_catalog_amount(&self, catalog_amount: f64) -> String {
        self.format(self.to_display_unit(catalog_amount))
    }
}

impl Default for Currency {
    fn default() -> Self {
        Self::new("Rp", 16000.0, '.')
    }
}
