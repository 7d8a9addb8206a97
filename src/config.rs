use anyhow::{Context, Result};
use serde::Deserialize;
use std::{
    env, fs,
    path::{Path, PathBuf},
};

use crate::format::{CurrencyFormat, Grouping};
use crate::quote::QuoteParameters;

pub const CONFIG_ENV: &str = "EASYLOANS_CONFIG";

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct InitialQuote {
    pub principal: f64,
    pub term_years: u32,
    pub rate_percent: f64,
}

impl Default for InitialQuote {
    fn default() -> Self {
        let q = QuoteParameters::default();
        Self {
            principal: q.principal() as f64,
            term_years: q.term_years(),
            rate_percent: q.annual_rate_percent(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub currency_symbol: String,
    pub grouping: Grouping,
    pub initial_quote: InitialQuote,
    pub log_file: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        let currency = CurrencyFormat::default();
        Self {
            currency_symbol: currency.symbol,
            grouping: currency.grouping,
            initial_quote: InitialQuote::default(),
            log_file: PathBuf::from("easyloans.log"),
        }
    }
}

impl Config {
    /// Reads the file named by `EASYLOANS_CONFIG`, or returns defaults when unset.
    pub fn load() -> Result<Self> {
        match env::var_os(CONFIG_ENV) {
            Some(path) => Self::from_file(Path::new(&path)),
            None => Ok(Self::default()),
        }
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let raw = fs::read_to_string(path)
            .with_context(|| format!("reading config {}", path.display()))?;
        Self::from_json(&raw).with_context(|| format!("parsing config {}", path.display()))
    }

    pub fn from_json(raw: &str) -> Result<Self> {
        Ok(serde_json::from_str(raw)?)
    }

    pub fn currency(&self) -> CurrencyFormat {
        CurrencyFormat {
            symbol: self.currency_symbol.clone(),
            grouping: self.grouping,
        }
    }

    pub fn quote(&self) -> QuoteParameters {
        QuoteParameters::new(
            self.initial_quote.principal,
            self.initial_quote.term_years,
            self.initial_quote.rate_percent,
        )
    }
}
