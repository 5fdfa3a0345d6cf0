use log::warn;
use thiserror::Error;
use url::Url;

use crate::models::{
    asset::{AssetId, QuoteCurrency},
    table::RowOrder,
};

pub mod coingecko;
pub mod server;

use coingecko::{
    COINGECKO_API_URL, CRYPTO_IDS, CRYPTO_IDS_VAR, CURRENCY, PRICE_API_URL_VAR,
    QUOTE_CURRENCY_VAR, ROW_ORDER_VAR,
};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("at least one asset identifier is required")]
    NoAssets,

    #[error("asset identifier at position {0} is blank")]
    BlankAsset(usize),

    #[error("asset identifier {0} contains a comma")]
    CommaInAsset(String),

    #[error("quote currency is blank")]
    BlankCurrency,

    #[error("invalid endpoint url {0}: {1}")]
    InvalidEndpoint(String, String),

    #[error("invalid value for {0}: {1}")]
    InvalidVar(&'static str, String),
}

pub type Result<T> = std::result::Result<T, ConfigError>;

/// Everything the price pipeline needs: where to ask, for which assets, in which currency.
#[derive(Debug, Clone, PartialEq)]
pub struct TrackerConfig {
    pub endpoint: Url,
    pub assets: Vec<AssetId>,
    pub currency: QuoteCurrency,
    pub row_order: RowOrder,
}

impl TrackerConfig {
    /// Validates the inputs. Identifiers are trimmed and duplicates dropped, first one wins.
    pub fn new<I, S>(endpoint: &str, assets: I, currency: &str) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let endpoint = Url::parse(endpoint.trim())
            .map_err(|e| ConfigError::InvalidEndpoint(endpoint.to_string(), e.to_string()))?;

        let mut ids: Vec<AssetId> = Vec::new();
        for (position, raw) in assets.into_iter().enumerate() {
            let raw = raw.as_ref().trim();
            if raw.is_empty() {
                return Err(ConfigError::BlankAsset(position));
            }
            // ids are comma-joined on the wire
            if raw.contains(',') {
                return Err(ConfigError::CommaInAsset(raw.to_string()));
            }

            let id = AssetId::new(raw);
            if ids.contains(&id) {
                warn!("duplicate asset identifier {} ignored", id);
                continue;
            }
            ids.push(id);
        }

        if ids.is_empty() {
            return Err(ConfigError::NoAssets);
        }

        if currency.trim().is_empty() {
            return Err(ConfigError::BlankCurrency);
        }

        Ok(TrackerConfig {
            endpoint,
            assets: ids,
            currency: QuoteCurrency::new(currency),
            row_order: RowOrder::default(),
        })
    }

    pub fn with_row_order(mut self, row_order: RowOrder) -> Self {
        self.row_order = row_order;
        self
    }

    pub fn from_env() -> Result<Self> {
        Self::from_vars(|name| std::env::var(name).ok())
    }

    /// Builds the configuration from a variable lookup, falling back to the CoinGecko defaults
    /// for anything unset or empty.
    pub fn from_vars<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |name: &str| lookup(name).filter(|value| !value.trim().is_empty());

        let endpoint = var(PRICE_API_URL_VAR).unwrap_or_else(|| COINGECKO_API_URL.to_string());
        let currency = var(QUOTE_CURRENCY_VAR).unwrap_or_else(|| CURRENCY.to_string());
        let config = match var(CRYPTO_IDS_VAR) {
            Some(ids) => Self::new(&endpoint, ids.split(','), &currency)?,
            None => Self::new(&endpoint, CRYPTO_IDS, &currency)?,
        };

        let row_order = match var(ROW_ORDER_VAR) {
            Some(value) => RowOrder::parse(&value)
                .ok_or_else(|| ConfigError::InvalidVar(ROW_ORDER_VAR, value))?,
            None => RowOrder::default(),
        };

        Ok(config.with_row_order(row_order))
    }
}

pub fn port_from_env() -> Result<u16> {
    port_from_vars(|name| std::env::var(name).ok())
}

pub fn port_from_vars<F>(lookup: F) -> Result<u16>
where
    F: Fn(&str) -> Option<String>,
{
    match lookup(server::PORT_VAR).filter(|value| !value.trim().is_empty()) {
        Some(value) => value
            .trim()
            .parse()
            .map_err(|_| ConfigError::InvalidVar(server::PORT_VAR, value)),
        None => Ok(server::PORT),
    }
}
