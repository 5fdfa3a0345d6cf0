use log::{debug, warn};
use reqwest::{header::ACCEPT, Client};
use serde_json::Value;
use thiserror::Error;
use url::Url;

use crate::{
    config::TrackerConfig,
    models::{
        asset::{AssetId, QuoteCurrency},
        quotes::PriceQuote,
    },
};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum PriceError {
    #[error("transport error: {0}")]
    Transport(String),

    #[error("response format error: {0}")]
    ResponseFormat(String),
}

pub type Result<T> = std::result::Result<T, PriceError>;

/// Issues `GET <endpoint>?ids=..&vs_currencies=..` and parses the body into a [`PriceQuote`].
#[derive(Debug, Clone)]
pub struct PriceFetcher {
    client: Client,
    endpoint: Url,
    assets: Vec<AssetId>,
    currency: QuoteCurrency,
}

impl PriceFetcher {
    pub fn new(config: &TrackerConfig) -> Self {
        Self::with_client(Client::new(), config)
    }

    pub fn with_client(client: Client, config: &TrackerConfig) -> Self {
        PriceFetcher {
            client,
            endpoint: config.endpoint.clone(),
            assets: config.assets.clone(),
            currency: config.currency.clone(),
        }
    }

    pub fn assets(&self) -> &[AssetId] {
        &self.assets
    }

    pub fn request_url(&self) -> Url {
        let ids = self
            .assets
            .iter()
            .map(AssetId::as_str)
            .collect::<Vec<&str>>()
            .join(",");
        let mut url = self.endpoint.clone();

        url.query_pairs_mut()
            .append_pair("ids", &ids)
            .append_pair("vs_currencies", self.currency.code());

        url
    }

    pub async fn fetch(&self) -> Result<PriceQuote> {
        let url = self.request_url();

        debug!("GET {}", url);

        let res = self
            .client
            .get(url)
            .header(ACCEPT, "application/json")
            .send()
            .await
            .map_err(|e| PriceError::Transport(e.to_string()))?;
        let status = res.status();
        let body = res
            .text()
            .await
            .map_err(|e| PriceError::Transport(e.to_string()))?;

        if !status.is_success() {
            return Err(PriceError::ResponseFormat(format!(
                "unexpected status {}, content: {}",
                status,
                excerpt(&body)
            )));
        }

        parse_price_response(&body, &self.assets, &self.currency)
    }
}

/// Parses `{ "<asset>": { "<currency>": <number>, .. }, .. }`.
///
/// Any present asset without a usable price fails the whole parse. Keys that were not
/// requested are dropped, requested assets that are absent are only logged.
pub fn parse_price_response(
    body: &str,
    requested: &[AssetId],
    currency: &QuoteCurrency,
) -> Result<PriceQuote> {
    let json: Value = serde_json::from_str(body)
        .map_err(|e| {
            PriceError::ResponseFormat(format!("invalid JSON: {}, content: {}", e, excerpt(body)))
        })?;
    let entries = json.as_object().ok_or_else(|| {
        PriceError::ResponseFormat(format!(
            "expected an object of assets, content: {}",
            excerpt(&json.to_string())
        ))
    })?;

    let mut quote = PriceQuote::new();

    for (key, value) in entries {
        let Some(asset) = requested.iter().find(|id| id.as_str() == key) else {
            warn!("response contains unrequested asset {}, skipped", key);
            continue;
        };

        let fields = value.as_object().ok_or_else(|| {
            PriceError::ResponseFormat(format!("entry for {} is not an object: {}", key, value))
        })?;
        let price = fields
            .iter()
            .find(|(field, _)| field.eq_ignore_ascii_case(currency.code()))
            .map(|(_, price)| price)
            .ok_or_else(|| {
                PriceError::ResponseFormat(format!("{} missing for asset {}", currency, key))
            })?;
        let price = price.as_f64().filter(|p| *p >= 0.0).ok_or_else(|| {
            PriceError::ResponseFormat(format!("invalid {} price for {}: {}", currency, key, price))
        })?;

        quote.insert(asset.clone(), price);
    }

    for id in requested.iter().filter(|id| !quote.contains(id)) {
        warn!("no price returned for {}", id);
    }

    Ok(quote)
}

const EXCERPT_CHARS: usize = 200;

/// Bounded prefix of an upstream body for error messages.
fn excerpt(body: &str) -> String {
    match body.char_indices().nth(EXCERPT_CHARS) {
        Some((end, _)) => format!("{}...", &body[..end]),
        None => body.to_string(),
    }
}
