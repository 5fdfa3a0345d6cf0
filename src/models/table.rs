use serde::Serialize;
use std::fmt;

use super::asset::{AssetId, QuoteCurrency};

pub const ASSET_COLUMN_LABEL: &str = "Crypto Coin";

/// How rows of a [`PriceTable`] are ordered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RowOrder {
    /// Keep the order of the quotation service response.
    #[default]
    AsReceived,
    /// Re-sort rows to follow the configured asset list.
    Requested,
}

impl RowOrder {
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_lowercase().as_str() {
            "received" | "as_received" | "response" => Some(RowOrder::AsReceived),
            "requested" => Some(RowOrder::Requested),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PriceRow {
    pub asset: AssetId,
    pub price: f64,
}

/// Two-column table of prices: asset identifier and price in the quote currency.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PriceTable {
    columns: [String; 2],
    rows: Vec<PriceRow>,
}

impl PriceTable {
    pub fn new(currency: &QuoteCurrency, rows: Vec<PriceRow>) -> Self {
        PriceTable {
            columns: [
                ASSET_COLUMN_LABEL.to_string(),
                format!("Price ({})", currency.label()),
            ],
            rows,
        }
    }

    pub fn columns(&self) -> &[String; 2] {
        &self.columns
    }

    pub fn rows(&self) -> &[PriceRow] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Requested assets that have no row, in requested order.
    pub fn missing<'a>(&self, requested: &'a [AssetId]) -> Vec<&'a AssetId> {
        requested
            .iter()
            .filter(|id| !self.rows.iter().any(|row| row.asset == **id))
            .collect()
    }
}

impl fmt::Display for PriceTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let width = self
            .rows
            .iter()
            .map(|row| row.asset.as_str().chars().count())
            .chain(std::iter::once(self.columns[0].chars().count()))
            .max()
            .unwrap_or_default();

        write!(f, "{:<width$}  {}", self.columns[0], self.columns[1])?;
        for row in &self.rows {
            write!(f, "\n{:<width$}  {}", row.asset.as_str(), row.price)?;
        }

        Ok(())
    }
}
