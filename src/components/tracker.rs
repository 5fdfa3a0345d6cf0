use reqwest::Client;

use super::{
    prices::{PriceFetcher, Result},
    table::TableBuilder,
};
use crate::{
    config::TrackerConfig,
    models::{asset::AssetId, table::PriceTable, table::RowOrder},
};

/// Fetch-then-build pipeline. Holds no state between calls.
#[derive(Debug, Clone)]
pub struct PriceTracker {
    fetcher: PriceFetcher,
    builder: TableBuilder,
}

impl PriceTracker {
    pub fn new(config: TrackerConfig) -> Self {
        Self::with_client(Client::new(), config)
    }

    pub fn with_client(client: Client, config: TrackerConfig) -> Self {
        let fetcher = PriceFetcher::with_client(client, &config);
        let builder = match config.row_order {
            RowOrder::AsReceived => TableBuilder::new(config.currency),
            RowOrder::Requested => {
                TableBuilder::new(config.currency).with_requested_order(config.assets)
            }
        };

        PriceTracker { fetcher, builder }
    }

    pub fn requested(&self) -> &[AssetId] {
        self.fetcher.assets()
    }

    pub async fn get_current_price_table(&self) -> Result<PriceTable> {
        let quote = self.fetcher.fetch().await?;

        Ok(self.builder.build(quote))
    }
}
