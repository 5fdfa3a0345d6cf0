use log::info;

use crate::models::{
    asset::{AssetId, QuoteCurrency},
    quotes::PriceQuote,
    table::{PriceRow, PriceTable, RowOrder},
};

/// Reshapes a [`PriceQuote`] into a display-ready [`PriceTable`].
#[derive(Debug, Clone)]
pub struct TableBuilder {
    currency: QuoteCurrency,
    order: RowOrder,
    requested: Vec<AssetId>,
}

impl TableBuilder {
    pub fn new(currency: QuoteCurrency) -> Self {
        TableBuilder {
            currency,
            order: RowOrder::AsReceived,
            requested: Vec::new(),
        }
    }

    /// Sort rows by position in `requested` instead of keeping the response order.
    pub fn with_requested_order(mut self, requested: Vec<AssetId>) -> Self {
        self.order = RowOrder::Requested;
        self.requested = requested;
        self
    }

    pub fn order(&self) -> RowOrder {
        self.order
    }

    pub fn build(&self, quote: PriceQuote) -> PriceTable {
        let mut rows: Vec<PriceRow> = quote
            .into_iter()
            .map(|(asset, price)| PriceRow { asset, price })
            .collect();

        if self.order == RowOrder::Requested {
            // stable, anything unknown keeps its relative order at the end
            rows.sort_by_key(|row| {
                self.requested
                    .iter()
                    .position(|id| *id == row.asset)
                    .unwrap_or(usize::MAX)
            });
        }

        info!("built price table with {} rows", rows.len());

        PriceTable::new(&self.currency, rows)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn quote(entries: &[(&str, f64)]) -> PriceQuote {
        let mut quote = PriceQuote::new();
        for (id, price) in entries {
            quote.insert(AssetId::new(*id), *price);
        }
        quote
    }

    fn rows(table: &PriceTable) -> Vec<(&str, f64)> {
        table
            .rows()
            .iter()
            .map(|row| (row.asset.as_str(), row.price))
            .collect()
    }

    #[test]
    fn builds_rows_in_quote_order() {
        let builder = TableBuilder::new(QuoteCurrency::new("usd"));
        let table = builder.build(quote(&[("bitcoin", 50000.0), ("ethereum", 3000.0)]));

        assert_eq!(table.columns()[0], "Crypto Coin");
        assert_eq!(table.columns()[1], "Price (USD)");
        assert_eq!(rows(&table), vec![("bitcoin", 50000.0), ("ethereum", 3000.0)]);
    }

    #[test]
    fn does_not_sort_by_name_or_price() {
        let builder = TableBuilder::new(QuoteCurrency::new("usd"));
        let table = builder.build(quote(&[
            ("dogecoin", 0.1),
            ("bitcoin", 50000.0),
            ("ethereum", 3000.0),
        ]));

        assert_eq!(
            rows(&table),
            vec![("dogecoin", 0.1), ("bitcoin", 50000.0), ("ethereum", 3000.0)]
        );
    }

    #[test]
    fn empty_quote_keeps_schema() {
        let builder = TableBuilder::new(QuoteCurrency::new("usd"));
        let table = builder.build(PriceQuote::new());

        assert!(table.is_empty());
        assert_eq!(table.columns()[1], "Price (USD)");
    }

    #[test]
    fn preserves_raw_precision() {
        let builder = TableBuilder::new(QuoteCurrency::new("usd"));
        let table = builder.build(quote(&[("shiba-inu", 0.00001234567891)]));

        assert_eq!(table.rows()[0].price, 0.00001234567891);
    }

    #[test]
    fn requested_order_resorts_rows() {
        let requested = vec![
            AssetId::new("bitcoin"),
            AssetId::new("ethereum"),
            AssetId::new("dogecoin"),
        ];
        let builder =
            TableBuilder::new(QuoteCurrency::new("eur")).with_requested_order(requested);
        let table = builder.build(quote(&[("dogecoin", 0.1), ("bitcoin", 46000.0)]));

        assert_eq!(builder.order(), RowOrder::Requested);
        assert_eq!(rows(&table), vec![("bitcoin", 46000.0), ("dogecoin", 0.1)]);
        assert_eq!(table.columns()[1], "Price (EUR)");
    }
}
