use super::asset::AssetId;

/// Prices of one fetch, in the order the quotation service listed them.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct PriceQuote {
    entries: Vec<(AssetId, f64)>,
}

impl PriceQuote {
    pub fn new() -> Self {
        PriceQuote::default()
    }

    /// Sets the price of `asset`, keeping its original position when already present.
    pub fn insert(&mut self, asset: AssetId, price: f64) {
        match self.entries.iter_mut().find(|(id, _)| *id == asset) {
            Some(entry) => entry.1 = price,
            None => self.entries.push((asset, price)),
        }
    }

    pub fn get(&self, asset: &AssetId) -> Option<f64> {
        self.entries
            .iter()
            .find(|(id, _)| id == asset)
            .map(|(_, price)| *price)
    }

    pub fn contains(&self, asset: &AssetId) -> bool {
        self.get(asset).is_some()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&AssetId, f64)> {
        self.entries.iter().map(|(id, price)| (id, *price))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl IntoIterator for PriceQuote {
    type Item = (AssetId, f64);
    type IntoIter = std::vec::IntoIter<(AssetId, f64)>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn insert_keeps_first_position() {
        let mut quote = PriceQuote::new();
        quote.insert(AssetId::new("ethereum"), 3000.0);
        quote.insert(AssetId::new("bitcoin"), 50000.0);
        quote.insert(AssetId::new("ethereum"), 3100.0);

        let ids: Vec<&str> = quote.iter().map(|(id, _)| id.as_str()).collect();

        assert_eq!(ids, vec!["ethereum", "bitcoin"]);
        assert_eq!(quote.get(&AssetId::new("ethereum")), Some(3100.0));
        assert_eq!(quote.len(), 2);
    }

    #[test]
    fn empty_quote() {
        let quote = PriceQuote::new();

        assert!(quote.is_empty());
        assert!(!quote.contains(&AssetId::new("bitcoin")));
    }
}
