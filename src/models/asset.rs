use serde::Serialize;
use std::fmt;

/// Opaque name of a tracked asset, e.g. `bitcoin`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct AssetId(String);

impl AssetId {
    pub fn new(id: impl Into<String>) -> Self {
        AssetId(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for AssetId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// The single unit every price of a fetch is expressed in.
///
/// Stored lowercase, which is what the quotation service expects on the wire.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuoteCurrency(String);

impl QuoteCurrency {
    pub fn new(code: &str) -> Self {
        QuoteCurrency(code.trim().to_lowercase())
    }

    pub fn code(&self) -> &str {
        &self.0
    }

    pub fn label(&self) -> String {
        self.0.to_uppercase()
    }
}

impl fmt::Display for QuoteCurrency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
