pub const COINGECKO_API_URL: &str = "https://api.coingecko.com/api/v3/simple/price";
pub const CRYPTO_IDS: [&str; 3] = ["bitcoin", "ethereum", "dogecoin"];
pub const CURRENCY: &str = "usd";

pub const PRICE_API_URL_VAR: &str = "PRICE_API_URL";
pub const CRYPTO_IDS_VAR: &str = "CRYPTO_IDS";
pub const QUOTE_CURRENCY_VAR: &str = "QUOTE_CURRENCY";
pub const ROW_ORDER_VAR: &str = "ROW_ORDER";
