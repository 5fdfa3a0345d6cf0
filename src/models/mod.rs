pub mod asset;
pub mod quotes;
pub mod table;
