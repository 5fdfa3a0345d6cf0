pub mod prices;
pub mod table;
pub mod tracker;
