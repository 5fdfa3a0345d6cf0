pub mod components;
pub mod config;
pub mod controller;
pub mod models;
pub mod server;
