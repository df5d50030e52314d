pub mod background;
pub mod config;
pub mod data_provider;
pub mod feed;
pub mod fixtures;
pub mod formatting;
pub mod tui;
