pub mod api;
pub mod catalog;
pub mod config;
pub mod error;
pub mod loader;
pub mod models;
pub mod state;
