pub mod app;
pub mod config;
mod routes;
pub mod services;
pub mod templates;
pub mod types;
pub mod utils;
