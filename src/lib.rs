pub mod config;
pub mod error;
pub mod filter;
pub mod models;
pub mod routes;
pub mod services;
pub mod state;
pub mod validation;
