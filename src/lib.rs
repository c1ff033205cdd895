pub mod analyzer;
pub mod auth;
pub mod azure;
pub mod cli;
pub mod config;
pub mod errors;
pub mod models;
pub mod repl;
pub mod reporting;
