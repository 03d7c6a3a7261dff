//! Application service layer - config, scenarios, runs

pub mod app;
pub mod config;
pub mod scenario;
