// chatlens library crate
// Exposes modules for integration testing

pub mod analysis;
pub mod api;
pub mod chart;
pub mod cli;
pub mod commands;
pub mod config;
pub mod models;
pub mod output;
pub mod utils;
