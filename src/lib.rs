pub mod cli;
pub mod config;
pub mod errors;
pub mod migrations;
pub mod utils;
