pub mod account;
pub mod atm;
pub mod bank;
pub mod config;
pub mod logging;
pub mod prompt;
pub mod summary;
pub mod transaction;
mod tests;
