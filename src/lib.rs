pub mod config;
pub mod core;
pub mod models;
pub mod parser;
pub mod report;
#[cfg(test)]
pub mod test_helpers;
