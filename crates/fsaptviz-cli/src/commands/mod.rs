pub mod analyze;
pub mod classify;
pub mod config;
pub mod health;
pub mod output;
pub mod pairs;
pub mod summary;
