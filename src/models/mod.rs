//! Diesel row models and externally loaded configuration.

pub mod config;
pub mod sender;
