use thiserror::Error;

use crate::db::{DbError, establish_connection_pool};
use crate::models::config::ServerConfig;
use crate::repository::DieselRepository;
use crate::services::senders::SearchSenders;

pub mod db;
pub mod domain;
pub mod dto;
pub mod models;
pub mod repository;
pub mod schema;
pub mod services;

/// Failures raised while wiring the use cases to their storage.
#[derive(Debug, Error)]
pub enum BootstrapError {
    #[error("Failed to establish database connection: {0}")]
    Database(#[from] DbError),
}

/// Builds the sender search use case backed by the SQLite repository.
pub fn build_search_senders(
    server_config: &ServerConfig,
) -> Result<SearchSenders<DieselRepository>, BootstrapError> {
    // Establish Diesel connection pool for the SQLite database.
    let pool = establish_connection_pool(&server_config.database_url)?;
    log::info!("Connected to senders database at {}", server_config.database_url);

    Ok(SearchSenders::new(DieselRepository::new(pool)))
}
