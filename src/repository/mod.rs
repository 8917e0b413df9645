use async_trait::async_trait;

use crate::{
    db::{DbConnection, DbPool, get_connection},
    domain::{
        sender::{NewSender, Sender},
        types::SenderId,
    },
    repository::errors::{RepositoryError, RepositoryResult},
};

pub mod errors;
#[cfg(any(test, feature = "test-mocks"))]
pub mod mock;
pub mod sender;

/// Page requested when the caller does not specify one.
pub const DEFAULT_PAGE: i64 = 1;
/// Page size used when the caller does not specify one.
pub const DEFAULT_ITEMS_PER_PAGE: i64 = 20;

/// Options forwarded to [`SenderReader::search_senders`].
///
/// Values are carried as given; interpreting out-of-range pages is left to
/// the repository implementation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SenderSearchQuery {
    pub query: Option<String>,
    pub page: i64,
    pub per_page: i64,
}

impl SenderSearchQuery {
    pub fn new() -> Self {
        Self {
            query: None,
            page: DEFAULT_PAGE,
            per_page: DEFAULT_ITEMS_PER_PAGE,
        }
    }

    pub fn search(mut self, term: impl Into<String>) -> Self {
        self.query = Some(term.into());
        self
    }

    pub fn paginate(mut self, page: i64, per_page: i64) -> Self {
        self.page = page;
        self.per_page = per_page;
        self
    }
}

impl Default for SenderSearchQuery {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
pub trait SenderReader: Send + Sync {
    async fn search_senders(&self, query: SenderSearchQuery) -> RepositoryResult<Vec<Sender>>;
    async fn get_sender_by_id(&self, id: SenderId) -> RepositoryResult<Option<Sender>>;
}

#[async_trait]
pub trait SenderWriter: Send + Sync {
    async fn create_senders(&self, new_senders: &[NewSender]) -> RepositoryResult<usize>;
}

/// Diesel-backed repository over the SQLite connection pool.
#[derive(Clone)]
pub struct DieselRepository {
    pool: DbPool,
}

impl DieselRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    /// Runs `op` on a pooled connection inside the blocking thread pool, so
    /// waiting for a connection or a query never stalls the async executor.
    async fn with_conn<T, F>(&self, op: F) -> RepositoryResult<T>
    where
        F: FnOnce(&mut DbConnection) -> RepositoryResult<T> + Send + 'static,
        T: Send + 'static,
    {
        let pool = self.pool.clone();
        tokio::task::spawn_blocking(move || {
            let mut conn = get_connection(&pool)?;
            op(&mut conn)
        })
        .await
        .map_err(|e| RepositoryError::Unexpected(format!("Database task failed: {e}")))?
    }
}
