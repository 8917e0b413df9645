//! Request and response shapes of the sender search use case.

use serde::Deserialize;

use crate::domain::sender::Sender;

/// Parameters accepted by [`crate::services::senders::SearchSenders`].
///
/// Every field is optional; defaults are applied when the use case runs.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct SearchSendersRequest {
    /// Optional free-form search string.
    pub query: Option<String>,
    /// Page number, `1` when absent.
    pub page: Option<i64>,
    /// Page size, `20` when absent.
    #[serde(alias = "perPage")]
    pub per_page: Option<i64>,
}

impl SearchSendersRequest {
    pub fn query(mut self, query: impl Into<String>) -> Self {
        self.query = Some(query.into());
        self
    }

    pub fn page(mut self, page: i64) -> Self {
        self.page = Some(page);
        self
    }

    pub fn per_page(mut self, per_page: i64) -> Self {
        self.per_page = Some(per_page);
        self
    }
}

/// Senders returned by the repository, in repository order.
pub type SearchSendersResponse = Vec<Sender>;
