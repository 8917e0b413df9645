use crate::dto::senders::{SearchSendersRequest, SearchSendersResponse};
use crate::repository::errors::RepositoryResult;
use crate::repository::{DEFAULT_ITEMS_PER_PAGE, DEFAULT_PAGE, SenderReader, SenderSearchQuery};

/// Searches senders through the injected repository.
///
/// Missing pagination falls back to page 1 of 20 items. The query and any
/// supplied page values are forwarded verbatim, and the repository result,
/// success or error, is returned untouched.
pub struct SearchSenders<R> {
    senders_repository: R,
}

impl<R> SearchSenders<R>
where
    R: SenderReader,
{
    pub fn new(senders_repository: R) -> Self {
        Self { senders_repository }
    }

    pub async fn execute(
        &self,
        request: SearchSendersRequest,
    ) -> RepositoryResult<SearchSendersResponse> {
        let SearchSendersRequest {
            query,
            page,
            per_page,
        } = request;

        let query = SenderSearchQuery {
            query,
            page: page.unwrap_or(DEFAULT_PAGE),
            per_page: per_page.unwrap_or(DEFAULT_ITEMS_PER_PAGE),
        };

        log::debug!(
            "Searching senders: page {}, {} per page",
            query.page,
            query.per_page
        );

        self.senders_repository.search_senders(query).await
    }
}
