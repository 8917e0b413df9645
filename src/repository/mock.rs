//! Mock repository implementations for isolating services in tests.

use async_trait::async_trait;
use mockall::mock;

use crate::domain::sender::{NewSender, Sender};
use crate::domain::types::SenderId;
use crate::repository::errors::RepositoryResult;
use crate::repository::{SenderReader, SenderSearchQuery, SenderWriter};

mock! {
    pub Repository {}

    #[async_trait]
    impl SenderReader for Repository {
        async fn search_senders(&self, query: SenderSearchQuery) -> RepositoryResult<Vec<Sender>>;
        async fn get_sender_by_id(&self, id: SenderId) -> RepositoryResult<Option<Sender>>;
    }

    #[async_trait]
    impl SenderWriter for Repository {
        async fn create_senders(&self, new_senders: &[NewSender]) -> RepositoryResult<usize>;
    }
}
