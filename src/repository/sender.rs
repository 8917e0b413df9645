//! Repository implementation for senders.

use async_trait::async_trait;
use diesel::prelude::*;

use crate::{
    domain::{
        sender::{NewSender, Sender},
        types::SenderId,
    },
    models::sender::{NewSender as DbNewSender, Sender as DbSender},
    repository::{
        DieselRepository, SenderReader, SenderSearchQuery, SenderWriter,
        errors::{RepositoryError, RepositoryResult},
    },
};

const LIKE_ESCAPE: char = '\\';

/// Wraps `term` in `%` for a substring `LIKE`, escaping its own wildcards.
fn contains_pattern(term: &str) -> String {
    let mut pattern = String::with_capacity(term.len() + 2);
    pattern.push('%');
    for c in term.chars() {
        if matches!(c, '%' | '_' | LIKE_ESCAPE) {
            pattern.push(LIKE_ESCAPE);
        }
        pattern.push(c);
    }
    pattern.push('%');
    pattern
}

fn into_domain(rows: Vec<DbSender>) -> RepositoryResult<Vec<Sender>> {
    rows.into_iter()
        .map(|row| Sender::try_from(row).map_err(RepositoryError::from))
        .collect()
}

#[async_trait]
impl SenderReader for DieselRepository {
    /// Substring search over name, email and phone, ordered by id.
    ///
    /// A page below one reads as the first page; a non-positive page size
    /// yields an empty page.
    async fn search_senders(&self, query: SenderSearchQuery) -> RepositoryResult<Vec<Sender>> {
        use crate::schema::senders;

        if query.per_page <= 0 {
            return Ok(Vec::new());
        }

        let page = query.page.max(1);
        let offset = (page - 1).saturating_mul(query.per_page);

        let pattern = query
            .query
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(contains_pattern);

        self.with_conn(move |conn| {
            let mut items = senders::table
                .order(senders::id.asc())
                .limit(query.per_page)
                .offset(offset)
                .into_boxed();

            if let Some(pattern) = pattern {
                items = items.filter(
                    senders::name
                        .like(pattern.clone())
                        .escape(LIKE_ESCAPE)
                        .or(senders::email.like(pattern.clone()).escape(LIKE_ESCAPE))
                        .or(senders::phone.like(pattern).escape(LIKE_ESCAPE)),
                );
            }

            let rows = items.load::<DbSender>(conn)?;

            into_domain(rows)
        })
        .await
    }

    async fn get_sender_by_id(&self, id: SenderId) -> RepositoryResult<Option<Sender>> {
        use crate::schema::senders;

        self.with_conn(move |conn| {
            let sender = senders::table
                .find(id.get())
                .first::<DbSender>(conn)
                .optional()?;

            sender
                .map(Sender::try_from)
                .transpose()
                .map_err(RepositoryError::from)
        })
        .await
    }
}

#[async_trait]
impl SenderWriter for DieselRepository {
    async fn create_senders(&self, new_senders: &[NewSender]) -> RepositoryResult<usize> {
        use crate::schema::senders;

        let new_senders = new_senders.to_vec();

        self.with_conn(move |conn| {
            let insertables: Vec<DbNewSender> = new_senders.iter().map(Into::into).collect();
            let affected = diesel::insert_into(senders::table)
                .values(&insertables)
                .execute(conn)?;

            Ok(affected)
        })
        .await
    }
}
