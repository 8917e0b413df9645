use chrono::NaiveDateTime;
use diesel::prelude::*;

use crate::domain::sender::{NewSender as DomainNewSender, Sender as DomainSender};
use crate::domain::types::{SenderEmail, SenderId, SenderName, TypeConstraintError};

#[derive(Debug, Clone, Identifiable, Queryable)]
#[diesel(table_name = crate::schema::senders)]
/// Diesel model for [`crate::domain::sender::Sender`].
pub struct Sender {
    pub id: i32,
    pub name: String,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::senders)]
/// Insertable form of [`Sender`].
pub struct NewSender<'a> {
    pub name: &'a str,
    pub email: Option<&'a str>,
    pub phone: Option<&'a str>,
}

impl TryFrom<Sender> for DomainSender {
    type Error = TypeConstraintError;

    fn try_from(sender: Sender) -> Result<Self, Self::Error> {
        Ok(Self {
            id: SenderId::new(sender.id)?,
            name: SenderName::new(sender.name)?,
            email: sender.email.map(SenderEmail::new).transpose()?,
            phone: sender.phone,
            created_at: sender.created_at,
            updated_at: sender.updated_at,
        })
    }
}

impl<'a> From<&'a DomainNewSender> for NewSender<'a> {
    fn from(sender: &'a DomainNewSender) -> Self {
        Self {
            name: sender.name.as_str(),
            email: sender.email.as_ref().map(SenderEmail::as_str),
            phone: sender.phone.as_deref(),
        }
    }
}
