use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::domain::types::{SenderEmail, SenderId, SenderName, TypeConstraintError};

/// Contact record that messages are sent on behalf of.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Sender {
    pub id: SenderId,
    pub name: SenderName,
    pub email: Option<SenderEmail>,
    pub phone: Option<String>,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct NewSender {
    pub name: SenderName,
    pub email: Option<SenderEmail>,
    pub phone: Option<String>,
}

impl NewSender {
    #[must_use]
    pub fn new(name: SenderName, email: Option<SenderEmail>, phone: Option<String>) -> Self {
        Self {
            name,
            email,
            phone: phone
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty()),
        }
    }

    /// Builds a sender from raw input, treating blank email as absent.
    pub fn try_new(
        name: impl Into<String>,
        email: Option<String>,
        phone: Option<String>,
    ) -> Result<Self, TypeConstraintError> {
        let name = SenderName::new(name)?;
        let email = email
            .filter(|s| !s.trim().is_empty())
            .map(SenderEmail::new)
            .transpose()?;
        Ok(Self::new(name, email, phone))
    }
}
