//! Domain aggregates exposed by the senders service layer.

pub mod sender;
pub mod types;
