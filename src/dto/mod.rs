//! DTOs exchanged with the senders use cases.

pub mod senders;
