pub mod senders;
