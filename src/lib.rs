//! Decoder for the header and first question of a single DNS message.
//!
//! [`decode`] is the entry point: it takes the raw bytes of one datagram and
//! returns a [`DecodedMessage`] or a [`DecodeError`]. It performs no I/O.

pub mod dns_header;
pub mod dns_message;
pub mod dns_question;
pub mod error;
pub mod render;

pub use dns_header::{DnsFlags, DnsHeader};
pub use dns_message::{decode, DecodedMessage};
pub use dns_question::DnsQuestion;
pub use error::DecodeError;
