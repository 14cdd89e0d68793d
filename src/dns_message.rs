use crate::dns_header::{DnsFlags, DnsHeader, HEADER_SIZE};
use crate::dns_question::DnsQuestion;
use crate::error::DecodeError;

/// A decoded message: the header and, when the header announces any
/// questions, the first of them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodedMessage {
    pub header: DnsHeader,
    pub question: Option<DnsQuestion>,
}

impl DecodedMessage {
    pub fn flags(&self) -> DnsFlags {
        self.header.decoded_flags()
    }
}

/// Decode one message from the buffer.
///
/// Only the first question is read, whatever `question_count` says. With a
/// count of zero nothing past the header is inspected.
pub fn decode(buf: &[u8]) -> Result<DecodedMessage, DecodeError> {
    let header = DnsHeader::from_bytes(buf)?;

    let question = if header.question_count == 0 {
        None
    } else {
        let (question, _) = DnsQuestion::from_bytes(buf, HEADER_SIZE)?;
        Some(question)
    };

    Ok(DecodedMessage { header, question })
}
