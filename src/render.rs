//! Text rendering of a decoded message.
//!
//! The mnemonic tables here are for display only; decoding never consults
//! them.

use std::fmt;

use crate::dns_header::DnsFlags;
use crate::dns_message::DecodedMessage;

/// Printed in place of the question line when the header counts no questions.
pub const NO_QUESTIONS: &str = "ERROR: No Questions!";

/// Record types with a mnemonic.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordType {
    A = 1,     // IPv4 address
    NS = 2,    // Name server
    CNAME = 5, // Canonical name
    SOA = 6,   // Start of authority
    PTR = 12,  // Pointer record
    AAAA = 28, // IPv6 address
}

impl RecordType {
    pub fn from_u16(value: u16) -> Option<Self> {
        match value {
            1 => Some(RecordType::A),
            2 => Some(RecordType::NS),
            5 => Some(RecordType::CNAME),
            6 => Some(RecordType::SOA),
            12 => Some(RecordType::PTR),
            28 => Some(RecordType::AAAA),
            _ => None,
        }
    }

    pub fn mnemonic(self) -> &'static str {
        match self {
            RecordType::A => "A",
            RecordType::NS => "NS",
            RecordType::CNAME => "CNAME",
            RecordType::SOA => "SOA",
            RecordType::PTR => "PTR",
            // legacy mnemonic, not the standard "AAAA"
            RecordType::AAAA => "AAA",
        }
    }
}

/// Record classes with a mnemonic.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordClass {
    IN = 1, // Internet
}

impl RecordClass {
    pub fn from_u16(value: u16) -> Option<Self> {
        match value {
            1 => Some(RecordClass::IN),
            _ => None,
        }
    }

    pub fn mnemonic(self) -> &'static str {
        match self {
            RecordClass::IN => "IN",
        }
    }
}

/// Mnemonic for a type code, or the code in decimal.
pub fn type_name(value: u16) -> String {
    RecordType::from_u16(value)
        .map(|t| t.mnemonic().to_string())
        .unwrap_or_else(|| value.to_string())
}

/// Mnemonic for a class code, or the code in decimal.
pub fn class_name(value: u16) -> String {
    RecordClass::from_u16(value)
        .map(|c| c.mnemonic().to_string())
        .unwrap_or_else(|| value.to_string())
}

fn kind_line(flags: &DnsFlags) -> &'static str {
    if flags.is_reply() {
        "Reply"
    } else if flags.is_standard_query() {
        "Standard Query"
    } else {
        "Inverse Query or Server Status Request"
    }
}

fn recursion_line(flags: &DnsFlags) -> &'static str {
    if flags.wants_recursion() {
        "Recursion Requested"
    } else {
        "Recursion Not Requested"
    }
}

impl fmt::Display for DecodedMessage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let header = &self.header;
        let flags = self.flags();

        writeln!(f, "ID: 0x{:04X}", header.id)?;
        writeln!(f, "FLAGS: 0x{:04X}", header.flags)?;
        writeln!(f, "- {}", kind_line(&flags))?;
        writeln!(f, "- {}", recursion_line(&flags))?;
        writeln!(f, "# Questions: {}", header.question_count)?;
        writeln!(f, "# Answers: {}", header.answer_count)?;
        writeln!(f, "# Authority RRs: {}", header.authority_count)?;
        writeln!(f, "# Additional RRs: {}", header.additional_count)?;
        writeln!(f, "Questions:")?;

        match &self.question {
            Some(question) => write!(
                f,
                "- {}, {}, {}",
                question.name,
                type_name(question.qtype),
                class_name(question.qclass)
            ),
            None => write!(f, "- {}", NO_QUESTIONS),
        }
    }
}
