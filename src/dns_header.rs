use bytes::Buf;

use crate::error::DecodeError;

/// Size of the fixed header at the start of every message.
pub const HEADER_SIZE: usize = 12;

/// The fixed 12-byte header, fields in wire order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DnsHeader {
    pub id: u16,
    pub flags: u16,
    pub question_count: u16,
    pub answer_count: u16,
    pub authority_count: u16,
    pub additional_count: u16,
}

/// The three sub-fields of the flags word this decoder exposes.
///
/// Each field holds the masked bit value, so `is_response` and
/// `recursion_desired` are always 0 or 1 and `opcode` is at most 15.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DnsFlags {
    pub is_response: u8,       // 0 = query, 1 = reply
    pub opcode: u8,            // 0 = standard query
    pub recursion_desired: u8, // 1 = recursion requested
}

/// Read a big-endian u16 at `offset`.
pub fn read_u16_be(buf: &[u8], offset: usize) -> Result<u16, DecodeError> {
    if offset.checked_add(2).map_or(true, |end| end > buf.len()) {
        return Err(DecodeError::OutOfBounds {
            offset,
            len: buf.len(),
        });
    }

    let mut field = &buf[offset..offset + 2];
    Ok(field.get_u16())
}

/// Extract `count` bits starting at 1-indexed `position`, counted from the
/// least significant bit (position 1 is bit 0).
pub fn get_bits(flags: u16, count: u32, position: u32) -> u16 {
    let mask = (1u32 << count) - 1;
    (mask & (u32::from(flags) >> (position - 1))) as u16
}

impl DnsFlags {
    pub fn from_u16(flags: u16) -> Self {
        DnsFlags {
            is_response: get_bits(flags, 1, 16) as u8,
            opcode: get_bits(flags, 4, 12) as u8,
            recursion_desired: get_bits(flags, 1, 9) as u8,
        }
    }

    /// Rebuild a flags word holding only the decoded sub-fields.
    pub fn to_u16(&self) -> u16 {
        let mut flags: u16 = 0;

        flags |= (self.is_response as u16 & 0x1) << 15;      // QR at bit 15
        flags |= (self.opcode as u16 & 0xF) << 11;           // OPCODE at bits 11-14
        flags |= (self.recursion_desired as u16 & 0x1) << 8; // RD at bit 8

        flags
    }

    pub fn is_reply(&self) -> bool {
        self.is_response == 1
    }

    pub fn is_standard_query(&self) -> bool {
        self.opcode == 0
    }

    pub fn wants_recursion(&self) -> bool {
        self.recursion_desired == 1
    }
}

/// Split a flags word into its decoded sub-fields.
pub fn decode_flags(flags: u16) -> DnsFlags {
    DnsFlags::from_u16(flags)
}

impl DnsHeader {
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, DecodeError> {
        if bytes.len() < HEADER_SIZE {
            return Err(DecodeError::TruncatedHeader { len: bytes.len() });
        }

        Ok(DnsHeader {
            id: read_u16_be(bytes, 0)?,
            flags: read_u16_be(bytes, 2)?,
            question_count: read_u16_be(bytes, 4)?,
            answer_count: read_u16_be(bytes, 6)?,
            authority_count: read_u16_be(bytes, 8)?,
            additional_count: read_u16_be(bytes, 10)?,
        })
    }

    pub fn decoded_flags(&self) -> DnsFlags {
        decode_flags(self.flags)
    }
}

/// Decode the fixed header at the start of `buf`.
pub fn decode_header(buf: &[u8]) -> Result<DnsHeader, DecodeError> {
    DnsHeader::from_bytes(buf)
}
