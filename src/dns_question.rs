use crate::dns_header::read_u16_be;
use crate::error::DecodeError;

/// DNS Question Section
/// Format: QNAME + QTYPE (2 bytes) + QCLASS (2 bytes)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DnsQuestion {
    pub name: String, // Letters of the name, with "." for separator bytes
    pub qtype: u16,   // Query type (A, AAAA, CNAME, etc.)
    pub qclass: u16,  // Query class (usually IN for Internet)
}

impl DnsQuestion {
    /// Parse a question from bytes starting at the given offset.
    /// Returns the question and the offset just past its class field.
    pub fn from_bytes(bytes: &[u8], offset: usize) -> Result<(Self, usize), DecodeError> {
        let (name, new_offset) = scan_name(bytes, offset)?;

        let remaining = bytes.len() - new_offset;
        if remaining < 4 {
            return Err(DecodeError::TruncatedQuestion {
                offset: new_offset,
                remaining,
            });
        }

        let qtype = read_u16_be(bytes, new_offset)?;
        let qclass = read_u16_be(bytes, new_offset + 2)?;

        Ok((
            DnsQuestion {
                name,
                qtype,
                qclass,
            },
            new_offset + 4,
        ))
    }
}

/// Decode the question that starts at `start_offset`.
pub fn decode_question(
    buf: &[u8],
    start_offset: usize,
) -> Result<(DnsQuestion, usize), DecodeError> {
    DnsQuestion::from_bytes(buf, start_offset)
}

/// Scan a question name up to its zero terminator.
///
/// This is a letter scan, not label decoding: ASCII letters are kept, and
/// every other non-zero byte becomes a "." once at least one character has
/// been collected. Length octets therefore turn into separators, and so do
/// digits and hyphens inside labels. Compression pointers are not followed.
///
/// Returns the name and the offset just past the terminator.
pub fn scan_name(bytes: &[u8], offset: usize) -> Result<(String, usize), DecodeError> {
    let mut name = String::new();

    for (i, &byte) in bytes.iter().enumerate().skip(offset) {
        if byte == 0 {
            return Ok((name, i + 1));
        }

        if byte.is_ascii_alphabetic() {
            name.push(byte as char);
        } else if !name.is_empty() {
            name.push('.');
        }
    }

    Err(DecodeError::UnterminatedName { start: offset })
}

#[cfg(test)]
mod tests {
    use super::*;

    const WWW_EXAMPLE_COM: [u8; 17] = [
        3, b'w', b'w', b'w', 7, b'e', b'x', b'a', b'm', b'p', b'l', b'e', 3, b'c', b'o', b'm', 0,
    ];

    #[test]
    fn test_scan_name_length_prefixed_labels() {
        let (name, offset) = scan_name(&WWW_EXAMPLE_COM, 0).unwrap();
        assert_eq!(name, "www.example.com");
        assert_eq!(offset, 17);
    }

    #[test]
    fn test_scan_name_from_offset() {
        let mut bytes = vec![0xAA; 12];
        bytes.extend_from_slice(&WWW_EXAMPLE_COM);
        let (name, offset) = scan_name(&bytes, 12).unwrap();
        assert_eq!(name, "www.example.com");
        assert_eq!(offset, 29);
    }

    #[test]
    fn test_scan_name_digits_and_hyphens_become_separators() {
        let bytes = [6, b'a', b'b', b'-', b'c', b'1', b'2', 0];
        let (name, _) = scan_name(&bytes, 0).unwrap();
        assert_eq!(name, "ab.c..");
    }

    #[test]
    fn test_scan_name_drops_leading_non_letters() {
        let bytes = [0x05, b'9', b'-', b'x', 0];
        let (name, offset) = scan_name(&bytes, 0).unwrap();
        assert_eq!(name, "x");
        assert_eq!(offset, 5);
    }

    #[test]
    fn test_scan_name_root() {
        let (name, offset) = scan_name(&[0, 0, 1, 0, 1], 0).unwrap();
        assert_eq!(name, "");
        assert_eq!(offset, 1);
    }

    #[test]
    fn test_scan_name_high_bytes_are_not_letters() {
        let bytes = [1, b'a', 0xC0, 0xE9, b'b', 0];
        let (name, _) = scan_name(&bytes, 0).unwrap();
        assert_eq!(name, "a..b");
    }

    #[test]
    fn test_scan_name_unterminated() {
        let bytes = [3, b'c', b'o', b'm'];
        assert_eq!(
            scan_name(&bytes, 0),
            Err(DecodeError::UnterminatedName { start: 0 })
        );
        assert_eq!(
            scan_name(&bytes, 10),
            Err(DecodeError::UnterminatedName { start: 10 })
        );
    }

    #[test]
    fn test_decode_question() {
        let mut bytes = WWW_EXAMPLE_COM.to_vec();
        bytes.extend_from_slice(&[0x00, 0x1C, 0x00, 0x01]);

        let (question, offset) = decode_question(&bytes, 0).unwrap();
        assert_eq!(
            question,
            DnsQuestion {
                name: "www.example.com".to_string(),
                qtype: 28,
                qclass: 1,
            }
        );
        assert_eq!(offset, 21);
    }

    #[test]
    fn test_decode_question_truncated_type_and_class() {
        let mut bytes = WWW_EXAMPLE_COM.to_vec();
        bytes.extend_from_slice(&[0x00, 0x01, 0x00]);

        assert_eq!(
            decode_question(&bytes, 0),
            Err(DecodeError::TruncatedQuestion {
                offset: 17,
                remaining: 3,
            })
        );
    }

    #[test]
    fn test_decode_question_nothing_after_terminator() {
        assert_eq!(
            decode_question(&WWW_EXAMPLE_COM, 0),
            Err(DecodeError::TruncatedQuestion {
                offset: 17,
                remaining: 0,
            })
        );
    }

    #[test]
    fn test_decode_question_unterminated_name() {
        let bytes = [3, b'c', b'o', b'm', 1, 2, 3];
        assert!(matches!(
            decode_question(&bytes, 0),
            Err(DecodeError::UnterminatedName { start: 0 })
        ));
    }
}
