use thiserror::Error;

/// Reasons a message could not be decoded.
///
/// Every variant is terminal for the decode call that produced it.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DecodeError {
    /// A 16-bit read ran past the end of the buffer.
    #[error("read of 2 bytes at offset {offset} runs past end of {len}-byte buffer")]
    OutOfBounds { offset: usize, len: usize },

    /// The buffer cannot hold the fixed 12-byte header.
    #[error("buffer too small for DNS header: got {len} bytes, need 12")]
    TruncatedHeader { len: usize },

    /// The question name has no zero terminator before the end of the buffer.
    #[error("question name starting at offset {start} is not terminated")]
    UnterminatedName { start: usize },

    /// Fewer than 4 bytes follow the name terminator.
    #[error("question type and class need 4 bytes at offset {offset}, only {remaining} left")]
    TruncatedQuestion { offset: usize, remaining: usize },
}
