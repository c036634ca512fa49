//! Error types for address parsing.

use thiserror::Error;

/// Errors that can occur while parsing a TON address.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AddressError {
    /// Empty input.
    #[error("Empty address")]
    Empty,

    /// Workchain part of a raw address is not an integer.
    #[error("Invalid workchain: {0}")]
    InvalidWorkchain(String),

    /// Hash part of a raw address is malformed.
    #[error("Invalid account hash: {0}")]
    InvalidHash(String),

    /// User-friendly address is not valid base64.
    #[error("Invalid base64: {0}")]
    InvalidBase64(String),

    /// Decoded user-friendly address has the wrong size.
    #[error("User-friendly address must be 36 bytes, got {0}")]
    InvalidLength(usize),

    /// Unknown flags byte in a user-friendly address.
    #[error("Invalid address tag: 0x{0:02x}")]
    InvalidTag(u8),

    /// Checksum does not match the payload.
    #[error("CRC16 mismatch: expected {expected:04x}, got {actual:04x}")]
    ChecksumMismatch { expected: u16, actual: u16 },

    /// Neither raw nor user-friendly.
    #[error("Unrecognized address format: {0}")]
    UnrecognizedFormat(String),
}

/// Result type for address operations.
pub type AddressResult<T> = Result<T, AddressError>;
