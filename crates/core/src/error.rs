//! Error types for the huffpack codec.
//!
//! All operations return structured errors rather than panicking.
//! Failures are deterministic and detected synchronously in the phase
//! that produced them; nothing is retried.

use thiserror::Error;

/// Top-level error type for all codec operations.
///
/// Each variant corresponds to a specific failure domain:
/// - Invalid input: the encoder was handed content it cannot compress
/// - Malformed container: the container's structure cannot be parsed
/// - Corrupt container: the container parses but its payload is damaged
/// - I/O: file system operations in callers
#[derive(Debug, Error)]
pub enum Error {
    /// Encoder input rejected (e.g., empty content)
    #[error("invalid input: {0}")]
    InvalidInput(#[from] InvalidInputError),

    /// Container header or code table cannot be parsed
    #[error("malformed container: {0}")]
    MalformedContainer(#[from] MalformedContainerError),

    /// Container parses but its payload does not decode cleanly
    #[error("corrupt container: {0}")]
    CorruptContainer(#[from] CorruptContainerError),

    /// File I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Encoder input errors.
#[derive(Debug, Error)]
pub enum InvalidInputError {
    /// No symbols to count (cannot build a tree from an empty alphabet)
    #[error("empty input: nothing to encode")]
    EmptyInput,
}

/// Container structure errors.
#[derive(Debug, Error)]
pub enum MalformedContainerError {
    /// Container is too short to contain a valid header
    #[error("container too short: need at least {required} bytes, got {actual}")]
    HeaderTooShort { required: usize, actual: usize },

    /// Declared table length exceeds the bytes actually present
    #[error("table length mismatch: header says {declared}, only {available} bytes remain")]
    TableOutOfBounds { declared: usize, available: usize },

    /// Code table bytes are not valid UTF-8
    #[error("code table is not valid UTF-8")]
    TableNotUtf8,

    /// A table line is not of the form `codepoint:bits`
    #[error("unparsable table line: {line:?}")]
    BadTableLine { line: String },

    /// A table entry names a value that is not a Unicode scalar
    #[error("code-point {value} is not a valid character")]
    BadCodePoint { value: u32 },

    /// A table entry carries an empty or non-binary code
    #[error("invalid code {code:?} for code-point {value}")]
    BadCode { value: u32, code: String },

    /// Stored pad count exceeds the payload's total bit length
    #[error("pad count {pad} exceeds payload length of {payload_bits} bits")]
    PadOverrun { pad: u8, payload_bits: usize },
}

/// Payload decoding errors.
#[derive(Debug, Error)]
pub enum CorruptContainerError {
    /// Bit stream ended mid-code: the trailing bits match no table entry
    #[error("dangling partial code of {len} bits at end of payload")]
    DanglingCode { len: usize },
}

/// Type alias for Result with our Error type
pub type Result<T> = std::result::Result<T, Error>;
