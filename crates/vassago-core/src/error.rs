//! Error types for compression operations.

use thiserror::Error;

/// Result type alias for compression operations.
pub type Result<T> = core::result::Result<T, Error>;

/// Compression error types.
#[derive(Debug, Error)]
pub enum Error {
    /// I/O error from the underlying source or sink.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Container does not start with the expected magic tag.
    #[error("not a valid container: bad magic {found:02x?}")]
    InvalidMagic { found: [u8; 4] },

    /// Container header ended before the named field was complete.
    #[error("truncated header: missing {field}")]
    TruncatedHeader { field: &'static str },

    /// Encoded payload ran out before the declared size was reached.
    #[error("unexpected end of encoded data after {decoded} of {expected} bytes")]
    UnexpectedEof { decoded: u64, expected: u64 },

    /// Encoded payload or stored table is inconsistent.
    #[error("corrupted data: {message}")]
    CorruptedData { message: String },

    /// A symbol was seen during encoding that has no assigned code.
    #[error("internal error: no code assigned to symbol 0x{symbol:02x}")]
    MissingCode { symbol: u8 },

    /// The source yielded different data on the encoding pass than on the counting pass.
    #[error("internal error: source changed between passes ({counted} bytes counted, {encoded} encoded)")]
    SourceChanged { counted: u64, encoded: u64 },

    /// Unsupported input or operation.
    #[error("unsupported: {0}")]
    Unsupported(String),
}

/// Broad failure classes, used by callers that only care about the kind of failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Reading or writing the source or sink failed.
    Io,
    /// The container header is malformed.
    Format,
    /// The encoded payload is damaged.
    Corruption,
    /// An invariant of the codec itself was violated.
    Internal,
    /// The request cannot be represented.
    Unsupported,
}

impl Error {
    /// Create a corrupted data error.
    pub fn corrupted(message: impl Into<String>) -> Self {
        Error::CorruptedData {
            message: message.into(),
        }
    }

    /// Create a corrupted data error with bit offset context.
    pub fn corrupted_at(message: impl Into<String>, bit_offset: u64) -> Self {
        Error::CorruptedData {
            message: format!("{} at payload bit {}", message.into(), bit_offset),
        }
    }

    /// Create an unexpected EOF error.
    pub fn unexpected_eof(decoded: u64, expected: u64) -> Self {
        Error::UnexpectedEof { decoded, expected }
    }

    /// Create a truncated header error.
    pub fn truncated(field: &'static str) -> Self {
        Error::TruncatedHeader { field }
    }

    /// Create an unsupported error.
    pub fn unsupported(message: impl Into<String>) -> Self {
        Error::Unsupported(message.into())
    }

    /// Classify the error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::Io(_) => ErrorKind::Io,
            Error::InvalidMagic { .. } | Error::TruncatedHeader { .. } => ErrorKind::Format,
            Error::UnexpectedEof { .. } | Error::CorruptedData { .. } => ErrorKind::Corruption,
            Error::MissingCode { .. } | Error::SourceChanged { .. } => ErrorKind::Internal,
            Error::Unsupported(_) => ErrorKind::Unsupported,
        }
    }

    /// Get error category for logging.
    pub fn category(&self) -> &'static str {
        match self {
            Error::Io(_) => "io_error",
            Error::InvalidMagic { .. } => "invalid_magic",
            Error::TruncatedHeader { .. } => "truncated_header",
            Error::UnexpectedEof { .. } => "unexpected_eof",
            Error::CorruptedData { .. } => "corrupted_data",
            Error::MissingCode { .. } => "missing_code",
            Error::SourceChanged { .. } => "source_changed",
            Error::Unsupported(_) => "unsupported",
        }
    }
}
