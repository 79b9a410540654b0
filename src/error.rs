use crate::compat::String;

/// The category of a query parameter error
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Update input is neither a key/value mapping nor a sequence of mappings
    InvalidInput,
    /// Query string segment without `=` (strict parsing only)
    MalformedSegment,
    /// Percent-decoded bytes are not valid UTF-8 (strict parsing only)
    InvalidPercentEncoding,
}

impl core::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let msg = match self {
            Self::InvalidInput => "Invalid input",
            Self::MalformedSegment => "Malformed segment",
            Self::InvalidPercentEncoding => "Invalid percent encoding",
        };
        f.write_str(msg)
    }
}

/// Error returned by fallible [`QueryParameterSet`](crate::QueryParameterSet) operations.
///
/// Carries the offending piece of input so callers can report it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Error {
    kind: ErrorKind,
    input: String,
}

impl Error {
    pub(crate) fn new(kind: ErrorKind, input: impl Into<String>) -> Self {
        Self {
            kind,
            input: input.into(),
        }
    }

    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    /// The segment or value that was rejected
    pub fn input(&self) -> &str {
        &self.input
    }
}

impl core::fmt::Display for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}: {:?}", self.kind, self.input)
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Error {}

/// Result type for query parameter operations
pub type Result<T> = core::result::Result<T, Error>;
