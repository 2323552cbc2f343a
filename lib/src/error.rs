//! Error type shared by the parser and the streaming decoder.

use std::fmt;

/// Errors that can arise while decoding N-Quads input.
#[derive(Debug)]
pub enum NqError {
    /// Underlying I/O error from the byte source.
    Io(std::io::Error),
    /// A line that is not valid N-Quads. Carries the raw offending line
    /// so callers can report where decoding stopped.
    Syntax { message: String, line: String },
    /// A term combination the downstream model cannot represent.
    Invalid(&'static str),
}

impl fmt::Display for NqError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NqError::Io(e) => write!(f, "{}", e),
            NqError::Syntax { message, line } => {
                write!(f, "failed to parse {:?}: {}", line, message)
            }
            NqError::Invalid(m) => write!(f, "{}", m),
        }
    }
}
impl std::error::Error for NqError {}
impl From<std::io::Error> for NqError {
    fn from(e: std::io::Error) -> Self {
        NqError::Io(e)
    }
}

impl NqError {
    /// True for errors a caller may recover from by skipping the bad line.
    pub fn is_syntax(&self) -> bool {
        matches!(self, NqError::Syntax { .. })
    }
}
