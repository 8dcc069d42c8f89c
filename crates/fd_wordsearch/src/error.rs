use std::fmt;
use std::error;
use std::io;

/// Error type for reading and writing board and word-list files.
#[derive(Debug)]
pub enum BoardError {
    /// The underlying stream failed.
    Io(io::Error),
}

impl fmt::Display for BoardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(e) => write!(f, "I/O error: {e}"),
        }
    }
}

impl error::Error for BoardError {
    fn source(&self) -> Option<&(dyn error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
        }
    }
}

impl From<io::Error> for BoardError {
    fn from(e: io::Error) -> Self {
        Self::Io(e)
    }
}
