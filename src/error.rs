//! Error type shared by the terminal front end and the binary.
//!
//! Game outcomes such as a collision are not errors, they are reported through
//! [`crate::session::StepOutcome`]. Everything here stops the program.

use std::{fmt, io};

use crate::Coords;

#[derive(Debug)]
pub enum Error {
    /// Reading stdin, writing stdout or creating the log file failed
    Io(io::Error),

    /// A crossterm command failed
    Terminal(crossterm::ErrorKind),

    /// A global logger was already installed
    Logger(log::SetLoggerError),

    /// The difficulty is not one of the accepted levels
    InvalidDifficulty(String),

    /// The board does not fit in the terminal window
    TerminalTooSmall { needed: Coords, actual: Coords },
}

pub type Result<T> = std::result::Result<T, Error>;

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io(e) => write!(f, "I/O error: {}", e),
            Error::Terminal(e) => write!(f, "terminal error: {}", e),
            Error::Logger(e) => write!(f, "could not set up logging: {}", e),
            Error::InvalidDifficulty(input) => write!(
                f,
                "invalid difficulty '{}', expected 1 (Easy), 2 (Medium) or 3 (Hard)",
                input
            ),
            Error::TerminalTooSmall { needed, actual } => write!(
                f,
                "terminal is {}x{} but the board needs at least {}x{}",
                actual.0, actual.1, needed.0, needed.1
            ),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Io(e) => Some(e),
            Error::Terminal(e) => Some(e),
            Error::Logger(e) => Some(e),
            _ => None,
        }
    }
}

impl From<io::Error> for Error {
    fn from(e: io::Error) -> Self {
        Error::Io(e)
    }
}

impl From<crossterm::ErrorKind> for Error {
    fn from(e: crossterm::ErrorKind) -> Self {
        Error::Terminal(e)
    }
}

impl From<log::SetLoggerError> for Error {
    fn from(e: log::SetLoggerError) -> Self {
        Error::Logger(e)
    }
}
