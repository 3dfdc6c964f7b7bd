//! tcmd errors
//!
//! A non-matching stream is not an error; it is a `MatchOutcome`. Errors are
//! reserved for a pattern the caller got wrong and for failures around the
//! child process.

use std::fmt;

/// The kind of tcmd error
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ErrorKind {
    /// A user supplied pattern does not compile
    InvalidPattern,
    /// The shell could not be spawned or waited on
    CommandFailed,
    /// IO error (reading stdin, writing the report)
    Io,
}

/// A tcmd error with optional command context
#[derive(Debug)]
pub struct TcmdError {
    pub kind: ErrorKind,
    pub message: String,
    pub command: Option<String>,
}

impl TcmdError {
    pub fn new(kind: ErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            command: None,
        }
    }

    pub fn with_command(mut self, cmd: impl Into<String>) -> Self {
        self.command = Some(cmd.into());
        self
    }

    pub fn invalid_pattern(pattern: &str, err: impl fmt::Display) -> Self {
        Self::new(ErrorKind::InvalidPattern, format!("invalid regex [{}]: {}", pattern, err))
    }
}

impl fmt::Display for TcmdError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(ref cmd) = self.command {
            write!(f, "cmd [{}]: ", cmd)?;
        }
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for TcmdError {}

impl From<std::io::Error> for TcmdError {
    fn from(e: std::io::Error) -> Self {
        Self::new(ErrorKind::Io, e.to_string())
    }
}
