//! Application errors
use std::{fmt, io};

use stackc::Diagnostic;

/// FreeBSD EX_USAGE (64)
pub const EX_USAGE: i32 = 64;
/// FreeBSD EX_DATAERR (65)
pub const EX_DATAERR: i32 = 65;
/// FreeBSD EX_NOINPUT (66)
pub const EX_NOINPUT: i32 = 66;
/// FreeBSD EX_IOERR (74)
pub const EX_IOERR: i32 = 74;

#[derive(Debug)]
pub struct AppError {
    pub kind: ErrorKind,
}

impl std::error::Error for AppError {}

#[derive(Debug)]
pub enum ErrorKind {
    /// Source failed to compile. Already reported to the user.
    Compile(Diagnostic),
    /// Source file could not be read.
    Input { filepath: String, err: io::Error },
    Io(io::Error),
}

impl AppError {
    pub fn input(filepath: impl ToString, err: io::Error) -> Self {
        Self {
            kind: ErrorKind::Input {
                filepath: filepath.to_string(),
                err,
            },
        }
    }

    /// Process exit code for this error.
    pub fn exit_code(&self) -> i32 {
        match self.kind {
            ErrorKind::Compile(_) => EX_DATAERR,
            ErrorKind::Input { .. } => EX_NOINPUT,
            ErrorKind::Io(_) => EX_IOERR,
        }
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "application error: {}", self.kind)
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Compile(err) => write!(f, "{err}"),
            Self::Input { filepath, err } => write!(f, "cannot read {filepath}: {err}"),
            Self::Io(err) => write!(f, "{err}"),
        }
    }
}

impl From<Diagnostic> for AppError {
    fn from(err: Diagnostic) -> Self {
        Self {
            kind: ErrorKind::Compile(err),
        }
    }
}

impl From<io::Error> for AppError {
    fn from(err: io::Error) -> Self {
        Self {
            kind: ErrorKind::Io(err),
        }
    }
}
