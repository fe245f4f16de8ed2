use std::fmt;
use std::path::PathBuf;

/// Result type for attendance pipeline operations
pub type Result<T> = std::result::Result<T, Error>;

/// Fatal conditions a report run can hit. Every variant aborts the run;
/// there is no partial or degraded success mode.
#[derive(Debug)]
pub enum Error {
    /// Input path missing or unreadable
    File {
        path: PathBuf,
        source: std::io::Error,
    },
    /// Structurally invalid input table (missing columns, bad rows)
    Data(String),
    /// Nothing left to report after filtering or aggregation
    EmptyResult(String),
    /// Writing the rendered report failed
    Io(std::io::Error),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::File { path, source } => {
                write!(f, "cannot read '{}': {}", path.display(), source)
            }
            Error::Data(msg) => write!(f, "invalid attendance data: {}", msg),
            Error::EmptyResult(msg) => write!(f, "no data: {}", msg),
            Error::Io(err) => write!(f, "failed to write report: {}", err),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::File { source, .. } => Some(source),
            Error::Io(err) => Some(err),
            Error::Data(_) | Error::EmptyResult(_) => None,
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err)
    }
}
