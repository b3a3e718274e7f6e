//! Parse failure surface.

use thiserror::Error;

/// Reason a Cabrillo parse was aborted.
///
/// Strict mode surfaces the first offending line and discards everything
/// accumulated before it; a parse call returns either a complete log or one
/// of these, never both.
#[derive(Debug, Error)]
pub enum ParseError {
    /// A header value failed its catalog rule (strict mode only).
    #[error("invalid value `{value}` for key `{key}`")]
    InvalidFieldValue {
        /// Header key whose rule rejected the value.
        key: String,
        /// The rejected value, verbatim.
        value: String,
    },
    /// A QSO line was decoded under a contest outside the known set
    /// (strict mode only).
    #[error("unknown contest `{contest}`")]
    UnknownContest {
        /// The unrecognized contest identifier.
        contest: String,
    },
    /// A QSO date/time pair did not match `YYYY-MM-DD HHMM`.
    #[error("malformed timestamp `{date} {time}`")]
    MalformedTimestamp {
        /// Date token as it appeared on the line.
        date: String,
        /// Time token as it appeared on the line.
        time: String,
    },
    /// Reading a log file failed.
    #[error("reading log file: {0}")]
    Io(#[from] std::io::Error),
}
