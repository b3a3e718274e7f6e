//! Shared parser enums and exchange vocabulary.

use serde::{Deserialize, Serialize};

/// Parser strictness, threaded explicitly through every parse call.
///
/// Never stored in a global: two parses with different modes cannot
/// interfere.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ParseMode {
    /// Out-of-vocabulary or malformed values abort the parse.
    #[default]
    Strict,
    /// Values are stored verbatim; QSO decoding degrades instead of failing.
    Lenient,
}

/// How many values a header key may carry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Cardinality {
    /// One value; a later line with the same key overwrites the earlier one.
    Single,
    /// Appended in encounter order, duplicates kept.
    Multi,
}

/// Which station a contest-exchange token belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Side {
    /// The logging station's own half of the exchange.
    Sent,
    /// The worked station's half of the exchange.
    Received,
}

/// Named slot within a contest exchange.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ExchangeField {
    /// Station callsign.
    Callsign,
    /// Signal report.
    Rst,
    /// Free-form exchange value (serial, section, grid, ...).
    Exchange,
    /// Sweepstakes serial number.
    SerialNumber,
    /// Sweepstakes precedence letter.
    Precedence,
    /// Sweepstakes check (year first licensed).
    Check,
    /// ARRL section abbreviation.
    ArrlSection,
    /// Trailing transmitter id column.
    TransmitterId,
}
