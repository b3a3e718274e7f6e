//! Parsing and validation for the Cabrillo amateur-radio contest-log format.
//!
//! Header lines are checked against a static field catalog (enumerated or
//! pattern-validated values, single vs. multi cardinality); `QSO:` lines are
//! decoded into structured exchange records whose layout is selected by the
//! contest declared earlier in the same log.
//!
//! # Examples
//!
//! Strict parse of an in-memory log:
//! ```
//! use cabrillo::{parser, types::ParseMode};
//!
//! let text = "\
//! START-OF-LOG: 3.0
//! CALLSIGN: W8UPD
//! CONTEST: NEQP
//! QSO: 14325 PH 2013-06-08 1805 N8SQL 59 001 KG4SGP 59 HARCT
//! END-OF-LOG:
//! ";
//! let log = parser::parse(text, ParseMode::Strict).expect("parse");
//! assert_eq!(log.version, "3.0");
//! assert_eq!(log.callsign.as_deref(), Some("W8UPD"));
//! assert_eq!(log.qsos[0].exchange.received.callsign.as_deref(), Some("KG4SGP"));
//! ```
//!
//! Lenient parse keeps out-of-vocabulary values verbatim:
//! ```
//! use cabrillo::{parser, types::ParseMode};
//!
//! let log = parser::parse("CATEGORY-BAND: 99M\n", ParseMode::Lenient).expect("parse");
//! assert_eq!(log.category_band.as_deref(), Some("99M"));
//! assert_eq!(log.to_map()["category_band"], "99M");
//! ```
#![deny(missing_docs)]

/// Static header-key catalog: cardinality and validation rules.
pub mod catalog;
/// Parse error surface.
pub mod error;
/// Frequency notation conversion helpers.
pub mod freq;
/// Parsed log record and map view.
pub mod log;
/// Whole-log and header-line parsing.
pub mod parser;
/// QSO records and the contest-aware exchange decoder.
pub mod qso;
/// Shared enums: parse mode, cardinality, exchange vocabulary.
pub mod types;
