//! QSO records, timestamps, and the contest-aware exchange decoder.

use serde::{Deserialize, Serialize};

use crate::{
    catalog,
    error::ParseError,
    types::{ExchangeField, ParseMode, Side},
};

/// Validated QSO date and time (`YYYY-MM-DD` plus `HHMM`, 24-hour).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Timestamp {
    /// Four-digit year.
    pub year: u16,
    /// Month, 1-12.
    pub month: u8,
    /// Day of month, 1-31.
    pub day: u8,
    /// Hour, 0-23.
    pub hour: u8,
    /// Minute, 0-59.
    pub minute: u8,
}

impl Timestamp {
    /// Parses the two-token date/time pair from a QSO line.
    ///
    /// Returns `None` unless `date` is `YYYY-MM-DD`, `time` is four digits,
    /// and the field ranges hold.
    pub fn parse(date: &str, time: &str) -> Option<Self> {
        let d = date.as_bytes();
        if d.len() != 10 || d[4] != b'-' || d[7] != b'-' {
            return None;
        }
        let digits_at = |range: std::ops::Range<usize>| d[range].iter().all(u8::is_ascii_digit);
        if !digits_at(0..4) || !digits_at(5..7) || !digits_at(8..10) {
            return None;
        }
        if time.len() != 4 || !time.bytes().all(|b| b.is_ascii_digit()) {
            return None;
        }

        let year: u16 = date[0..4].parse().ok()?;
        let month: u8 = date[5..7].parse().ok()?;
        let day: u8 = date[8..10].parse().ok()?;
        let hour: u8 = time[0..2].parse().ok()?;
        let minute: u8 = time[2..4].parse().ok()?;
        if !(1..=12).contains(&month) || !(1..=31).contains(&day) || hour > 23 || minute > 59 {
            return None;
        }

        Some(Self {
            year,
            month,
            day,
            hour,
            minute,
        })
    }
}

/// One station's half of a contest exchange.
///
/// Fields not named by the active contest's schema stay `None`; a short line
/// leaves trailing schema fields `None` as well.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct ExchangeValues {
    /// Station callsign.
    pub callsign: Option<String>,
    /// Signal report.
    pub rst: Option<String>,
    /// Free-form exchange value.
    pub exchange: Option<String>,
    /// Sweepstakes serial number.
    pub serial_number: Option<String>,
    /// Sweepstakes precedence letter.
    pub precedence: Option<String>,
    /// Sweepstakes check.
    pub check: Option<String>,
    /// ARRL section abbreviation.
    pub arrl_section: Option<String>,
    /// Trailing transmitter id column.
    pub transmitter_id: Option<String>,
}

impl ExchangeValues {
    /// Returns the stored value for `field`, if present.
    pub fn get(&self, field: ExchangeField) -> Option<&str> {
        match field {
            ExchangeField::Callsign => self.callsign.as_deref(),
            ExchangeField::Rst => self.rst.as_deref(),
            ExchangeField::Exchange => self.exchange.as_deref(),
            ExchangeField::SerialNumber => self.serial_number.as_deref(),
            ExchangeField::Precedence => self.precedence.as_deref(),
            ExchangeField::Check => self.check.as_deref(),
            ExchangeField::ArrlSection => self.arrl_section.as_deref(),
            ExchangeField::TransmitterId => self.transmitter_id.as_deref(),
        }
    }

    fn set(&mut self, field: ExchangeField, value: &str) {
        let owned = Some(value.to_string());
        match field {
            ExchangeField::Callsign => self.callsign = owned,
            ExchangeField::Rst => self.rst = owned,
            ExchangeField::Exchange => self.exchange = owned,
            ExchangeField::SerialNumber => self.serial_number = owned,
            ExchangeField::Precedence => self.precedence = owned,
            ExchangeField::Check => self.check = owned,
            ExchangeField::ArrlSection => self.arrl_section = owned,
            ExchangeField::TransmitterId => self.transmitter_id = owned,
        }
    }
}

/// Sent and received exchange halves of one contact.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Exchange {
    /// What the logging station sent.
    pub sent: ExchangeValues,
    /// What the worked station sent back.
    pub received: ExchangeValues,
}

/// One parsed `QSO:` record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Qso {
    /// Frequency token exactly as logged, not unit-converted.
    pub frequency: String,
    /// Mode token (`CW`, `PH`, `RY`, ...).
    pub mode: String,
    /// Contact time; `None` only in lenient mode when the date/time pair is
    /// malformed or missing.
    pub time: Option<Timestamp>,
    /// Contest exchange, sent side first.
    pub exchange: Exchange,
}

/// Exchange layout family for one contest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ExchangeSchema {
    /// RST, exchange value, then the received side plus transmitter id.
    RstSerial,
    /// Sweepstakes serial/precedence/check/section on both sides.
    SerialPrecedence,
    /// Sent callsign only; remaining tokens are not assigned.
    Generic,
}

const RST_SERIAL_LAYOUT: &[(Side, ExchangeField)] = &[
    (Side::Sent, ExchangeField::Rst),
    (Side::Sent, ExchangeField::Exchange),
    (Side::Received, ExchangeField::Callsign),
    (Side::Received, ExchangeField::Rst),
    (Side::Received, ExchangeField::Exchange),
    (Side::Received, ExchangeField::TransmitterId),
];

const SERIAL_PRECEDENCE_LAYOUT: &[(Side, ExchangeField)] = &[
    (Side::Sent, ExchangeField::SerialNumber),
    (Side::Sent, ExchangeField::Precedence),
    (Side::Sent, ExchangeField::Check),
    (Side::Sent, ExchangeField::ArrlSection),
    (Side::Received, ExchangeField::Callsign),
    (Side::Received, ExchangeField::SerialNumber),
    (Side::Received, ExchangeField::Precedence),
    (Side::Received, ExchangeField::Check),
    (Side::Received, ExchangeField::ArrlSection),
];

/// Contest id to schema family. Adding a contest is a data edit here.
static SCHEMA_TABLE: &[(&str, ExchangeSchema)] = &[
    ("AP-SPRINT", ExchangeSchema::RstSerial),
    ("ARRL-10", ExchangeSchema::RstSerial),
    ("ARRL-160", ExchangeSchema::RstSerial),
    ("ARRL-DX-CW", ExchangeSchema::RstSerial),
    ("ARRL-DX-SSB", ExchangeSchema::RstSerial),
    ("ARRL-FIELD-DAY", ExchangeSchema::RstSerial),
    ("ARRL-SS-CW", ExchangeSchema::SerialPrecedence),
    ("ARRL-SS-SSB", ExchangeSchema::SerialPrecedence),
    ("CQ-160-CW", ExchangeSchema::RstSerial),
    ("CQ-160-SSB", ExchangeSchema::RstSerial),
    ("CQ-WPX-CW", ExchangeSchema::RstSerial),
    ("CQ-WPX-RTTY", ExchangeSchema::RstSerial),
    ("CQ-WPX-SSB", ExchangeSchema::RstSerial),
    ("CQ-WW-CW", ExchangeSchema::RstSerial),
    ("CQ-WW-RTTY", ExchangeSchema::RstSerial),
    ("CQ-WW-SSB", ExchangeSchema::RstSerial),
    ("IARU-HF", ExchangeSchema::RstSerial),
    ("JIDX-CW", ExchangeSchema::RstSerial),
    ("JIDX-SSB", ExchangeSchema::RstSerial),
    ("NEQP", ExchangeSchema::RstSerial),
    ("OCEANIA-DX-CW", ExchangeSchema::RstSerial),
    ("OCEANIA-DX-SSB", ExchangeSchema::RstSerial),
    ("STEW-PERRY", ExchangeSchema::RstSerial),
];

impl ExchangeSchema {
    /// Looks up the exchange family for `contest`.
    ///
    /// Contests outside both families decode with the generic fallback.
    pub fn for_contest(contest: &str) -> Self {
        SCHEMA_TABLE
            .iter()
            .find(|(id, _)| *id == contest)
            .map(|(_, schema)| *schema)
            .unwrap_or(Self::Generic)
    }

    fn layout(self) -> &'static [(Side, ExchangeField)] {
        match self {
            Self::RstSerial => RST_SERIAL_LAYOUT,
            Self::SerialPrecedence => SERIAL_PRECEDENCE_LAYOUT,
            Self::Generic => &[],
        }
    }
}

/// Decodes one QSO line (the `QSO: ` prefix already stripped) under
/// `contest`.
///
/// The leading tokens are always frequency, mode, date, and time; the first
/// exchange token is always the sent callsign. Remaining tokens follow the
/// contest's schema; tokens past the schema are dropped and a short line
/// leaves trailing fields absent rather than failing.
pub fn decode_qso(line: &str, contest: &str, mode: ParseMode) -> Result<Qso, ParseError> {
    if mode == ParseMode::Strict && !catalog::CONTEST.contains(&contest) {
        return Err(ParseError::UnknownContest {
            contest: contest.to_string(),
        });
    }

    let mut tokens = line.split_whitespace();
    let frequency = tokens.next().unwrap_or_default().to_string();
    let qso_mode = tokens.next().unwrap_or_default().to_string();
    let date = tokens.next().unwrap_or_default();
    let time_token = tokens.next().unwrap_or_default();

    let time = match Timestamp::parse(date, time_token) {
        Some(ts) => Some(ts),
        None if mode == ParseMode::Strict => {
            return Err(ParseError::MalformedTimestamp {
                date: date.to_string(),
                time: time_token.to_string(),
            });
        }
        None => None,
    };

    let mut exchange = Exchange::default();
    if let Some(callsign) = tokens.next() {
        exchange.sent.set(ExchangeField::Callsign, callsign);
    }
    for (&(side, field), token) in ExchangeSchema::for_contest(contest).layout().iter().zip(tokens) {
        let half = match side {
            Side::Sent => &mut exchange.sent,
            Side::Received => &mut exchange.received,
        };
        half.set(field, token);
    }

    Ok(Qso {
        frequency,
        mode: qso_mode,
        time,
        exchange,
    })
}
