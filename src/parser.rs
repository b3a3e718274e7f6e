//! Line classification and whole-log parsing.

use std::{fs, path::Path};

use crate::{
    catalog,
    error::ParseError,
    log::ParsedLog,
    qso,
    types::ParseMode,
};

/// Literal prefix introducing a contact record.
const QSO_PREFIX: &str = "QSO: ";

/// Parses a whole Cabrillo log held in memory.
///
/// Lines are processed strictly in order: later single-valued header lines
/// overwrite earlier ones, multi-valued lines and QSO records append. A
/// `QSO:` line is decoded only when a `CONTEST` header was already seen;
/// otherwise it is dropped. In [`ParseMode::Strict`] the first offending
/// line aborts the parse.
pub fn parse(text: &str, mode: ParseMode) -> Result<ParsedLog, ParseError> {
    let mut log = ParsedLog::default();
    for raw in text.lines() {
        let line = raw.trim();
        if line.is_empty() || line.starts_with('#') || line.starts_with("//") {
            continue;
        }
        if let Some(rest) = line.strip_prefix(QSO_PREFIX) {
            if let Some(contest) = log.contest.clone() {
                let record = qso::decode_qso(rest, &contest, mode)?;
                log.qsos.push(record);
            }
            continue;
        }
        parse_line(line, &mut log, mode)?;
    }
    Ok(log)
}

/// Reads `path` into memory and parses it with [`parse`].
pub fn parse_file(path: impl AsRef<Path>, mode: ParseMode) -> Result<ParsedLog, ParseError> {
    let text = fs::read_to_string(path)?;
    parse(&text, mode)
}

/// Classifies one trimmed, non-blank, non-comment header line into `log`.
///
/// The line splits at the first `": "` into key and value. Keys outside the
/// catalog, and lines without that shape (such as a bare `END-OF-LOG:`),
/// are ignored. Validation runs against the value of this line only; strict
/// mode fails on the rule's first rejection, lenient mode stores verbatim.
pub fn parse_line(line: &str, log: &mut ParsedLog, mode: ParseMode) -> Result<(), ParseError> {
    let Some((key, value)) = line.split_once(": ") else {
        return Ok(());
    };
    let value = value.trim();
    let Some(rule) = catalog::lookup(key) else {
        return Ok(());
    };

    if mode == ParseMode::Strict && !rule.validator.accepts(value) {
        return Err(ParseError::InvalidFieldValue {
            key: key.to_string(),
            value: value.to_string(),
        });
    }

    log.store(rule.slot, value);
    Ok(())
}
