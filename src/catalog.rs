//! Static catalog of recognized Cabrillo header keys.
//!
//! Each key carries its cardinality and validation rule. Keys absent from
//! the catalog are ignored by the parser, never stored.

use std::sync::LazyLock;

use hashbrown::HashMap;

use crate::types::Cardinality;

/// Legal values for `CATEGORY-ASSISTED`.
pub const CATEGORY_ASSISTED: &[&str] = &["ASSISTED", "NON-ASSISTED"];

/// Legal values for `CATEGORY-BAND`.
pub const CATEGORY_BAND: &[&str] = &[
    "ALL", "160M", "80M", "40M", "20M", "15M", "10M", "6M", "2M", "222", "432", "902", "1.2G",
    "2.3G", "3.4G", "5.7G", "10G", "24G", "47G", "75G", "119G", "142G", "241G", "Light",
];

/// Legal values for `CATEGORY-MODE`.
pub const CATEGORY_MODE: &[&str] = &["SSB", "CW", "RTTY", "MIXED"];

/// Legal values for `CATEGORY-OPERATOR`.
pub const CATEGORY_OPERATOR: &[&str] = &["SINGLE-OP", "MULTI-OP", "CHECKLOG"];

/// Legal values for `CATEGORY-POWER`.
pub const CATEGORY_POWER: &[&str] = &["HIGH", "LOW", "QRP"];

/// Legal values for `CATEGORY-STATION`.
pub const CATEGORY_STATION: &[&str] = &[
    "FIXED", "MOBILE", "PORTABLE", "ROVER", "EXPEDITION", "HQ", "SCHOOL",
];

/// Legal values for `CATEGORY-TIME`.
pub const CATEGORY_TIME: &[&str] = &["6-HOURS", "12-HOURS", "24-HOURS"];

/// Legal values for `CATEGORY-TRANSMITTER`.
pub const CATEGORY_TRANSMITTER: &[&str] = &["ONE", "TWO", "LIMITED", "UNLIMITED", "SWL"];

/// Legal values for `CATEGORY-OVERLAY`.
pub const CATEGORY_OVERLAY: &[&str] = &["ROOKIE", "TB-WIRED", "NOVICE-TECH", "OVER-50"];

/// Recognized contest identifiers for `CONTEST`.
///
/// Also consulted by the QSO decoder's strict-mode membership check.
pub const CONTEST: &[&str] = &[
    "AP-SPRINT",
    "ARRL-10",
    "ARRL-160",
    "ARRL-DX-CW",
    "ARRL-DX-SSB",
    "ARRL-SS-CW",
    "ARRL-SS-SSB",
    "ARRL-UHF-AUG",
    "ARRL-VHF-JAN",
    "ARRL-VHF-JUN",
    "ARRL-VHF-SEP",
    "ARRL-RTTY",
    "BARTG-RTTY",
    "CQ-160-CW",
    "CQ-160-SSB",
    "CQ-WPX-CW",
    "CQ-WPX-RTTY",
    "CQ-WPX-SSB",
    "CQ-VHF",
    "CQ-WW-CW",
    "CQ-WW-RTTY",
    "CQ-WW-SSB",
    "DARC-WAEDC-CW",
    "DARC-WAEDC-RTTY",
    "DARC-WAEDC-SSB",
    "FCG-FQP",
    "IARU-HF",
    "JIDX-CW",
    "JIDX-SSB",
    "NA-SPRINT-CW",
    "NA-SPRINT-SSB",
    "NCCC-CQP",
    "NEQP",
    "OCEANIA-DX-CW",
    "OCEANIA-DX-SSB",
    "RDXC",
    "RSGB-IOTA",
    "SAC-CW",
    "SAC-SSB",
    "STEW-PERRY",
    "TARA-RTTY",
];

/// Validation rule attached to a header key.
#[derive(Debug, Clone, Copy)]
pub enum Validator {
    /// Any value accepted.
    None,
    /// Value must equal one member of the set (case-sensitive).
    OneOf(&'static [&'static str]),
    /// Value must satisfy the predicate.
    Pattern(fn(&str) -> bool),
}

impl Validator {
    /// Returns true when `value` satisfies this rule.
    pub fn accepts(&self, value: &str) -> bool {
        match self {
            Validator::None => true,
            Validator::OneOf(set) => set.contains(&value),
            Validator::Pattern(pred) => pred(value),
        }
    }
}

/// The [`crate::log::ParsedLog`] slot a recognized key stores into.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeaderField {
    /// `START-OF-LOG` value.
    Version,
    /// `CALLSIGN` value.
    Callsign,
    /// `CONTEST` value.
    Contest,
    /// `CLAIMED-SCORE` value.
    ClaimedScore,
    /// `CLUB` lines.
    Club,
    /// `NAME` value.
    Name,
    /// `CREATED-BY` value.
    CreatedBy,
    /// `EMAIL` value.
    Email,
    /// `LOCATION` value.
    Location,
    /// `ADDRESS` lines.
    Address,
    /// `ADDRESS-CITY` value.
    AddressCity,
    /// `ADDRESS-STATE-PROVINCE` value.
    AddressStateProvince,
    /// `ADDRESS-POSTALCODE` value.
    AddressPostalcode,
    /// `ADDRESS-COUNTRY` value.
    AddressCountry,
    /// `SOAPBOX` lines.
    Soapbox,
    /// `OPERATORS` lines.
    Operators,
    /// `CATEGORY-ASSISTED` value.
    CategoryAssisted,
    /// `CATEGORY-BAND` value.
    CategoryBand,
    /// `CATEGORY-MODE` value.
    CategoryMode,
    /// `CATEGORY-OPERATOR` value.
    CategoryOperator,
    /// `CATEGORY-POWER` value.
    CategoryPower,
    /// `CATEGORY-STATION` value.
    CategoryStation,
    /// `CATEGORY-TIME` value.
    CategoryTime,
    /// `CATEGORY-TRANSMITTER` value.
    CategoryTransmitter,
    /// `CATEGORY-OVERLAY` value.
    CategoryOverlay,
}

/// One immutable catalog entry.
#[derive(Debug, Clone, Copy)]
pub struct FieldRule {
    /// Exact header tag, e.g. `CATEGORY-BAND`.
    pub key: &'static str,
    /// Destination slot in the parsed log.
    pub slot: HeaderField,
    /// Single (last write wins) or multi (ordered append).
    pub cardinality: Cardinality,
    /// Value rule checked in strict mode.
    pub validator: Validator,
}

fn all_digits(value: &str) -> bool {
    !value.is_empty() && value.bytes().all(|b| b.is_ascii_digit())
}

/// Every recognized header key, one rule each.
pub static FIELD_RULES: &[FieldRule] = &[
    FieldRule {
        key: "START-OF-LOG",
        slot: HeaderField::Version,
        cardinality: Cardinality::Single,
        validator: Validator::None,
    },
    FieldRule {
        key: "CALLSIGN",
        slot: HeaderField::Callsign,
        cardinality: Cardinality::Single,
        validator: Validator::None,
    },
    FieldRule {
        key: "CONTEST",
        slot: HeaderField::Contest,
        cardinality: Cardinality::Single,
        validator: Validator::OneOf(CONTEST),
    },
    FieldRule {
        key: "CLAIMED-SCORE",
        slot: HeaderField::ClaimedScore,
        cardinality: Cardinality::Single,
        validator: Validator::Pattern(all_digits),
    },
    FieldRule {
        key: "CLUB",
        slot: HeaderField::Club,
        cardinality: Cardinality::Multi,
        validator: Validator::None,
    },
    FieldRule {
        key: "NAME",
        slot: HeaderField::Name,
        cardinality: Cardinality::Single,
        validator: Validator::None,
    },
    FieldRule {
        key: "CREATED-BY",
        slot: HeaderField::CreatedBy,
        cardinality: Cardinality::Single,
        validator: Validator::None,
    },
    FieldRule {
        key: "EMAIL",
        slot: HeaderField::Email,
        cardinality: Cardinality::Single,
        validator: Validator::None,
    },
    FieldRule {
        key: "LOCATION",
        slot: HeaderField::Location,
        cardinality: Cardinality::Single,
        validator: Validator::None,
    },
    FieldRule {
        key: "ADDRESS",
        slot: HeaderField::Address,
        cardinality: Cardinality::Multi,
        validator: Validator::None,
    },
    FieldRule {
        key: "ADDRESS-CITY",
        slot: HeaderField::AddressCity,
        cardinality: Cardinality::Single,
        validator: Validator::None,
    },
    FieldRule {
        key: "ADDRESS-STATE-PROVINCE",
        slot: HeaderField::AddressStateProvince,
        cardinality: Cardinality::Single,
        validator: Validator::None,
    },
    FieldRule {
        key: "ADDRESS-POSTALCODE",
        slot: HeaderField::AddressPostalcode,
        cardinality: Cardinality::Single,
        validator: Validator::None,
    },
    FieldRule {
        key: "ADDRESS-COUNTRY",
        slot: HeaderField::AddressCountry,
        cardinality: Cardinality::Single,
        validator: Validator::None,
    },
    FieldRule {
        key: "SOAPBOX",
        slot: HeaderField::Soapbox,
        cardinality: Cardinality::Multi,
        validator: Validator::None,
    },
    FieldRule {
        key: "OPERATORS",
        slot: HeaderField::Operators,
        cardinality: Cardinality::Multi,
        validator: Validator::None,
    },
    FieldRule {
        key: "CATEGORY-ASSISTED",
        slot: HeaderField::CategoryAssisted,
        cardinality: Cardinality::Single,
        validator: Validator::OneOf(CATEGORY_ASSISTED),
    },
    FieldRule {
        key: "CATEGORY-BAND",
        slot: HeaderField::CategoryBand,
        cardinality: Cardinality::Single,
        validator: Validator::OneOf(CATEGORY_BAND),
    },
    FieldRule {
        key: "CATEGORY-MODE",
        slot: HeaderField::CategoryMode,
        cardinality: Cardinality::Single,
        validator: Validator::OneOf(CATEGORY_MODE),
    },
    FieldRule {
        key: "CATEGORY-OPERATOR",
        slot: HeaderField::CategoryOperator,
        cardinality: Cardinality::Single,
        validator: Validator::OneOf(CATEGORY_OPERATOR),
    },
    FieldRule {
        key: "CATEGORY-POWER",
        slot: HeaderField::CategoryPower,
        cardinality: Cardinality::Single,
        validator: Validator::OneOf(CATEGORY_POWER),
    },
    FieldRule {
        key: "CATEGORY-STATION",
        slot: HeaderField::CategoryStation,
        cardinality: Cardinality::Single,
        validator: Validator::OneOf(CATEGORY_STATION),
    },
    FieldRule {
        key: "CATEGORY-TIME",
        slot: HeaderField::CategoryTime,
        cardinality: Cardinality::Single,
        validator: Validator::OneOf(CATEGORY_TIME),
    },
    FieldRule {
        key: "CATEGORY-TRANSMITTER",
        slot: HeaderField::CategoryTransmitter,
        cardinality: Cardinality::Single,
        validator: Validator::OneOf(CATEGORY_TRANSMITTER),
    },
    FieldRule {
        key: "CATEGORY-OVERLAY",
        slot: HeaderField::CategoryOverlay,
        cardinality: Cardinality::Single,
        validator: Validator::OneOf(CATEGORY_OVERLAY),
    },
];

static BY_KEY: LazyLock<HashMap<&'static str, &'static FieldRule>> =
    LazyLock::new(|| FIELD_RULES.iter().map(|rule| (rule.key, rule)).collect());

/// Looks up the rule for an exact header key. No side effects.
pub fn lookup(key: &str) -> Option<&'static FieldRule> {
    BY_KEY.get(key).copied()
}
