//! Parsed log accumulator and its generic map view.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::{catalog::HeaderField, qso::Qso};

/// Cabrillo format version recorded when `START-OF-LOG` is absent.
pub const CABRILLO_VERSION: &str = "3.0";

/// One fully parsed Cabrillo log.
///
/// A fixed record: recognized header keys land in the fields below,
/// unrecognized keys are dropped. Built in one pass and never mutated by the
/// parser afterward.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParsedLog {
    /// `START-OF-LOG` value; defaults to [`CABRILLO_VERSION`].
    pub version: String,
    /// Submitting station callsign.
    pub callsign: Option<String>,
    /// Declared contest identifier; gates QSO decoding.
    pub contest: Option<String>,
    /// Claimed score digits, kept as text.
    pub claimed_score: Option<String>,
    /// Operator name.
    pub name: Option<String>,
    /// Logging software tag.
    pub created_by: Option<String>,
    /// Contact email.
    pub email: Option<String>,
    /// Station location / section.
    pub location: Option<String>,
    /// Mailing city.
    pub address_city: Option<String>,
    /// Mailing state or province.
    pub address_state_province: Option<String>,
    /// Mailing postal code.
    pub address_postalcode: Option<String>,
    /// Mailing country.
    pub address_country: Option<String>,
    /// Club lines, in encounter order.
    pub club: Vec<String>,
    /// Street-address lines, in encounter order.
    pub address: Vec<String>,
    /// Soapbox comment lines, in encounter order.
    pub soapbox: Vec<String>,
    /// Operator callsign lines, in encounter order.
    pub operators: Vec<String>,
    /// `CATEGORY-ASSISTED` value.
    pub category_assisted: Option<String>,
    /// `CATEGORY-BAND` value.
    pub category_band: Option<String>,
    /// `CATEGORY-MODE` value.
    pub category_mode: Option<String>,
    /// `CATEGORY-OPERATOR` value.
    pub category_operator: Option<String>,
    /// `CATEGORY-POWER` value.
    pub category_power: Option<String>,
    /// `CATEGORY-STATION` value.
    pub category_station: Option<String>,
    /// `CATEGORY-TIME` value.
    pub category_time: Option<String>,
    /// `CATEGORY-TRANSMITTER` value.
    pub category_transmitter: Option<String>,
    /// `CATEGORY-OVERLAY` value.
    pub category_overlay: Option<String>,
    /// Decoded contact records, in encounter order.
    pub qsos: Vec<Qso>,
}

impl Default for ParsedLog {
    fn default() -> Self {
        Self {
            version: CABRILLO_VERSION.to_string(),
            callsign: None,
            contest: None,
            claimed_score: None,
            name: None,
            created_by: None,
            email: None,
            location: None,
            address_city: None,
            address_state_province: None,
            address_postalcode: None,
            address_country: None,
            club: Vec::new(),
            address: Vec::new(),
            soapbox: Vec::new(),
            operators: Vec::new(),
            category_assisted: None,
            category_band: None,
            category_mode: None,
            category_operator: None,
            category_power: None,
            category_station: None,
            category_time: None,
            category_transmitter: None,
            category_overlay: None,
            qsos: Vec::new(),
        }
    }
}

impl ParsedLog {
    /// Stores one validated (or lenient-passed) header value into its slot.
    ///
    /// Single slots overwrite, multi slots append.
    pub(crate) fn store(&mut self, slot: HeaderField, value: &str) {
        let owned = value.to_string();
        match slot {
            HeaderField::Version => self.version = owned,
            HeaderField::Callsign => self.callsign = Some(owned),
            HeaderField::Contest => self.contest = Some(owned),
            HeaderField::ClaimedScore => self.claimed_score = Some(owned),
            HeaderField::Name => self.name = Some(owned),
            HeaderField::CreatedBy => self.created_by = Some(owned),
            HeaderField::Email => self.email = Some(owned),
            HeaderField::Location => self.location = Some(owned),
            HeaderField::AddressCity => self.address_city = Some(owned),
            HeaderField::AddressStateProvince => self.address_state_province = Some(owned),
            HeaderField::AddressPostalcode => self.address_postalcode = Some(owned),
            HeaderField::AddressCountry => self.address_country = Some(owned),
            HeaderField::Club => self.club.push(owned),
            HeaderField::Address => self.address.push(owned),
            HeaderField::Soapbox => self.soapbox.push(owned),
            HeaderField::Operators => self.operators.push(owned),
            HeaderField::CategoryAssisted => self.category_assisted = Some(owned),
            HeaderField::CategoryBand => self.category_band = Some(owned),
            HeaderField::CategoryMode => self.category_mode = Some(owned),
            HeaderField::CategoryOperator => self.category_operator = Some(owned),
            HeaderField::CategoryPower => self.category_power = Some(owned),
            HeaderField::CategoryStation => self.category_station = Some(owned),
            HeaderField::CategoryTime => self.category_time = Some(owned),
            HeaderField::CategoryTransmitter => self.category_transmitter = Some(owned),
            HeaderField::CategoryOverlay => self.category_overlay = Some(owned),
        }
    }

    /// Renders the log as a generic key/value map for reflection-style
    /// consumers.
    ///
    /// Absent single fields and empty collections are omitted; `qsos`
    /// serialize through their serde derives.
    pub fn to_map(&self) -> Map<String, Value> {
        let mut map = Map::new();
        map.insert("version".to_string(), Value::String(self.version.clone()));

        let singles: [(&str, &Option<String>); 20] = [
            ("callsign", &self.callsign),
            ("contest", &self.contest),
            ("claimed_score", &self.claimed_score),
            ("name", &self.name),
            ("created_by", &self.created_by),
            ("email", &self.email),
            ("location", &self.location),
            ("address_city", &self.address_city),
            ("address_state_province", &self.address_state_province),
            ("address_postalcode", &self.address_postalcode),
            ("address_country", &self.address_country),
            ("category_assisted", &self.category_assisted),
            ("category_band", &self.category_band),
            ("category_mode", &self.category_mode),
            ("category_operator", &self.category_operator),
            ("category_power", &self.category_power),
            ("category_station", &self.category_station),
            ("category_time", &self.category_time),
            ("category_transmitter", &self.category_transmitter),
            ("category_overlay", &self.category_overlay),
        ];
        for (name, value) in singles {
            if let Some(v) = value {
                map.insert(name.to_string(), Value::String(v.clone()));
            }
        }

        let multis: [(&str, &Vec<String>); 4] = [
            ("club", &self.club),
            ("address", &self.address),
            ("soapbox", &self.soapbox),
            ("operators", &self.operators),
        ];
        for (name, values) in multis {
            if !values.is_empty() {
                let items = values.iter().cloned().map(Value::String).collect();
                map.insert(name.to_string(), Value::Array(items));
            }
        }

        if !self.qsos.is_empty() {
            map.insert(
                "qsos".to_string(),
                serde_json::to_value(&self.qsos).unwrap_or(Value::Null),
            );
        }
        map
    }
}
