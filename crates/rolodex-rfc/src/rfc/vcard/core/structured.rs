//! Structured vCard types (RFC 6350).
//!
//! These types represent structured property values like N, ADR, and ORG.

use serde::{Serialize, Serializer};

/// Structured name (N property, RFC 6350 §6.2.2).
///
/// All components may be empty.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StructuredName {
    /// Family names (surnames).
    pub surnames: Vec<String>,
    /// Given names (first names).
    pub given_names: Vec<String>,
    /// Additional names (middle names).
    pub additional_names: Vec<String>,
    /// Honorific prefixes (e.g., "Mr.", "Dr.").
    pub honorific_prefixes: Vec<String>,
    /// Honorific suffixes (e.g., "Jr.", "M.D.").
    pub honorific_suffixes: Vec<String>,
}

/// Address (ADR property, RFC 6350 §6.3.1).
///
/// Components missing from the value are empty strings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Address {
    pub post_office_box: String,
    /// Apartment or suite number.
    pub extended_address: String,
    pub street_address: String,
    /// City.
    pub locality: String,
    /// State or province.
    pub region: String,
    pub postal_code: String,
    pub country_name: String,
}

/// Organization (ORG property, RFC 6350 §6.6.4).
///
/// First value is the organizational name, subsequent values are
/// organizational units in order of decreasing specificity.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Organization {
    pub name: String,
    pub units: Vec<String>,
}

/// Gender (GENDER property, RFC 6350 §6.2.7).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Gender {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sex: Option<Sex>,
    /// Free-form gender identity.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub identity: Option<String>,
}

/// Sex component of GENDER property.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Sex {
    #[serde(rename = "M")]
    Male,
    #[serde(rename = "F")]
    Female,
    #[serde(rename = "O")]
    Other,
    /// None or not applicable.
    #[serde(rename = "N")]
    NotApplicable,
    #[serde(rename = "U")]
    Unknown,
}

impl Sex {
    /// Parses a sex code. Codes are case-sensitive.
    #[must_use]
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "M" => Some(Self::Male),
            "F" => Some(Self::Female),
            "O" => Some(Self::Other),
            "N" => Some(Self::NotApplicable),
            "U" => Some(Self::Unknown),
            _ => None,
        }
    }
}

/// Client PID map entry (CLIENTPIDMAP property, RFC 6350 §6.7.7).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ClientPidMap {
    /// Source identifier referenced by the second half of PID values.
    pub pid: u32,
    /// Globally unique URI for the source.
    pub uri: String,
}

/// Kind of object the vCard represents (KIND property, RFC 6350 §6.1.4).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Kind {
    Individual,
    Group,
    Org,
    Location,
    /// Extension or IANA-registered kind, kept as written.
    Other(String),
}

impl Kind {
    /// Parses a KIND value, ignoring case for the well-known kinds.
    #[must_use]
    pub fn from_value(value: &str) -> Self {
        match value.to_ascii_lowercase().as_str() {
            "individual" => Self::Individual,
            "group" => Self::Group,
            "org" => Self::Org,
            "location" => Self::Location,
            _ => Self::Other(value.to_string()),
        }
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Individual => "individual",
            Self::Group => "group",
            Self::Org => "org",
            Self::Location => "location",
            Self::Other(s) => s,
        }
    }
}

impl Serialize for Kind {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}
