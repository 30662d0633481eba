//! vCard parameter types (RFC 6350 §5).

use std::collections::BTreeMap;
use std::fmt;

use serde::Serialize;

/// A lexed parameter, before any property-specific interpretation.
///
/// The name is kept exactly as it appeared on the line; values accumulate
/// in order of appearance when the same name is repeated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawParameter {
    /// Parameter name as written.
    pub name: String,
    /// Parameter values.
    pub values: Vec<String>,
}

impl RawParameter {
    /// Returns whether the parameter name matches `name`, ignoring case.
    #[must_use]
    pub fn is_named(&self, name: &str) -> bool {
        self.name.eq_ignore_ascii_case(name)
    }

    /// Returns whether this is an `x-` extension parameter.
    #[must_use]
    pub fn is_extension(&self) -> bool {
        is_x_name(&self.name)
    }
}

/// Returns whether `token` starts with `x-` or `X-`.
#[must_use]
pub fn is_x_name(token: &str) -> bool {
    token
        .get(..2)
        .is_some_and(|prefix| prefix.eq_ignore_ascii_case("x-"))
}

/// Value data types usable in the VALUE parameter (RFC 6350 §5.2).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum ValueType {
    Text,
    Uri,
    Date,
    Time,
    DateTime,
    DateAndOrTime,
    Timestamp,
    Boolean,
    Integer,
    Float,
    UtcOffset,
    LanguageTag,
}

impl ValueType {
    /// Every built-in value type.
    pub const ALL: &'static [Self] = &[
        Self::Text,
        Self::Uri,
        Self::Date,
        Self::Time,
        Self::DateTime,
        Self::DateAndOrTime,
        Self::Timestamp,
        Self::Boolean,
        Self::Integer,
        Self::Float,
        Self::UtcOffset,
        Self::LanguageTag,
    ];

    /// Returns the RFC spelling of the type.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Uri => "uri",
            Self::Date => "date",
            Self::Time => "time",
            Self::DateTime => "date-time",
            Self::DateAndOrTime => "date-and-or-time",
            Self::Timestamp => "timestamp",
            Self::Boolean => "boolean",
            Self::Integer => "integer",
            Self::Float => "float",
            Self::UtcOffset => "utc-offset",
            Self::LanguageTag => "language-tag",
        }
    }

    /// Looks up a value type by name, ignoring case.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL
            .iter()
            .copied()
            .find(|vt| vt.as_str().eq_ignore_ascii_case(name))
    }
}

impl fmt::Display for ValueType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Decoded parameters of a property.
///
/// Only the parameters that apply to the property are ever populated; the
/// rest stay `None` whatever the input contained.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Parameters {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<ValueType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pref: Option<u8>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub altid: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pid: Option<String>,
    /// Recognized TYPE tokens, lowercased.
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub types: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub media_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub calscale: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sort_as: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub geo: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tz: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    /// `x-` parameters, copied verbatim.
    #[serde(flatten)]
    pub extensions: BTreeMap<String, Vec<String>>,
}

impl Parameters {
    /// Returns whether the TYPE list contains `token`, ignoring case.
    #[must_use]
    pub fn has_type(&self, token: &str) -> bool {
        self.types
            .as_ref()
            .is_some_and(|types| types.iter().any(|t| t.eq_ignore_ascii_case(token)))
    }
}

/// Common TYPE values as constants.
pub mod types {
    pub const HOME: &str = "home";
    pub const WORK: &str = "work";

    /// TYPE values accepted on every property that takes TYPE.
    pub const GENERAL: &[&str] = &[HOME, WORK];

    /// TYPE values accepted on TEL.
    pub const TEL: &[&str] = &[
        HOME,
        WORK,
        "text",
        "voice",
        "fax",
        "cell",
        "video",
        "pager",
        "textphone",
    ];

    /// TYPE values accepted on RELATED.
    pub const RELATED: &[&str] = &[
        HOME,
        WORK,
        "contact",
        "acquaintance",
        "friend",
        "met",
        "co-worker",
        "colleague",
        "co-resident",
        "neighbor",
        "child",
        "parent",
        "sibling",
        "spouse",
        "kin",
        "muse",
        "crush",
        "date",
        "sweetheart",
        "me",
        "agent",
        "emergency",
    ];
}
