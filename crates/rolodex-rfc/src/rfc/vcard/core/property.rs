//! vCard property types (RFC 6350 §6).

use serde::Serialize;

use super::parameter::{Parameters, ValueType, types};

/// A decoded vCard property.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Property<T> {
    /// Optional property group (e.g., "item1" in "item1.TEL").
    #[serde(skip_serializing_if = "Option::is_none")]
    pub group: Option<String>,
    pub params: Parameters,
    pub value: T,
}

/// Whether a parameter decoder applies to a property.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Allow {
    Never,
    Always,
    /// Only when the effective VALUE type is the given one.
    When(ValueType),
}

impl Allow {
    /// Resolves against the property's effective value type.
    #[must_use]
    pub fn applies(self, effective: Option<ValueType>) -> bool {
        match self {
            Self::Never => false,
            Self::Always => true,
            Self::When(vt) => effective == Some(vt),
        }
    }
}

/// Which parameter decoders apply to a property.
///
/// The `x-` extension decoder applies to every property and is not listed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParamSpec {
    /// Allowed VALUE types; the first is the default. Empty when the
    /// property takes no VALUE parameter.
    pub value: &'static [ValueType],
    /// Recognized TYPE tokens, or `None` when TYPE does not apply.
    pub types: Option<&'static [&'static str]>,
    pub language: Allow,
    pub pref: Allow,
    pub altid: Allow,
    pub pid: Allow,
    pub media_type: Allow,
    pub calscale: Allow,
    pub sort_as: Allow,
    pub geo: Allow,
    pub tz: Allow,
    pub label: Allow,
}

impl ParamSpec {
    /// No decoders beyond the extension catch-all.
    pub const NONE: Self = Self {
        value: &[],
        types: None,
        language: Allow::Never,
        pref: Allow::Never,
        altid: Allow::Never,
        pid: Allow::Never,
        media_type: Allow::Never,
        calscale: Allow::Never,
        sort_as: Allow::Never,
        geo: Allow::Never,
        tz: Allow::Never,
        label: Allow::Never,
    };

    /// The broad set applied to properties this crate does not know.
    pub const GENERIC: Self = Self {
        value: ValueType::ALL,
        types: Some(types::GENERAL),
        language: Allow::Always,
        pref: Allow::Always,
        altid: Allow::Always,
        pid: Allow::Always,
        media_type: Allow::Always,
        calscale: Allow::Always,
        sort_as: Allow::Always,
        geo: Allow::Always,
        tz: Allow::Always,
        label: Allow::Always,
    };

    /// The VALUE type assumed when the parameter is absent.
    #[must_use]
    pub fn default_value(&self) -> Option<ValueType> {
        self.value.first().copied()
    }
}

const TEXT: &[ValueType] = &[ValueType::Text];
const URI: &[ValueType] = &[ValueType::Uri];
const TEXT_OR_URI: &[ValueType] = &[ValueType::Text, ValueType::Uri];
const URI_OR_TEXT: &[ValueType] = &[ValueType::Uri, ValueType::Text];
const DATE_OR_TEXT: &[ValueType] = &[ValueType::DateAndOrTime, ValueType::Text];

/// PID, PREF, ALTID and general TYPE: the usual set for multi-instance
/// properties.
const MULTI: ParamSpec = ParamSpec {
    types: Some(types::GENERAL),
    pref: Allow::Always,
    altid: Allow::Always,
    pid: Allow::Always,
    ..ParamSpec::NONE
};

const URI_MULTI: ParamSpec = ParamSpec {
    value: URI,
    media_type: Allow::Always,
    ..MULTI
};

const TEXT_MULTI: ParamSpec = ParamSpec {
    value: TEXT,
    ..MULTI
};

const LOCALIZED_TEXT_MULTI: ParamSpec = ParamSpec {
    language: Allow::Always,
    ..TEXT_MULTI
};

/// Every property defined by RFC 6350, except BEGIN and END which delimit
/// cards rather than describe them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PropertyName {
    // General
    Source,
    Kind,
    Xml,
    // Identification
    Fn,
    N,
    Nickname,
    Photo,
    Bday,
    Anniversary,
    Gender,
    // Delivery addressing
    Adr,
    // Communications
    Tel,
    Email,
    Impp,
    Lang,
    // Geographical
    Tz,
    Geo,
    // Organizational
    Title,
    Role,
    Logo,
    Org,
    Member,
    Related,
    // Explanatory
    Categories,
    Note,
    Prodid,
    Rev,
    Sound,
    Uid,
    Clientpidmap,
    Url,
    Version,
    // Security
    Key,
    // Calendar
    Fburl,
    Caladruri,
    Caluri,
}

impl PropertyName {
    /// Looks up a property by its uppercase name.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        Some(match name {
            "SOURCE" => Self::Source,
            "KIND" => Self::Kind,
            "XML" => Self::Xml,
            "FN" => Self::Fn,
            "N" => Self::N,
            "NICKNAME" => Self::Nickname,
            "PHOTO" => Self::Photo,
            "BDAY" => Self::Bday,
            "ANNIVERSARY" => Self::Anniversary,
            "GENDER" => Self::Gender,
            "ADR" => Self::Adr,
            "TEL" => Self::Tel,
            "EMAIL" => Self::Email,
            "IMPP" => Self::Impp,
            "LANG" => Self::Lang,
            "TZ" => Self::Tz,
            "GEO" => Self::Geo,
            "TITLE" => Self::Title,
            "ROLE" => Self::Role,
            "LOGO" => Self::Logo,
            "ORG" => Self::Org,
            "MEMBER" => Self::Member,
            "RELATED" => Self::Related,
            "CATEGORIES" => Self::Categories,
            "NOTE" => Self::Note,
            "PRODID" => Self::Prodid,
            "REV" => Self::Rev,
            "SOUND" => Self::Sound,
            "UID" => Self::Uid,
            "CLIENTPIDMAP" => Self::Clientpidmap,
            "URL" => Self::Url,
            "VERSION" => Self::Version,
            "KEY" => Self::Key,
            "FBURL" => Self::Fburl,
            "CALADRURI" => Self::Caladruri,
            "CALURI" => Self::Caluri,
            _ => return None,
        })
    }

    /// Returns the property name as written in vCard text.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Source => "SOURCE",
            Self::Kind => "KIND",
            Self::Xml => "XML",
            Self::Fn => "FN",
            Self::N => "N",
            Self::Nickname => "NICKNAME",
            Self::Photo => "PHOTO",
            Self::Bday => "BDAY",
            Self::Anniversary => "ANNIVERSARY",
            Self::Gender => "GENDER",
            Self::Adr => "ADR",
            Self::Tel => "TEL",
            Self::Email => "EMAIL",
            Self::Impp => "IMPP",
            Self::Lang => "LANG",
            Self::Tz => "TZ",
            Self::Geo => "GEO",
            Self::Title => "TITLE",
            Self::Role => "ROLE",
            Self::Logo => "LOGO",
            Self::Org => "ORG",
            Self::Member => "MEMBER",
            Self::Related => "RELATED",
            Self::Categories => "CATEGORIES",
            Self::Note => "NOTE",
            Self::Prodid => "PRODID",
            Self::Rev => "REV",
            Self::Sound => "SOUND",
            Self::Uid => "UID",
            Self::Clientpidmap => "CLIENTPIDMAP",
            Self::Url => "URL",
            Self::Version => "VERSION",
            Self::Key => "KEY",
            Self::Fburl => "FBURL",
            Self::Caladruri => "CALADRURI",
            Self::Caluri => "CALURI",
        }
    }

    /// Returns the parameter decoders that apply to this property.
    #[must_use]
    pub const fn param_spec(self) -> ParamSpec {
        match self {
            Self::Version | Self::Kind | Self::Prodid => ParamSpec {
                value: TEXT,
                ..ParamSpec::NONE
            },
            Self::Rev => ParamSpec {
                value: &[ValueType::Timestamp],
                ..ParamSpec::NONE
            },
            Self::Uid => ParamSpec {
                value: URI_OR_TEXT,
                ..ParamSpec::NONE
            },
            Self::Clientpidmap => ParamSpec::NONE,
            Self::Xml => ParamSpec {
                value: TEXT,
                altid: Allow::Always,
                ..ParamSpec::NONE
            },
            Self::Source | Self::Member => ParamSpec {
                types: None,
                ..URI_MULTI
            },
            Self::Photo
            | Self::Impp
            | Self::Geo
            | Self::Url
            | Self::Fburl
            | Self::Caladruri
            | Self::Caluri => URI_MULTI,
            Self::Logo | Self::Sound => ParamSpec {
                language: Allow::Always,
                ..URI_MULTI
            },
            Self::Fn | Self::Nickname | Self::Title | Self::Role | Self::Note => {
                LOCALIZED_TEXT_MULTI
            }
            Self::Email | Self::Categories => TEXT_MULTI,
            Self::N => ParamSpec {
                value: TEXT,
                language: Allow::Always,
                altid: Allow::Always,
                sort_as: Allow::Always,
                ..ParamSpec::NONE
            },
            Self::Org => ParamSpec {
                sort_as: Allow::Always,
                ..LOCALIZED_TEXT_MULTI
            },
            Self::Bday => ParamSpec {
                value: DATE_OR_TEXT,
                language: Allow::When(ValueType::Text),
                altid: Allow::Always,
                calscale: Allow::When(ValueType::DateAndOrTime),
                ..ParamSpec::NONE
            },
            Self::Anniversary => ParamSpec {
                value: DATE_OR_TEXT,
                altid: Allow::Always,
                calscale: Allow::When(ValueType::DateAndOrTime),
                ..ParamSpec::NONE
            },
            Self::Gender => ParamSpec {
                value: TEXT,
                language: Allow::When(ValueType::Text),
                ..ParamSpec::NONE
            },
            Self::Adr => ParamSpec {
                label: Allow::Always,
                geo: Allow::Always,
                tz: Allow::Always,
                ..LOCALIZED_TEXT_MULTI
            },
            Self::Tel => ParamSpec {
                value: TEXT_OR_URI,
                types: Some(types::TEL),
                media_type: Allow::When(ValueType::Uri),
                ..MULTI
            },
            Self::Lang => ParamSpec {
                value: &[ValueType::LanguageTag],
                ..MULTI
            },
            Self::Tz => ParamSpec {
                value: &[ValueType::Text, ValueType::Uri, ValueType::UtcOffset],
                media_type: Allow::Always,
                ..MULTI
            },
            Self::Related => ParamSpec {
                value: URI_OR_TEXT,
                types: Some(types::RELATED),
                language: Allow::When(ValueType::Text),
                media_type: Allow::When(ValueType::Uri),
                ..MULTI
            },
            Self::Key => ParamSpec {
                value: URI_OR_TEXT,
                media_type: Allow::When(ValueType::Uri),
                ..MULTI
            },
        }
    }
}
