//! vCard object types (RFC 6350).

use std::collections::BTreeMap;

use serde::Serialize;

use super::property::{PropertyName, Property};
use super::structured::{Address, ClientPidMap, Gender, Kind, Organization, StructuredName};

/// A complete, validated vCard.
///
/// Single-instance properties are `Option`s (VERSION and FN are required
/// and always present); multi-instance properties are lists in order of
/// appearance. Properties this crate does not know are kept in
/// [`VCard::extensions`] under their lowercased name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VCard {
    pub version: Property<String>,
    #[serde(rename = "fn")]
    pub formatted_name: Property<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub n: Option<Property<StructuredName>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub kind: Option<Property<Kind>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bday: Option<Property<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub anniversary: Option<Property<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gender: Option<Property<Gender>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prodid: Option<Property<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rev: Option<Property<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub uid: Option<Property<String>>,

    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub source: Vec<Property<String>>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub xml: Vec<Property<String>>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub nickname: Vec<Property<Vec<String>>>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub photo: Vec<Property<String>>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub adr: Vec<Property<Address>>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub tel: Vec<Property<String>>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub email: Vec<Property<String>>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub impp: Vec<Property<String>>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub lang: Vec<Property<String>>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub tz: Vec<Property<String>>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub geo: Vec<Property<String>>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub title: Vec<Property<String>>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub role: Vec<Property<String>>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub logo: Vec<Property<String>>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub org: Vec<Property<Organization>>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub member: Vec<Property<String>>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub related: Vec<Property<String>>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub categories: Vec<Property<Vec<String>>>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub note: Vec<Property<String>>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub sound: Vec<Property<String>>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub clientpidmap: Vec<Property<ClientPidMap>>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub url: Vec<Property<String>>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub key: Vec<Property<String>>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub fburl: Vec<Property<String>>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub caladruri: Vec<Property<String>>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub caluri: Vec<Property<String>>,

    /// Unrecognized and `x-` properties, keyed by lowercased name.
    #[serde(flatten)]
    pub extensions: BTreeMap<String, Vec<Property<String>>>,
}

impl VCard {
    /// Returns the FN value.
    #[must_use]
    pub fn formatted_name(&self) -> &str {
        &self.formatted_name.value
    }

    /// Returns the instances of an extension property, ignoring case.
    #[must_use]
    pub fn extension(&self, name: &str) -> &[Property<String>] {
        self.extensions
            .get(&name.to_ascii_lowercase())
            .map_or(&[], Vec::as_slice)
    }

    /// Returns the TEL or EMAIL instance with the lowest PREF, preferring
    /// earlier instances on ties. Instances without PREF rank last.
    #[must_use]
    pub fn preferred<'a>(props: &'a [Property<String>]) -> Option<&'a Property<String>> {
        props
            .iter()
            .enumerate()
            .min_by_key(|(idx, p)| (p.params.pref.map_or(u16::MAX, u16::from), *idx))
            .map(|(_, p)| p)
    }
}

/// A card under construction between BEGIN and END.
///
/// Slots are filled property by property; [`VCardBuilder::build`] checks
/// that the required properties were seen.
#[derive(Debug, Default)]
pub struct VCardBuilder {
    pub(crate) version: Option<Property<String>>,
    pub(crate) formatted_name: Option<Property<String>>,
    pub(crate) n: Option<Property<StructuredName>>,
    pub(crate) kind: Option<Property<Kind>>,
    pub(crate) bday: Option<Property<String>>,
    pub(crate) anniversary: Option<Property<String>>,
    pub(crate) gender: Option<Property<Gender>>,
    pub(crate) prodid: Option<Property<String>>,
    pub(crate) rev: Option<Property<String>>,
    pub(crate) uid: Option<Property<String>>,
    pub(crate) source: Vec<Property<String>>,
    pub(crate) xml: Vec<Property<String>>,
    pub(crate) nickname: Vec<Property<Vec<String>>>,
    pub(crate) photo: Vec<Property<String>>,
    pub(crate) adr: Vec<Property<Address>>,
    pub(crate) tel: Vec<Property<String>>,
    pub(crate) email: Vec<Property<String>>,
    pub(crate) impp: Vec<Property<String>>,
    pub(crate) lang: Vec<Property<String>>,
    pub(crate) tz: Vec<Property<String>>,
    pub(crate) geo: Vec<Property<String>>,
    pub(crate) title: Vec<Property<String>>,
    pub(crate) role: Vec<Property<String>>,
    pub(crate) logo: Vec<Property<String>>,
    pub(crate) org: Vec<Property<Organization>>,
    pub(crate) member: Vec<Property<String>>,
    pub(crate) related: Vec<Property<String>>,
    pub(crate) categories: Vec<Property<Vec<String>>>,
    pub(crate) note: Vec<Property<String>>,
    pub(crate) sound: Vec<Property<String>>,
    pub(crate) clientpidmap: Vec<Property<ClientPidMap>>,
    pub(crate) url: Vec<Property<String>>,
    pub(crate) key: Vec<Property<String>>,
    pub(crate) fburl: Vec<Property<String>>,
    pub(crate) caladruri: Vec<Property<String>>,
    pub(crate) caluri: Vec<Property<String>>,
    pub(crate) extensions: BTreeMap<String, Vec<Property<String>>>,
}

impl VCardBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds an instance of a property this crate does not know.
    pub fn push_extension(&mut self, name: &str, prop: Property<String>) {
        self.extensions
            .entry(name.to_ascii_lowercase())
            .or_default()
            .push(prop);
    }

    /// Returns the required properties that have not been seen yet.
    #[must_use]
    pub fn missing(&self) -> Vec<PropertyName> {
        let mut missing = Vec::new();
        if self.version.is_none() {
            missing.push(PropertyName::Version);
        }
        if self.formatted_name.is_none() {
            missing.push(PropertyName::Fn);
        }
        missing
    }

    /// Finishes the card.
    ///
    /// ## Errors
    /// Returns the missing required properties if VERSION or FN was never set.
    pub fn build(self) -> Result<VCard, Vec<PropertyName>> {
        let missing = self.missing();
        let (Some(version), Some(formatted_name)) = (self.version, self.formatted_name) else {
            return Err(missing);
        };

        Ok(VCard {
            version,
            formatted_name,
            n: self.n,
            kind: self.kind,
            bday: self.bday,
            anniversary: self.anniversary,
            gender: self.gender,
            prodid: self.prodid,
            rev: self.rev,
            uid: self.uid,
            source: self.source,
            xml: self.xml,
            nickname: self.nickname,
            photo: self.photo,
            adr: self.adr,
            tel: self.tel,
            email: self.email,
            impp: self.impp,
            lang: self.lang,
            tz: self.tz,
            geo: self.geo,
            title: self.title,
            role: self.role,
            logo: self.logo,
            org: self.org,
            member: self.member,
            related: self.related,
            categories: self.categories,
            note: self.note,
            sound: self.sound,
            clientpidmap: self.clientpidmap,
            url: self.url,
            key: self.key,
            fburl: self.fburl,
            caladruri: self.caladruri,
            caluri: self.caluri,
            extensions: self.extensions,
        })
    }
}
