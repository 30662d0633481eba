//! vCard core types (RFC 6350).
//!
//! - [`VCard`] - Complete, validated vCard
//! - [`VCardBuilder`] - Card under construction between BEGIN and END
//! - [`Property`] - Property value with its decoded parameters
//! - [`Parameters`] - Decoded parameters
//! - [`PropertyName`] - Every property RFC 6350 defines
//!
//! ## Structured Types
//!
//! - [`StructuredName`] - N property
//! - [`Address`] - ADR property
//! - [`Organization`] - ORG property
//! - [`Gender`] - GENDER property
//! - [`ClientPidMap`] - CLIENTPIDMAP property

mod parameter;
mod property;
mod structured;
mod vcard;

pub use parameter::{Parameters, RawParameter, ValueType, is_x_name, types};
pub use property::{Allow, ParamSpec, Property, PropertyName};
pub use structured::{Address, ClientPidMap, Gender, Kind, Organization, Sex, StructuredName};
pub use vcard::{VCard, VCardBuilder};
