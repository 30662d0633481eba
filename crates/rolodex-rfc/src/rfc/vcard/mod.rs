//! vCard implementation (RFC 6350).
//!
//! This module provides types and parsing for vCard 4.0 contact data.
//!
//! ## Usage
//!
//! ```rust
//! use rolodex_rfc::rfc::vcard::{VCard, parse};
//!
//! let input = "\
//! BEGIN:VCARD\r\n\
//! VERSION:4.0\r\n\
//! FN:John Doe\r\n\
//! TEL;TYPE=home;PREF=2:tel:+1-555-555-0100\r\n\
//! TEL;TYPE=work;PREF=1:tel:+1-555-555-0199\r\n\
//! END:VCARD\r\n";
//!
//! let cards = parse(input).unwrap();
//! let best = VCard::preferred(&cards[0].tel).unwrap();
//! assert!(best.params.has_type("work"));
//! ```
//!
//! ## Submodules
//!
//! - [`core`] - Card, property and parameter types
//! - [`parse`] - Lexing, parsing and error types

pub mod core;
pub mod parse;

#[cfg(test)]
mod tests;

pub use self::core::{
    Address, ClientPidMap, Gender, Kind, Organization, Parameters, Property, PropertyName, Sex,
    StructuredName, VCard, ValueType,
};
pub use parse::{
    ContentLine, LexError, ParseError, ParseErrorKind, ParseResult, lex, parse, parse_single,
    parse_with,
};
