//! vCard parsing (RFC 6350).
//!
//! Parsing runs in two stages. [`lex`] unfolds the document and splits each
//! logical line into group, name, raw parameters and raw value. [`parse`]
//! then assembles cards from those lines, decoding parameters and values
//! per property.
//!
//! ## Usage
//!
//! ```rust
//! use rolodex_rfc::rfc::vcard::parse;
//!
//! let input = "\
//! BEGIN:VCARD\r\n\
//! VERSION:4.0\r\n\
//! FN:John Doe\r\n\
//! EMAIL:john@example.com\r\n\
//! END:VCARD\r\n";
//!
//! let cards = parse::parse(input).unwrap();
//! assert_eq!(cards[0].formatted_name(), "John Doe");
//! ```
//!
//! ## Features
//!
//! - vCard 4.0 only
//! - Handles line folding/unfolding
//! - Parses property groups (item1.TEL)
//! - Parses structured values (N, ADR, ORG, GENDER, CLIENTPIDMAP)
//! - Keeps unknown and `x-` properties and parameters

mod error;
mod lexer;
mod params;
mod parser;
mod values;


pub use error::{LexError, ParseError, ParseErrorKind, ParseResult};
pub use lexer::{ContentLine, lex, normalize_line_endings, parse_content_line, unfold};
pub use params::{
    decode_calscale, decode_extensions, decode_params, decode_pref, decode_single, decode_sort_as,
    decode_types, decode_value,
};
pub use parser::{parse, parse_single, parse_with};
pub use values::{
    SUPPORTED_VERSION, parse_address, parse_client_pid_map, parse_gender, parse_organization,
    parse_structured_name, parse_version, split_component, split_structured, text_or_verbatim,
    unescape_text,
};
