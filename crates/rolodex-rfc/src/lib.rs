//! vCard 4.0 (RFC 6350) lexing and parsing.

pub mod rfc;
