//! vCard value parsers.

use super::error::{ParseError, ParseResult};
use crate::rfc::vcard::core::{
    Address, ClientPidMap, Gender, Organization, Sex, StructuredName, ValueType,
};

/// The only VERSION this crate accepts.
pub const SUPPORTED_VERSION: &str = "4.0";

const N_FIELDS: usize = 5;

/// Unescapes a vCard text value.
///
/// vCard escapes: \n, \N (newline), \, (comma), \; (semicolon), \\ (backslash).
/// Any other backslash is kept as written.
#[must_use]
pub fn unescape_text(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    let mut chars = s.chars().peekable();

    while let Some(c) = chars.next() {
        if c != '\\' {
            result.push(c);
            continue;
        }
        match chars.peek() {
            Some('n' | 'N') => {
                chars.next();
                result.push('\n');
            }
            Some(&escaped) if matches!(escaped, ',' | ';' | '\\') => {
                chars.next();
                result.push(escaped);
            }
            _ => result.push(c),
        }
    }

    result
}

/// Returns the value unescaped when its effective type is text, verbatim
/// otherwise.
#[must_use]
pub fn text_or_verbatim(raw: &str, effective: Option<ValueType>) -> String {
    if effective == Some(ValueType::Text) {
        unescape_text(raw)
    } else {
        raw.to_string()
    }
}

/// Splits on `sep` wherever it is not backslash-escaped. Pieces are
/// returned still escaped.
fn split_unescaped(s: &str, sep: char) -> Vec<&str> {
    let mut parts = Vec::new();
    let mut start = 0;
    let mut escaped = false;

    for (i, c) in s.char_indices() {
        if escaped {
            escaped = false;
        } else if c == '\\' {
            escaped = true;
        } else if c == sep {
            parts.push(&s[start..i]);
            start = i + c.len_utf8();
        }
    }

    parts.push(&s[start..]);
    parts
}

/// Splits a structured value on unescaped semicolons.
#[must_use]
pub fn split_structured(s: &str) -> Vec<&str> {
    split_unescaped(s, ';')
}

/// Splits a component value on unescaped commas and unescapes each piece.
///
/// An empty component yields no pieces.
#[must_use]
pub fn split_component(s: &str) -> Vec<String> {
    if s.is_empty() {
        return Vec::new();
    }
    split_unescaped(s, ',').into_iter().map(unescape_text).collect()
}

/// Checks the VERSION value.
///
/// ## Errors
/// Returns an error for anything but `4.0`.
pub fn parse_version(value: &str, line_num: usize) -> ParseResult<String> {
    if value == SUPPORTED_VERSION {
        Ok(value.to_string())
    } else {
        Err(ParseError::invalid_value(
            line_num,
            format!("only vCard version {SUPPORTED_VERSION} supported, got {value}"),
        ))
    }
}

/// Parses a structured name (N property).
///
/// ## Errors
/// Returns an error unless the value has exactly 5 fields.
pub fn parse_structured_name(value: &str, line_num: usize) -> ParseResult<StructuredName> {
    let parts = split_structured(value);

    let [surnames, given, additional, prefixes, suffixes] = parts.as_slice() else {
        return Err(ParseError::invalid_value(
            line_num,
            format!("N should have {N_FIELDS} parts, got {}", parts.len()),
        ));
    };

    Ok(StructuredName {
        surnames: split_component(surnames),
        given_names: split_component(given),
        additional_names: split_component(additional),
        honorific_prefixes: split_component(prefixes),
        honorific_suffixes: split_component(suffixes),
    })
}

/// Parses an address (ADR property).
///
/// Missing trailing fields are left empty; fields past the seventh are
/// ignored.
#[must_use]
pub fn parse_address(value: &str) -> Address {
    let parts = split_structured(value);
    let field = |idx: usize| parts.get(idx).map(|s| unescape_text(s)).unwrap_or_default();

    Address {
        post_office_box: field(0),
        extended_address: field(1),
        street_address: field(2),
        locality: field(3),
        region: field(4),
        postal_code: field(5),
        country_name: field(6),
    }
}

/// Parses an organization (ORG property).
#[must_use]
pub fn parse_organization(value: &str) -> Organization {
    let mut parts = split_structured(value).into_iter().map(unescape_text);

    let name = parts.next().unwrap_or_default();
    let units = parts.collect();

    Organization { name, units }
}

/// Parses a gender (GENDER property).
///
/// ## Errors
/// Returns an error if the sex component is not one of M, F, O, N, U.
pub fn parse_gender(value: &str, line_num: usize) -> ParseResult<Gender> {
    let parts = split_structured(value);

    let sex = match parts.first().filter(|s| !s.is_empty()) {
        Some(code) => Some(Sex::from_code(code).ok_or_else(|| {
            ParseError::invalid_value(line_num, format!("unknown gender: {code}"))
        })?),
        None => None,
    };

    let identity = parts
        .get(1)
        .filter(|s| !s.is_empty())
        .map(|s| unescape_text(s));

    Ok(Gender { sex, identity })
}

/// Parses a client PID map (CLIENTPIDMAP property).
///
/// ## Errors
/// Returns an error if the value is not `pid;uri` with an integer pid.
pub fn parse_client_pid_map(value: &str, line_num: usize) -> ParseResult<ClientPidMap> {
    let Some((pid, uri)) = value.split_once(';') else {
        return Err(ParseError::invalid_value(
            line_num,
            "CLIENTPIDMAP requires a source id and a URI",
        ));
    };

    let pid = pid.parse::<u32>().map_err(|err| {
        ParseError::invalid_value(
            line_num,
            format!("invalid source id in CLIENTPIDMAP: {pid}: {err}"),
        )
    })?;

    Ok(ClientPidMap {
        pid,
        uri: uri.to_string(),
    })
}
