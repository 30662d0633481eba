//! vCard lexer for line unfolding and content line parsing.
//!
//! Content line grammar (RFC 6350 §3.3):
//!
//! ```text
//! contentline = [group "."] name *(";" param) ":" value CRLF
//! ```

use std::borrow::Cow;

use super::error::LexError;
use crate::rfc::vcard::core::RawParameter;

const CRLF: &str = "\r\n";

/// Key a bare `;token` parameter is filed under.
const BARE_PARAM_KEY: &str = "type";

/// A parsed content line before value interpretation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContentLine {
    /// Property group (e.g., "item1" in "item1.TEL").
    pub group: Option<String>,
    /// Property name (uppercase).
    pub name: String,
    /// Parameters in order of first appearance.
    pub params: Vec<RawParameter>,
    /// Raw, still-escaped value string.
    pub value: String,
}

impl ContentLine {
    /// Returns every value of every parameter named `key`, ignoring case.
    pub fn param_values<'a>(&'a self, key: &'a str) -> impl Iterator<Item = &'a str> {
        self.params
            .iter()
            .filter(move |p| p.is_named(key))
            .flat_map(|p| p.values.iter().map(String::as_str))
    }
}

/// Unfolds a vCard document.
///
/// Every CRLF followed by a single space or tab is removed, then blank and
/// whitespace-only lines are dropped. The result holds one logical line per
/// CRLF-separated line. Unfolding unfolded text changes nothing.
#[must_use]
pub fn unfold(input: &str) -> String {
    let mut spliced = String::with_capacity(input.len());
    let mut rest = input;

    while let Some(pos) = rest.find(CRLF) {
        let after = &rest[pos + CRLF.len()..];
        if after.starts_with([' ', '\t']) {
            // Continuation: drop CRLF and the single folding character
            spliced.push_str(&rest[..pos]);
            rest = &after[1..];
        } else {
            spliced.push_str(&rest[..pos + CRLF.len()]);
            rest = after;
        }
    }
    spliced.push_str(rest);

    spliced
        .split(CRLF)
        .filter(|line| !line.trim().is_empty())
        .collect::<Vec<_>>()
        .join(CRLF)
}

/// Rewrites bare LF line endings as CRLF, leaving existing CRLFs alone.
#[must_use]
pub fn normalize_line_endings(input: &str) -> Cow<'_, str> {
    if !input.contains('\n') {
        return Cow::Borrowed(input);
    }

    let mut result = String::with_capacity(input.len() + input.len() / 32);
    let mut prev = None;
    for c in input.chars() {
        if c == '\n' && prev != Some('\r') {
            result.push('\r');
        }
        result.push(c);
        prev = Some(c);
    }
    Cow::Owned(result)
}

/// Lexes a vCard document into content lines.
///
/// This enforces no semantics: missing properties or invalid values are
/// left for the parser.
///
/// ## Errors
/// Returns a [`LexError`] for the first line that does not match the
/// content-line grammar.
#[tracing::instrument(skip(input), fields(input_len = input.len()))]
pub fn lex(input: &str) -> Result<Vec<ContentLine>, LexError> {
    let unfolded = unfold(input);
    if unfolded.is_empty() {
        return Ok(Vec::new());
    }

    let lines = unfolded
        .split(CRLF)
        .enumerate()
        .map(|(idx, line)| parse_content_line(line, idx + 1))
        .collect::<Result<Vec<_>, _>>()?;

    tracing::trace!(count = lines.len(), "Lexed content lines");

    Ok(lines)
}

/// Parses a single unfolded content line into its components.
///
/// ## Errors
/// Returns an error if the line has no value separator, or its group or
/// name contains characters outside `[A-Za-z0-9-]`.
pub fn parse_content_line(line: &str, line_num: usize) -> Result<ContentLine, LexError> {
    let colon_pos = find_value_separator(line)
        .ok_or_else(|| LexError::new(line_num, "missing ':' separator"))?;

    let head = &line[..colon_pos];
    let value = &line[colon_pos + 1..];

    let (name_part, params_str) = match head.split_once(';') {
        Some((name_part, params_str)) => (name_part, Some(params_str)),
        None => (head, None),
    };

    let (group, name) = match name_part.split_once('.') {
        Some((group, name)) => (Some(group), name),
        None => (None, name_part),
    };

    if let Some(group) = group.filter(|g| !is_token(g)) {
        return Err(LexError::new(line_num, format!("invalid group: {group}")));
    }
    if !is_token(name) {
        return Err(LexError::new(
            line_num,
            format!("invalid property name: {name}"),
        ));
    }

    let params = params_str.map(parse_parameters).unwrap_or_default();

    Ok(ContentLine {
        group: group.map(String::from),
        name: name.to_ascii_uppercase(),
        params,
        value: value.to_string(),
    })
}

/// Returns whether `s` is a non-empty run of `[A-Za-z0-9-]`.
fn is_token(s: &str) -> bool {
    !s.is_empty() && s.chars().all(|c| c.is_ascii_alphanumeric() || c == '-')
}

/// Finds the colon that separates name/params from value.
///
/// Colons inside double-quoted parameter values do not count.
fn find_value_separator(line: &str) -> Option<usize> {
    let mut quotes = Quotes::default();
    line.char_indices()
        .find(|&(_, c)| quotes.outside(c) && c == ':')
        .map(|(i, _)| i)
}

/// Splits `s` on `sep` wherever it is not inside a double-quoted value.
fn split_unquoted(s: &str, sep: char) -> Vec<&str> {
    let mut parts = Vec::new();
    let mut quotes = Quotes::default();
    let mut start = 0;

    for (i, c) in s.char_indices() {
        if quotes.outside(c) && c == sep {
            parts.push(&s[start..i]);
            start = i + c.len_utf8();
        }
    }
    parts.push(&s[start..]);
    parts
}

/// Double-quote tracking for the parameter segment.
///
/// A quote opens a quoted value only directly after `=` or `,`; anywhere
/// else it is an ordinary character.
#[derive(Default)]
struct Quotes {
    open: bool,
    prev: Option<char>,
}

impl Quotes {
    /// Feeds the next character; returns whether it lies outside quotes.
    fn outside(&mut self, c: char) -> bool {
        let was_open = self.open;
        if c == '"' {
            if self.open {
                self.open = false;
            } else if matches!(self.prev, Some('=' | ',')) {
                self.open = true;
            }
        }
        self.prev = Some(c);
        !was_open && !self.open
    }
}

/// Tokenizes the parameter segment (everything between the name and the
/// value separator, without the leading `;`).
fn parse_parameters(s: &str) -> Vec<RawParameter> {
    let mut params: Vec<RawParameter> = Vec::new();

    for entry in split_unquoted(s, ';') {
        if entry.is_empty() {
            continue;
        }

        // Not RFC 6350 §5.6 compliant: a bare token is read as a TYPE value.
        let (key, value) = entry.split_once('=').unwrap_or((BARE_PARAM_KEY, entry));

        if key.eq_ignore_ascii_case("type") {
            // Not RFC compliant either: quotes are only stripped from a
            // list, so `TYPE="home"` keeps its quotes.
            let list = strip_quotes(value).filter(|inner| inner.contains(',')).unwrap_or(value);
            for piece in list.split(',') {
                append_param(&mut params, key, piece.to_ascii_lowercase());
            }
        } else {
            append_param(&mut params, key, value.to_string());
        }
    }

    params
}

fn strip_quotes(value: &str) -> Option<&str> {
    value
        .strip_prefix('"')
        .and_then(|inner| inner.strip_suffix('"'))
}

fn append_param(params: &mut Vec<RawParameter>, key: &str, value: String) {
    if let Some(param) = params.iter_mut().find(|p| p.name == key) {
        param.values.push(value);
    } else {
        params.push(RawParameter {
            name: key.to_string(),
            values: vec![value],
        });
    }
}
